mod common;

use common::TestEnv;
use domain_repair::exception::RepairException;
use domain_repair::model::entity::ticket::{DbTicket, TicketStatus};
use domain_repair::repository::{DbField, TicketRepo as _};
use domain_repair::service::{TicketLifecycleService as _, TicketQueryService as _};

#[tokio::test]
async fn two_writers_on_the_same_snapshot_serialize_to_one_winner() {
    let env = TestEnv::new();
    env.qualify_technician().await;
    let repo = env.provider.repo().clone();

    let ticket = env.provider.lifecycle().submit(env.submitter, env.content()).await.unwrap();

    // Both writers derived their change set from the same version.
    let accept = DbTicket {
        id: ticket.id,
        expect_version: ticket.version,
        status: DbField::Set(TicketStatus::InProgress),
        ..Default::default()
    };
    let cancel = DbTicket {
        id: ticket.id,
        expect_version: ticket.version,
        status: DbField::Set(TicketStatus::Cancelled),
        ..Default::default()
    };

    let winner = repo.update_with_lock(accept).await.unwrap();
    assert_eq!(winner.status, TicketStatus::InProgress);

    let err = RepairException::from(repo.update_with_lock(cancel).await.unwrap_err());
    assert!(matches!(err, RepairException::StaleTicket { .. }));

    // The loser left no trace.
    let view = env.provider.query().get(ticket.id).await.unwrap();
    assert_eq!(view.ticket.status, TicketStatus::InProgress);
    assert_eq!(view.ticket.version, winner.version);
}

#[tokio::test(flavor = "multi_thread")]
async fn racing_accept_and_cancel_produce_exactly_one_winner() {
    let env = TestEnv::new();
    env.qualify_technician().await;
    let lifecycle = env.provider.lifecycle();

    let ticket = lifecycle.submit(env.submitter, env.content()).await.unwrap();
    assert_eq!(ticket.status, TicketStatus::Pending);

    // Both transitions are legal from Pending and both close it to the other:
    // whatever the interleaving, exactly one may commit.
    let (accepted, cancelled) = tokio::join!(
        lifecycle.accept(env.technician, ticket.id),
        lifecycle.cancel(env.submitter, ticket.id),
    );
    assert_eq!(
        accepted.is_ok() as u8 + cancelled.is_ok() as u8,
        1,
        "accept: {accepted:?}, cancel: {cancelled:?}"
    );

    let view = env.provider.query().get(ticket.id).await.unwrap();
    match (accepted, cancelled) {
        (Ok(_), Err(_)) => assert_eq!(view.ticket.status, TicketStatus::InProgress),
        (Err(_), Ok(_)) => assert_eq!(view.ticket.status, TicketStatus::Cancelled),
        other => panic!("impossible outcome: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn operations_on_different_tickets_never_interfere() {
    let env = TestEnv::new();
    env.qualify_technician().await;
    let lifecycle = env.provider.lifecycle();

    let first = lifecycle.submit(env.submitter, env.content()).await.unwrap();
    let second = lifecycle.submit(env.submitter, env.content()).await.unwrap();

    let (a, b) = tokio::join!(
        lifecycle.accept(env.technician, first.id),
        lifecycle.accept(env.technician, second.id),
    );
    assert_eq!(a.unwrap().status, TicketStatus::InProgress);
    assert_eq!(b.unwrap().status, TicketStatus::InProgress);
}
