mod common;

use common::TestEnv;
use domain_repair::exception::RepairException;
use domain_repair::model::entity::ticket::TicketStatus;
use domain_repair::service::{
    AssignmentService as _, CapabilityService as _, TicketLifecycleService as _,
};

#[tokio::test]
async fn manual_assignment_checks_both_capabilities() {
    let env = TestEnv::new();
    let assignment = env.provider.assignment();
    let capability = env.provider.capability();

    let ticket = env.provider.lifecycle().submit(env.submitter, env.content()).await.unwrap();

    // Unqualified on both axes: the area check fails first.
    let err = assignment.assign(env.supervisor, ticket.id, env.technician).await.unwrap_err();
    assert!(matches!(err, RepairException::MissingAreaCapability { .. }));

    capability
        .replace_area_capabilities(env.technician, vec![env.floor])
        .await
        .unwrap();
    let err = assignment.assign(env.supervisor, ticket.id, env.technician).await.unwrap_err();
    assert!(matches!(err, RepairException::MissingCategoryCapability { .. }));

    capability
        .replace_category_capabilities(env.technician, vec![env.category])
        .await
        .unwrap();
    let ticket = assignment.assign(env.supervisor, ticket.id, env.technician).await.unwrap();
    assert_eq!(ticket.status, TicketStatus::Pending);
    assert_eq!(ticket.technician_id, Some(env.technician));
    assert_eq!(ticket.supervisor_id, Some(env.supervisor));
}

#[tokio::test]
async fn manual_assignment_is_supervisor_only() {
    let env = TestEnv::new();
    env.qualify_technician().await;

    let ticket = env.provider.lifecycle().save_draft(env.submitter, env.content()).await.unwrap();
    let err = env
        .provider
        .assignment()
        .assign(env.submitter, ticket.id, env.technician)
        .await
        .unwrap_err();
    assert!(matches!(err, RepairException::SupervisorRequired { .. }));
}

#[tokio::test]
async fn auto_assignment_only_ever_picks_fully_qualified_technicians() {
    let env = TestEnv::new();
    env.qualify_technician().await;
    let second = env.extra_technician("Robin").await;

    // A partially qualified bystander must never be picked.
    let bystander = env.extra_technician("Sam").await;
    env.provider
        .capability()
        .replace_category_capabilities(bystander, vec![])
        .await
        .unwrap();

    let eligible = [env.technician, second];
    for _ in 0..10 {
        let ticket =
            env.provider.lifecycle().submit(env.submitter, env.content()).await.unwrap();
        assert_eq!(ticket.status, TicketStatus::Pending);
        let picked = ticket.technician_id.expect("auto-assignment bound a technician");
        assert!(eligible.contains(&picked), "picked an unqualified technician");
    }
}

#[tokio::test]
async fn supervisor_invoked_auto_assignment_records_the_supervisor() {
    let env = TestEnv::new();

    let ticket = env.provider.lifecycle().submit(env.submitter, env.content()).await.unwrap();
    assert_eq!(ticket.status, TicketStatus::Submitted);

    env.qualify_technician().await;
    let ticket = env
        .provider
        .assignment()
        .auto_assign(Some(env.supervisor), ticket.id)
        .await
        .unwrap();
    assert_eq!(ticket.status, TicketStatus::Pending);
    assert_eq!(ticket.technician_id, Some(env.technician));
    assert_eq!(ticket.supervisor_id, Some(env.supervisor));
}

#[tokio::test]
async fn auto_assignment_by_a_plain_user_is_forbidden() {
    let env = TestEnv::new();
    env.qualify_technician().await;

    let ticket = env.provider.lifecycle().save_draft(env.submitter, env.content()).await.unwrap();
    let err = env
        .provider
        .assignment()
        .auto_assign(Some(env.submitter), ticket.id)
        .await
        .unwrap_err();
    assert!(matches!(err, RepairException::SupervisorRequired { .. }));
}

#[tokio::test]
async fn pending_tickets_can_be_reassigned_but_started_ones_cannot() {
    let env = TestEnv::new();
    env.qualify_technician().await;
    let second = env.extra_technician("Robin").await;
    let assignment = env.provider.assignment();

    let ticket = env.provider.lifecycle().submit(env.submitter, env.content()).await.unwrap();
    assert_eq!(ticket.status, TicketStatus::Pending);

    let ticket = assignment.assign(env.supervisor, ticket.id, second).await.unwrap();
    assert_eq!(ticket.technician_id, Some(second));

    env.provider.lifecycle().accept(second, ticket.id).await.unwrap();
    let err = assignment.assign(env.supervisor, ticket.id, env.technician).await.unwrap_err();
    assert!(matches!(
        err,
        RepairException::InvalidTransition { from: TicketStatus::InProgress, .. }
    ));
}

#[tokio::test]
async fn the_eligible_listing_matches_the_registry() {
    let env = TestEnv::new();
    env.qualify_technician().await;
    let second = env.extra_technician("Robin").await;

    let mut listed: Vec<_> = env
        .provider
        .assignment()
        .eligible_technicians(env.floor, env.category)
        .await
        .unwrap()
        .into_iter()
        .map(|technician| technician.id)
        .collect();
    listed.sort();
    let mut expected = vec![env.technician, second];
    expected.sort();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn revoking_a_capability_shrinks_the_eligible_set() {
    let env = TestEnv::new();
    env.qualify_technician().await;

    env.provider
        .capability()
        .revoke_area_capability(env.technician, env.floor)
        .await
        .unwrap();

    let listed = env
        .provider
        .assignment()
        .eligible_technicians(env.floor, env.category)
        .await
        .unwrap();
    assert!(listed.is_empty());

    let ticket = env.provider.lifecycle().submit(env.submitter, env.content()).await.unwrap();
    assert_eq!(ticket.status, TicketStatus::Submitted);
}
