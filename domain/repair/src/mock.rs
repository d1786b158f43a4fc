use std::collections::HashSet;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::exception::RepairResult;
use crate::model::entity::ticket::{DbTicket, TicketStatus};
use crate::model::entity::{Building, Category, Floor, Rating, Technician, Ticket};
use crate::model::vo::Role;
use crate::repository::{
    CapabilityRepo, MutableRepository, RatingRepo, ReadOnlyRepository, TicketRepo,
};
use crate::service::{AssignmentService, IdentityService};

mock! {
    pub TicketRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Ticket> for TicketRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Ticket>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Ticket>>;
    }
    #[async_trait]
    impl MutableRepository<Ticket> for TicketRepo {
        async fn insert(&self, entity: &Ticket) -> anyhow::Result<Uuid>;
        async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()>;
    }
    #[async_trait]
    impl TicketRepo for TicketRepo {
        async fn update_with_lock(&self, changes: DbTicket) -> anyhow::Result<Ticket>;
        async fn get_by_submitter(
            &self,
            submitter_id: Uuid,
            status: Option<TicketStatus>,
        ) -> anyhow::Result<Vec<Ticket>>;
        async fn get_by_technician(
            &self,
            technician_id: Uuid,
            status: Option<TicketStatus>,
        ) -> anyhow::Result<Vec<Ticket>>;
        async fn get_unassigned(&self) -> anyhow::Result<Vec<Ticket>>;
        async fn count_by_status(&self, status: TicketStatus) -> anyhow::Result<u64>;
    }
}

mock! {
    pub CapabilityRepo {}
    #[async_trait]
    impl CapabilityRepo for CapabilityRepo {
        async fn grant_area(&self, technician_id: Uuid, floor_id: Uuid) -> anyhow::Result<()>;
        async fn revoke_area(&self, technician_id: Uuid, floor_id: Uuid) -> anyhow::Result<()>;
        async fn replace_areas(&self, technician_id: Uuid, floor_ids: &[Uuid]) -> anyhow::Result<()>;
        async fn areas_of(&self, technician_id: Uuid) -> anyhow::Result<Vec<Uuid>>;
        async fn technicians_for_floor(&self, floor_id: Uuid) -> anyhow::Result<Vec<Uuid>>;
        async fn has_area(&self, technician_id: Uuid, floor_id: Uuid) -> anyhow::Result<bool>;
        async fn grant_category(&self, technician_id: Uuid, category_id: Uuid) -> anyhow::Result<()>;
        async fn revoke_category(&self, technician_id: Uuid, category_id: Uuid) -> anyhow::Result<()>;
        async fn replace_categories(
            &self,
            technician_id: Uuid,
            category_ids: &[Uuid],
        ) -> anyhow::Result<()>;
        async fn categories_of(&self, technician_id: Uuid) -> anyhow::Result<Vec<Uuid>>;
        async fn technicians_for_category(&self, category_id: Uuid) -> anyhow::Result<Vec<Uuid>>;
        async fn has_category(&self, technician_id: Uuid, category_id: Uuid) -> anyhow::Result<bool>;
        async fn eligible_technicians(
            &self,
            floor_id: Uuid,
            category_id: Uuid,
        ) -> anyhow::Result<Vec<Uuid>>;
        async fn remove_technician(&self, technician_id: Uuid) -> anyhow::Result<()>;
    }
}

mock! {
    pub RatingRepo {}
    #[async_trait]
    impl RatingRepo for RatingRepo {
        async fn insert(&self, rating: &Rating) -> anyhow::Result<Uuid>;
        async fn get_by_ticket_id(&self, ticket_id: Uuid) -> anyhow::Result<Option<Rating>>;
        async fn get_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Rating>>;
    }
}

mock! {
    pub BuildingRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Building> for BuildingRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Building>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Building>>;
    }
}

mock! {
    pub FloorRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Floor> for FloorRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Floor>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Floor>>;
    }
}

mock! {
    pub CategoryRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Category> for CategoryRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Category>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Category>>;
    }
}

mock! {
    pub TechnicianRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Technician> for TechnicianRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Technician>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Technician>>;
    }
}

mock! {
    pub IdentityService {}
    #[async_trait]
    impl IdentityService for IdentityService {
        async fn roles_of(&self, user_id: Uuid) -> anyhow::Result<HashSet<Role>>;
    }
}

mock! {
    pub AssignmentService {}
    #[async_trait]
    impl AssignmentService for AssignmentService {
        async fn assign(
            &self,
            actor: Uuid,
            ticket_id: Uuid,
            technician_id: Uuid,
        ) -> RepairResult<Ticket>;
        async fn auto_assign(&self, actor: Option<Uuid>, ticket_id: Uuid) -> RepairResult<Ticket>;
        async fn eligible_technicians(
            &self,
            floor_id: Uuid,
            category_id: Uuid,
        ) -> RepairResult<Vec<Technician>>;
    }
}
