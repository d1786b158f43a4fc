use std::collections::HashSet;

use async_trait::async_trait;
use domain_repair::model::entity::{Building, Category, Floor, Technician};
use domain_repair::model::vo::Role;
use domain_repair::repository::ReadOnlyRepository;
use domain_repair::service::IdentityService;
use uuid::Uuid;

use super::MemRepo;

#[async_trait]
impl ReadOnlyRepository<Building> for MemRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Building>> {
        Ok(self.store.buildings.get(&id).map(|row| row.clone()))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Building>> {
        Ok(self.store.buildings.iter().map(|row| row.clone()).collect())
    }
}

#[async_trait]
impl ReadOnlyRepository<Floor> for MemRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Floor>> {
        Ok(self.store.floors.get(&id).map(|row| row.clone()))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Floor>> {
        Ok(self.store.floors.iter().map(|row| row.clone()).collect())
    }
}

#[async_trait]
impl ReadOnlyRepository<Category> for MemRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Category>> {
        Ok(self.store.categories.get(&id).map(|row| row.clone()))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Category>> {
        Ok(self.store.categories.iter().map(|row| row.clone()).collect())
    }
}

#[async_trait]
impl ReadOnlyRepository<Technician> for MemRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Technician>> {
        Ok(self.store.technicians.get(&id).map(|row| row.clone()))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Technician>> {
        Ok(self.store.technicians.iter().map(|row| row.clone()).collect())
    }
}

#[async_trait]
impl IdentityService for MemRepo {
    async fn roles_of(&self, user_id: Uuid) -> anyhow::Result<HashSet<Role>> {
        Ok(self.store.roles.get(&user_id).map(|roles| roles.clone()).unwrap_or_default())
    }
}
