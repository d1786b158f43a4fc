use std::collections::HashSet;

use async_trait::async_trait;
use domain_repair::repository::CapabilityRepo;
use uuid::Uuid;

use super::MemRepo;

#[async_trait]
impl CapabilityRepo for MemRepo {
    async fn grant_area(&self, technician_id: Uuid, floor_id: Uuid) -> anyhow::Result<()> {
        self.store.area_capabilities.insert((technician_id, floor_id));
        Ok(())
    }

    async fn revoke_area(&self, technician_id: Uuid, floor_id: Uuid) -> anyhow::Result<()> {
        self.store.area_capabilities.remove(&(technician_id, floor_id));
        Ok(())
    }

    async fn replace_areas(&self, technician_id: Uuid, floor_ids: &[Uuid]) -> anyhow::Result<()> {
        self.store.area_capabilities.retain(|(technician, _)| *technician != technician_id);
        for floor_id in floor_ids {
            self.store.area_capabilities.insert((technician_id, *floor_id));
        }
        Ok(())
    }

    async fn areas_of(&self, technician_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
        let mut floors: Vec<Uuid> = self
            .store
            .area_capabilities
            .iter()
            .filter(|pair| pair.0 == technician_id)
            .map(|pair| pair.1)
            .collect();
        floors.sort();
        Ok(floors)
    }

    async fn technicians_for_floor(&self, floor_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
        let mut technicians: Vec<Uuid> = self
            .store
            .area_capabilities
            .iter()
            .filter(|pair| pair.1 == floor_id)
            .map(|pair| pair.0)
            .collect();
        technicians.sort();
        Ok(technicians)
    }

    async fn has_area(&self, technician_id: Uuid, floor_id: Uuid) -> anyhow::Result<bool> {
        Ok(self.store.area_capabilities.contains(&(technician_id, floor_id)))
    }

    async fn grant_category(&self, technician_id: Uuid, category_id: Uuid) -> anyhow::Result<()> {
        self.store.category_capabilities.insert((technician_id, category_id));
        Ok(())
    }

    async fn revoke_category(&self, technician_id: Uuid, category_id: Uuid) -> anyhow::Result<()> {
        self.store.category_capabilities.remove(&(technician_id, category_id));
        Ok(())
    }

    async fn replace_categories(
        &self,
        technician_id: Uuid,
        category_ids: &[Uuid],
    ) -> anyhow::Result<()> {
        self.store
            .category_capabilities
            .retain(|(technician, _)| *technician != technician_id);
        for category_id in category_ids {
            self.store.category_capabilities.insert((technician_id, *category_id));
        }
        Ok(())
    }

    async fn categories_of(&self, technician_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
        let mut categories: Vec<Uuid> = self
            .store
            .category_capabilities
            .iter()
            .filter(|pair| pair.0 == technician_id)
            .map(|pair| pair.1)
            .collect();
        categories.sort();
        Ok(categories)
    }

    async fn technicians_for_category(&self, category_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
        let mut technicians: Vec<Uuid> = self
            .store
            .category_capabilities
            .iter()
            .filter(|pair| pair.1 == category_id)
            .map(|pair| pair.0)
            .collect();
        technicians.sort();
        Ok(technicians)
    }

    async fn has_category(&self, technician_id: Uuid, category_id: Uuid) -> anyhow::Result<bool> {
        Ok(self.store.category_capabilities.contains(&(technician_id, category_id)))
    }

    async fn eligible_technicians(
        &self,
        floor_id: Uuid,
        category_id: Uuid,
    ) -> anyhow::Result<Vec<Uuid>> {
        let on_floor: HashSet<Uuid> = self
            .store
            .area_capabilities
            .iter()
            .filter(|pair| pair.1 == floor_id)
            .map(|pair| pair.0)
            .collect();
        let mut eligible: Vec<Uuid> = self
            .store
            .category_capabilities
            .iter()
            .filter(|pair| pair.1 == category_id && on_floor.contains(&pair.0))
            .map(|pair| pair.0)
            .collect();
        eligible.sort();
        eligible.dedup();
        Ok(eligible)
    }

    async fn remove_technician(&self, technician_id: Uuid) -> anyhow::Result<()> {
        self.store.area_capabilities.retain(|(technician, _)| *technician != technician_id);
        self.store
            .category_capabilities
            .retain(|(technician, _)| *technician != technician_id);
        Ok(())
    }
}
