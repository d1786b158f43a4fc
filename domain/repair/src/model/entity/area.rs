use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A building on the site. Reference data, managed outside the core.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: Uuid,
    pub name: String,
}

/// A floor inside a building. Tickets locate a problem by (building, floor)
/// and technician area capabilities are granted per floor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: Uuid,
    /// Building this floor belongs to.
    pub building_id: Uuid,
    pub name: String,
}
