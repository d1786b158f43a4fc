use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One (technician, floor) eligibility pair of the capability registry.
/// Pairs are unique; deleting the technician removes its pairs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AreaCapability {
    pub technician_id: Uuid,
    pub floor_id: Uuid,
}

/// One (technician, category) eligibility pair of the capability registry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCapability {
    pub technician_id: Uuid,
    pub category_id: Uuid,
}
