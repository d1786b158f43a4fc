use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A problem classification, e.g. "HVAC" or "Electrical". Reference data.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}
