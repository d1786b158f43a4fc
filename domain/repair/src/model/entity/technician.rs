use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A repair technician. Identity and credentials live with the external
/// identity provider; this record is the contact card the core needs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
}
