use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Satisfaction score recorded when the submitter closes a completed ticket.
/// One per ticket, created together with the close transition, immutable
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: Uuid,
    /// The closed ticket. Unique across all ratings.
    pub ticket_id: Uuid,
    /// Technician who handled the ticket, denormalized for reporting.
    pub technician_id: Uuid,
    /// Score in 1..=5.
    pub score: i32,
    /// Optional free-text comment, at most 500 characters.
    pub comment: Option<String>,
    pub created_time: DateTime<Utc>,
}
