mod capability;
mod rating;
mod ticket;

#[rustfmt::skip]
pub use {
    capability::CapabilityRepo,
    rating::RatingRepo,
    ticket::TicketRepo,
};

use async_trait::async_trait;
use uuid::Uuid;

/// A column in a partial-update record: a new value, or left untouched.
#[derive(Debug, Clone, Default)]
pub enum DbField<T> {
    Set(T),
    #[default]
    NotSet,
}

impl<T> DbField<T> {
    /// Write the value into `slot` when set.
    pub fn apply(self, slot: &mut T) {
        if let Self::Set(value) = self {
            *slot = value;
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

/// Read access to an entity table. A missing id is `Ok(None)`, never an
/// error; errors are store failures only.
#[async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<T>>;

    async fn get_all(&self) -> anyhow::Result<Vec<T>>;
}

/// Write access to an entity table.
#[async_trait]
pub trait MutableRepository<T>: Send + Sync {
    async fn insert(&self, entity: &T) -> anyhow::Result<Uuid>;

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()>;
}

/// Full access to an entity table.
pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T> {}

impl<T, R> DBRepository<T> for R where R: ReadOnlyRepository<T> + MutableRepository<T> {}
