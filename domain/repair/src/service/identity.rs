use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::vo::Role;

/// External identity/role provider. The core trusts its resolution and layers
/// only the ownership and role checks of the lifecycle rules on top.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Roles held by a user; empty for an unknown user.
    async fn roles_of(&self, user_id: Uuid) -> anyhow::Result<HashSet<Role>>;
}
