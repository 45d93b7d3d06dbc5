//! Group repository trait (port)

use async_trait::async_trait;

use groups_shared::GroupId;

use crate::domain::{Group, NewGroup};
use crate::error::DomainError;

/// Persistence contract for groups.
///
/// Implementations must enforce name uniqueness themselves and report a
/// violation from `create`/`update` as [`DomainError::GroupNameAlreadyExists`];
/// the existence checks done by the service are only a pre-check.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn find_by_id(&self, id: GroupId) -> Result<Option<Group>, DomainError>;
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;
    async fn exists_by_name_excluding_id(&self, name: &str, id: GroupId) -> Result<bool, DomainError>;
    /// All groups in insertion order.
    async fn find_all(&self) -> Result<Vec<Group>, DomainError>;
    async fn create(&self, group: &NewGroup) -> Result<Group, DomainError>;
    async fn update(&self, group: &Group) -> Result<Group, DomainError>;
    /// Round-trip to the backing store, used by readiness probes.
    async fn ping(&self) -> Result<(), DomainError>;
}
