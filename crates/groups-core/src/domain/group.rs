// ============================================================================
// Groups Core - Group Entity
// File: crates/groups-core/src/domain/group.rs
// Description: Group entity with active/inactive lifecycle
// ============================================================================

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use groups_shared::constants::MAX_GROUP_NAME_LENGTH;
use groups_shared::GroupId;

use crate::error::DomainError;

/// Strip surrounding whitespace; names are compared and stored in this form.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}

/// Name rule shared by the domain and the HTTP payloads: non-blank once
/// trimmed and at most 255 characters.
pub fn validate_group_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("Group name is required")));
    }
    if trimmed.chars().count() > MAX_GROUP_NAME_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("Group name must not exceed 255 characters")));
    }
    Ok(())
}

/// A group that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewGroup {
    #[validate(custom(function = "validate_group_name"))]
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewGroup {
    pub fn new(name: &str) -> Result<Self, validator::ValidationErrors> {
        let now = Utc::now();
        let group = Self {
            name: normalize_name(name),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        group.validate()?;
        Ok(group)
    }
}

/// Group entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Materialize a stored group from its insert form.
    pub fn from_new(id: GroupId, new_group: &NewGroup) -> Self {
        Self {
            id,
            name: new_group.name.clone(),
            is_active: new_group.is_active,
            created_at: new_group.created_at,
            updated_at: new_group.updated_at,
        }
    }

    /// `name` must already be normalized and validated.
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.touch();
    }

    /// Soft delete. Rejected when the group is already inactive.
    pub fn deactivate(&mut self) -> Result<(), DomainError> {
        if !self.is_active {
            return Err(DomainError::GroupAlreadyInactive(self.name.clone()));
        }
        self.is_active = false;
        self.touch();
        Ok(())
    }

    pub fn toggle_status(&mut self) {
        self.is_active = !self.is_active;
        self.touch();
    }

    // never moves backwards, so created_at <= updated_at holds even with clock skew
    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
