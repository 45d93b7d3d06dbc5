//! Request and response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use groups_core::{validate_group_name, Group};
use groups_shared::GroupId;

/// Body of create and update requests
#[derive(Debug, Deserialize)]
pub struct GroupRequest {
    // Option so that a missing or null name is reported as a field error
    #[serde(default)]
    pub name: Option<String>,
}

impl GroupRequest {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl Validate for GroupRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_group_name(self.name()) {
            errors.add("name", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub id: GroupId,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            is_active: group.is_active,
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> GroupRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_and_null_name_are_required() {
        for body in [r#"{}"#, r#"{"name": null}"#, r#"{"name": "   "}"#] {
            let errors = request(body).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("name"), "body: {}", body);
        }
    }

    #[test]
    fn test_name_length_limit() {
        let ok = format!(r#"{{"name": "{}"}}"#, "x".repeat(255));
        assert!(request(&ok).validate().is_ok());

        let too_long = format!(r#"{{"name": "{}"}}"#, "x".repeat(256));
        assert!(request(&too_long).validate().is_err());
    }
}
