//! Domain errors

use thiserror::Error;
use validator::ValidationErrors;

use groups_shared::GroupId;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Group not found with ID: {0}")]
    GroupNotFound(GroupId),
    
    #[error("Group with name '{0}' already exists")]
    GroupNameAlreadyExists(String),
    
    #[error("Group '{0}' is already inactive")]
    GroupAlreadyInactive(String),
    
    #[error("Validation error: {0}")]
    ValidationError(String),
    
    #[error("Database error: {0}")]
    DatabaseError(String),
    
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Outcome category of a failed operation, as seen by callers of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    AlreadyInactive,
    InvalidInput,
    Unexpected,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::GroupNotFound(_) => ErrorKind::NotFound,
            DomainError::GroupNameAlreadyExists(_) => ErrorKind::AlreadyExists,
            DomainError::GroupAlreadyInactive(_) => ErrorKind::AlreadyInactive,
            DomainError::ValidationError(_) => ErrorKind::InvalidInput,
            DomainError::DatabaseError(_) | DomainError::InternalError(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect::<Vec<_>>()
            .join(", ");
        DomainError::ValidationError(message)
    }
}
