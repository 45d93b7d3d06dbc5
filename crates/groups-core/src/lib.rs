//! # Groups Core
//! 
//! Group entity, domain service, and the repository trait it persists through.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{DomainError, ErrorKind};
pub use repositories::GroupRepository;
pub use services::GroupService;
