//! # Groups Core - Domain Module
//! 
//! Domain entities for the group management service.

pub mod group;

pub use group::{normalize_name, validate_group_name, Group, NewGroup};
