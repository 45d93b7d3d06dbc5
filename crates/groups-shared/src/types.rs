//! Common types

/// Identifier assigned by the persistence layer when a group is first stored.
pub type GroupId = i64;
