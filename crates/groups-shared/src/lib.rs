//! # Groups Shared
//! 
//! Shared configuration, types, constants, and telemetry for the group management service.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
