//! # Groups API
//! 
//! HTTP handlers, DTOs, extractors, and the response envelope.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
