//! Web layer for the bike station finder.
//!
//! Exposes the assistant fulfillment webhook and a health check.

mod dto;
mod routes;
mod state;

pub use dto::ErrorResponse;
pub use routes::{AppError, create_router};
pub use state::AppState;
