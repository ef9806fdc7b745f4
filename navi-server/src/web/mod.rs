//! Web layer for the route planner.
//!
//! Serves the planner page, a JSON API and GraphViz exports.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
