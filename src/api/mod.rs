// API routes and handlers

pub mod error;
pub mod exercises;
pub mod health;
pub mod middleware;
pub mod routes;
pub mod workouts;

pub use error::ApiError;
pub use routes::{create_routes, AppState};
