pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
pub mod validation;

pub use routes::app;
pub use state::AppState;
