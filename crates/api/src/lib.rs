pub mod app;
pub mod config;
pub mod domains;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use state::AppState;
