pub mod service;
pub mod types;
