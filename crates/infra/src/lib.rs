pub mod models;
pub mod repos;
pub mod seed;
pub mod store;

pub use store::{MemoryStore, PgStore, SeedOutcome, Store, StoreError};
