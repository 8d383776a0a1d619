// Each domain contains: mod.rs, service.rs, types.rs

pub mod availability;
pub mod bookings;
pub mod catalog;
pub mod pricing;
