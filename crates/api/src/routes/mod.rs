pub mod availability;
pub mod bookings;
pub mod catalog;
pub mod quotes;
pub mod system;
