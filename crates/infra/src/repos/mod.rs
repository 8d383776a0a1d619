pub mod bookings;
pub mod clubs;
pub mod umbrellas;

pub use bookings::BookingStatus;
