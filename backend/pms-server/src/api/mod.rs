pub mod bookings;
pub mod error;
pub mod extractors;
pub mod properties;
pub mod resolve;
