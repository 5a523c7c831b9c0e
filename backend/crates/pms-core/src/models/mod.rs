pub mod booking;
pub mod booking_status;
pub mod property;
pub mod property_id;
pub mod role;
pub mod user_record;
pub mod verification_status;
