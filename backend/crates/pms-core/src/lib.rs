pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::booking::Booking;
pub use models::booking_status::BookingStatus;
pub use models::property::Property;
pub use models::property_id::{AssignedPropertyIds, PropertyId, RawPropertyId};
pub use models::role::Role;
pub use models::user_record::UserRecord;
pub use models::verification_status::VerificationStatus;
