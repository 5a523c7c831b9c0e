use crate::BookingStatus;

use std::str::FromStr;

#[test]
fn test_booking_status_as_str() {
    assert_eq!(BookingStatus::Confirmed.as_str(), "confirmed");
    assert_eq!(BookingStatus::CheckedIn.as_str(), "checked_in");
    assert_eq!(BookingStatus::CheckedOut.as_str(), "checked_out");
    assert_eq!(BookingStatus::Cancelled.as_str(), "cancelled");
}

#[test]
fn test_booking_status_from_str() {
    assert_eq!(
        BookingStatus::from_str("checked_in").unwrap(),
        BookingStatus::CheckedIn
    );
    assert!(BookingStatus::from_str("checked-in").is_err());
    assert!(BookingStatus::from_str("invalid").is_err());
}

#[test]
fn test_booking_status_default() {
    assert_eq!(BookingStatus::default(), BookingStatus::Confirmed);
}
