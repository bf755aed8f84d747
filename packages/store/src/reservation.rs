//! Reservation arithmetic: stay length, subtotal, display dates and local removal.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::Booking;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parse an API date. Plain `YYYY-MM-DD` dates are midnight UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// `ceil(|check_out - check_in| / 1 day)`, or `None` if either date is unreadable.
pub fn reservation_days(check_in: &str, check_out: &str) -> Option<i64> {
    let start = parse_date(check_in)?;
    let end = parse_date(check_out)?;
    let millis = (end - start).num_milliseconds().abs();
    Some((millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY)
}

/// Days times the flat nightly rate.
pub fn subtotal(days: i64, nightly_rate: u32) -> i64 {
    days * i64::from(nightly_rate)
}

/// `M/D/YYYY`, falling back to the raw value when it does not parse.
pub fn display_date(value: &str) -> String {
    match parse_date(value) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => value.to_string(),
    }
}

/// Drop the booking with `id` from the in-memory list. Returns whether one was removed.
pub fn remove_booking(bookings: &mut Vec<Booking>, id: i64) -> bool {
    let before = bookings.len();
    bookings.retain(|b| b.id != id);
    bookings.len() != before
}

impl Booking {
    pub fn days(&self) -> Option<i64> {
        reservation_days(&self.check_in, &self.check_out)
    }

    pub fn subtotal(&self, nightly_rate: u32) -> Option<i64> {
        self.days().map(|days| subtotal(days, nightly_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_NIGHTLY_RATE;

    fn booking(id: i64, check_in: &str, check_out: &str) -> Booking {
        Booking {
            id,
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn two_night_stay() {
        assert_eq!(reservation_days("2024-01-01", "2024-01-03"), Some(2));
        let b = booking(1, "2024-01-01", "2024-01-03");
        assert_eq!(b.days(), Some(2));
        assert_eq!(b.subtotal(DEFAULT_NIGHTLY_RATE), Some(974));
    }

    #[test]
    fn days_are_absolute_and_rounded_up() {
        assert_eq!(reservation_days("2024-01-03", "2024-01-01"), Some(2));
        assert_eq!(
            reservation_days("2024-01-01T00:00:00Z", "2024-01-02T06:00:00Z"),
            Some(2)
        );
        assert_eq!(reservation_days("2024-02-10", "2024-02-10"), Some(0));
    }

    #[test]
    fn unreadable_dates_have_no_count() {
        assert_eq!(reservation_days("", "2024-01-03"), None);
        assert_eq!(booking(1, "soon", "later").subtotal(487), None);
    }

    #[test]
    fn display_date_formats_or_passes_through() {
        assert_eq!(display_date("2024-03-09"), "3/9/2024");
        assert_eq!(display_date("2024-12-31T10:00:00.000Z"), "12/31/2024");
        assert_eq!(display_date("tbd"), "tbd");
    }

    #[test]
    fn remove_booking_is_idempotent() {
        let mut list = vec![booking(1, "", ""), booking(2, "", ""), booking(3, "", "")];
        assert!(remove_booking(&mut list, 2));
        assert_eq!(list.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 3]);

        assert!(!remove_booking(&mut list, 2));
        assert!(!remove_booking(&mut list, 42));
        assert_eq!(list.len(), 2);
    }
}
