//! Scan time formatting.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a [`Timestamp`] in the system time zone as
/// `YYYY-MM-DD HH:MM TZ`, the resolution item listings need.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_time_shape() {
        let timestamp: Timestamp = "2024-11-17T15:30:00Z".parse().expect("valid timestamp");
        let output = LocalDateTime(&timestamp).to_string();

        // Date, time and zone, whatever the system zone is
        assert_eq!(output.split(' ').count(), 3);
        assert!(output.starts_with("2024-11-1"));
    }
}
