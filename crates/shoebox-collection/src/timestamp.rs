use chrono::Local;

/// Display format for capture timestamps: `dd-MM-yyyy / HH:mm:ss`.
///
/// The collection sorts these values as plain strings. The format is
/// fixed-width and zero-padded, but day-first rendering means string
/// order only tracks chronology for timestamps sharing a month and year.
/// Callers must not feed the collection timestamps from any other source.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y / %H:%M:%S";

/// The current local wall-clock moment in the display format.
pub fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn fixed_width_and_padded() {
        let stamp = now();
        assert_eq!(stamp.len(), 21);

        let bytes = stamp.as_bytes();
        assert_eq!(bytes[2], b'-');
        assert_eq!(bytes[5], b'-');
        assert_eq!(&stamp[10..13], " / ");
        assert_eq!(bytes[15], b':');
        assert_eq!(bytes[18], b':');

        for index in [0, 1, 3, 4, 6, 7, 8, 9, 13, 14, 16, 17, 19, 20] {
            assert!(
                bytes[index].is_ascii_digit(),
                "non-digit at {index} in {stamp:?}"
            );
        }
    }

    #[test]
    fn round_trips_through_chrono() {
        let stamp = now();
        assert!(NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
