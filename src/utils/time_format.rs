//! Elapsed time rendering (`HH:MM:SS.mmm`)

use std::fmt::Write;

/// One field of the rendered duration
struct TimeUnit {
    millis: u64,
    width: usize,
    separator: &'static str,
}

/// Units in descending magnitude; each consumes the remainder of the previous one
const UNITS: [TimeUnit; 4] = [
    TimeUnit { millis: 3_600_000, width: 2, separator: ":" }, // hours
    TimeUnit { millis: 60_000, width: 2, separator: ":" }, // minutes
    TimeUnit { millis: 1_000, width: 2, separator: "." }, // seconds
    TimeUnit { millis: 1, width: 3, separator: "" }, // milliseconds
];

/// Format a duration in milliseconds as `HH:MM:SS.mmm`.
///
/// Hours are cumulative and widen past two digits instead of wrapping.
pub fn format_elapsed(duration_ms: u64) -> String {
    let mut out = String::with_capacity(12);
    let mut remainder = duration_ms;
    for unit in &UNITS {
        let quotient = remainder / unit.millis;
        remainder -= quotient * unit.millis;
        let _ = write!(out, "{quotient:0width$}{}", unit.separator, width = unit.width);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fields(rendered: &str) -> (u64, u64, u64, u64) {
        let (hms, millis) = rendered.split_once('.').expect("missing millisecond separator");
        let mut parts = hms.split(':').map(|p| p.parse::<u64>().expect("numeric field"));
        let h = parts.next().expect("hours");
        let m = parts.next().expect("minutes");
        let s = parts.next().expect("seconds");
        assert!(parts.next().is_none());
        (h, m, s, millis.parse().expect("milliseconds"))
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_elapsed(0), "00:00:00.000");
    }

    #[test]
    fn formats_minute_second_millis() {
        assert_eq!(format_elapsed(61_234), "00:01:01.234");
    }

    #[test]
    fn formats_exact_hour() {
        assert_eq!(format_elapsed(3_600_000), "01:00:00.000");
    }

    #[test]
    fn formats_last_millisecond_of_hour() {
        assert_eq!(format_elapsed(3_599_999), "00:59:59.999");
    }

    #[test]
    fn hours_are_not_capped() {
        assert_eq!(format_elapsed(25 * 3_600_000), "25:00:00.000");
        assert_eq!(format_elapsed(100 * 3_600_000 + 7), "100:00:00.007");
    }

    proptest! {
        #[test]
        fn fields_reconstruct_duration(d in 0u64..10_000 * 3_600_000) {
            let rendered = format_elapsed(d);
            let (h, m, s, ms) = fields(&rendered);
            prop_assert!(m < 60 && s < 60 && ms < 1_000);
            prop_assert_eq!(h * 3_600_000 + m * 60_000 + s * 1_000 + ms, d);
        }
    }
}
