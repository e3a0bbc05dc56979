//! Tests for the duration grammar and timeout resolution.

use std::time::Duration;

use super::duration::{parse_duration, resolve_timeout};
use super::error::DurationError;

mod grammar {
    use super::*;

    #[test]
    fn days_only() {
        assert_eq!(parse_duration("2d").unwrap(), Duration::from_secs(48 * 3600));
    }

    #[test]
    fn days_and_hours() {
        assert_eq!(
            parse_duration("1d12h").unwrap(),
            Duration::from_secs(36 * 3600)
        );
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(
            parse_duration("12h30m").unwrap(),
            Duration::from_secs(12 * 3600 + 30 * 60)
        );
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(
            parse_duration("45m30s").unwrap(),
            Duration::from_secs(45 * 60 + 30)
        );
    }

    #[test]
    fn all_components() {
        assert_eq!(
            parse_duration("2d3h45m30s").unwrap(),
            Duration::from_secs(51 * 3600 + 45 * 60 + 30)
        );
    }

    #[test]
    fn single_second() {
        assert_eq!(parse_duration("1s").unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn empty_string_fails() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
    }

    #[test]
    fn garbage_fails() {
        assert!(matches!(
            parse_duration("invalid"),
            Err(DurationError::Malformed { .. })
        ));
    }

    #[test]
    fn units_without_digits_fail() {
        assert!(matches!(
            parse_duration("dhs"),
            Err(DurationError::Malformed { .. })
        ));
    }

    #[test]
    fn zero_duration_fails() {
        assert!(matches!(
            parse_duration("0d0h0m0s"),
            Err(DurationError::Zero { .. })
        ));
        assert!(matches!(
            parse_duration("0s"),
            Err(DurationError::Zero { .. })
        ));
    }

    #[test]
    fn oversized_component_fails_without_overflow() {
        // 3e17 days does not fit u64 seconds; must error, never wrap
        // or panic.
        assert!(matches!(
            parse_duration("300000000000000000d"),
            Err(DurationError::TooLarge { .. })
        ));
        assert!(matches!(
            parse_duration("18446744073709551615d1h"),
            Err(DurationError::TooLarge { .. })
        ));
    }

    #[test]
    fn digits_beyond_u64_fail() {
        assert!(matches!(
            parse_duration("99999999999999999999s"),
            Err(DurationError::TooLarge { .. })
        ));
    }

    #[test]
    fn largest_representable_seconds_still_parse() {
        assert_eq!(
            parse_duration("18446744073709551615s").unwrap(),
            Duration::from_secs(u64::MAX)
        );
    }

    #[test]
    fn out_of_order_components_fail() {
        assert!(matches!(
            parse_duration("30m12h"),
            Err(DurationError::Malformed { .. })
        ));
    }

    #[test]
    fn trailing_garbage_fails() {
        assert!(matches!(
            parse_duration("2d extra"),
            Err(DurationError::Malformed { .. })
        ));
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(parse_duration("3h59m54s"), parse_duration("3h59m54s"));
    }
}

mod resolution {
    use super::*;

    #[test]
    fn list_timeout_wins() {
        assert_eq!(resolve_timeout(Some("2h"), Some("1h")).unwrap(), "2h");
    }

    #[test]
    fn falls_back_to_defaults() {
        assert_eq!(resolve_timeout(None, Some("1h")).unwrap(), "1h");
        assert_eq!(resolve_timeout(Some(""), Some("1h")).unwrap(), "1h");
    }

    #[test]
    fn no_timeout_is_an_error_not_a_silent_default() {
        assert_eq!(resolve_timeout(None, None), Err(DurationError::NotConfigured));
        assert_eq!(
            resolve_timeout(Some(""), Some("")),
            Err(DurationError::NotConfigured)
        );
    }
}
