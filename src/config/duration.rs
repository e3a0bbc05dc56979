//! RouterOS-style duration grammar.
//!
//! Timeouts are written in a compact day/hour/minute/second form such as
//! `2d`, `1d12h`, or `3h59m54s`. The grammar is `(\d+d)?(\d+h)?(\d+m)?(\d+s)?`
//! with the components in that strict order; the string must match in full
//! and the cumulative total must be non-zero.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use super::error::DurationError;

/// Compiled grammar, initialized once per process.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)d)?(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$")
        .expect("duration grammar regex is valid")
});

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Parses a duration string in the `NdNhNmNs` grammar.
///
/// Parsing is pure: the same input always yields the same duration, with
/// no locale or timezone dependency.
///
/// # Errors
///
/// Returns [`DurationError`] when the string is empty, does not match the
/// grammar, sums to zero, or overflows the representable range of seconds.
///
/// # Example
///
/// ```
/// use mt_addrlist::config::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1d12h").unwrap(), Duration::from_secs(36 * 3600));
/// assert!(parse_duration("0d0h0m0s").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    if input.is_empty() {
        return Err(DurationError::Empty);
    }

    let captures = DURATION_RE
        .captures(input)
        .ok_or_else(|| DurationError::Malformed {
            value: input.to_string(),
        })?;

    let component = |index: usize| -> Result<u64, DurationError> {
        captures.get(index).map_or(Ok(0), |m| {
            m.as_str()
                .parse::<u64>()
                .map_err(|_| DurationError::TooLarge {
                    value: input.to_string(),
                })
        })
    };

    let days = component(1)?;
    let hours = component(2)?;
    let minutes = component(3)?;
    let seconds = component(4)?;

    // Checked throughout: a grammar-valid string with an oversized
    // component must fail, not wrap or panic.
    let total_secs = days
        .checked_mul(SECS_PER_DAY)
        .and_then(|total| total.checked_add(hours.checked_mul(SECS_PER_HOUR)?))
        .and_then(|total| total.checked_add(minutes.checked_mul(SECS_PER_MINUTE)?))
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(|| DurationError::TooLarge {
            value: input.to_string(),
        })?;

    if total_secs == 0 {
        return Err(DurationError::Zero {
            value: input.to_string(),
        });
    }

    Ok(Duration::from_secs(total_secs))
}

/// Resolves the effective timeout string for a list.
///
/// Precedence: the list-level string if non-empty, else the defaults-level
/// string if non-empty. Both layers are validated at config load time, so
/// callers receive the configured string verbatim (the string form is not
/// canonical and is never re-rendered).
///
/// # Errors
///
/// Returns [`DurationError::NotConfigured`] when neither layer provides a
/// timeout. A silent built-in default is deliberately not part of the
/// contract.
pub fn resolve_timeout<'a>(
    list_timeout: Option<&'a str>,
    default_timeout: Option<&'a str>,
) -> Result<&'a str, DurationError> {
    list_timeout
        .filter(|s| !s.is_empty())
        .or_else(|| default_timeout.filter(|s| !s.is_empty()))
        .ok_or(DurationError::NotConfigured)
}
