//! Rate limit detection for GitHub responses
//!
//! GitHub signals two kinds of throttling with 403 or 429 responses:
//!
//! - **Primary**: the hourly quota is spent. `x-ratelimit-remaining` is `0` and
//!   `x-ratelimit-reset` (or `retry-after`) says when it refills.
//! - **Secondary**: abuse protection for bursts of requests. The quota is not
//!   exhausted, but the response carries `retry-after` or a message mentioning
//!   the secondary rate limit.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::api;

const REMAINING: &str = "x-ratelimit-remaining";
const RESET: &str = "x-ratelimit-reset";

fn is_throttle_status(status: StatusCode) -> bool {
    status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS
}

fn header_u64(headers: &HeaderMap, name: impl reqwest::header::AsHeaderName) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

/// Delay to wait before retrying a request rejected by the primary rate limit
///
/// Returns `None` when the response is not a primary rate limit rejection.
/// `retry-after` wins over `x-ratelimit-reset`; the wait is capped at
/// [`api::MAX_RATE_LIMIT_WAIT_SECS`].
pub fn primary_wait(status: StatusCode, headers: &HeaderMap, now: SystemTime) -> Option<Duration> {
    if !is_throttle_status(status) || header_u64(headers, REMAINING) != Some(0) {
        return None;
    }

    let secs = match header_u64(headers, RETRY_AFTER) {
        Some(secs) => secs,
        None => {
            let now = now
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            header_u64(headers, RESET)
                .map(|reset| reset.saturating_sub(now))
                .unwrap_or(0)
        }
    };

    Some(Duration::from_secs(secs.min(api::MAX_RATE_LIMIT_WAIT_SECS)))
}

/// Whether a throttle response is a secondary rate limit
///
/// Only meaningful once [`primary_wait`] returned `None`.
pub fn is_secondary(status: StatusCode, headers: &HeaderMap, body: &str) -> bool {
    if !is_throttle_status(status) {
        return false;
    }
    headers.contains_key(RETRY_AFTER) || body.to_lowercase().contains("secondary rate limit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_primary_wait_uses_reset_header() {
        let h = headers(&[(REMAINING, "0"), (RESET, "1700000060")]);
        let wait = primary_wait(StatusCode::FORBIDDEN, &h, at(1_700_000_000));
        assert_eq!(wait, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_primary_wait_prefers_retry_after() {
        let h = headers(&[(REMAINING, "0"), (RESET, "1700000060"), ("retry-after", "5")]);
        let wait = primary_wait(StatusCode::TOO_MANY_REQUESTS, &h, at(1_700_000_000));
        assert_eq!(wait, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_primary_wait_reset_in_past_is_zero() {
        let h = headers(&[(REMAINING, "0"), (RESET, "100")]);
        let wait = primary_wait(StatusCode::FORBIDDEN, &h, at(200));
        assert_eq!(wait, Some(Duration::ZERO));
    }

    #[test]
    fn test_primary_wait_is_capped() {
        let h = headers(&[(REMAINING, "0"), ("retry-after", "999999")]);
        let wait = primary_wait(StatusCode::FORBIDDEN, &h, at(0));
        assert_eq!(wait, Some(Duration::from_secs(api::MAX_RATE_LIMIT_WAIT_SECS)));
    }

    #[test]
    fn test_primary_wait_requires_exhausted_quota() {
        let h = headers(&[(REMAINING, "12"), ("retry-after", "5")]);
        assert_eq!(primary_wait(StatusCode::FORBIDDEN, &h, at(0)), None);
        assert_eq!(primary_wait(StatusCode::FORBIDDEN, &HeaderMap::new(), at(0)), None);
    }

    #[test]
    fn test_primary_wait_ignores_other_statuses() {
        let h = headers(&[(REMAINING, "0")]);
        assert_eq!(primary_wait(StatusCode::NOT_FOUND, &h, at(0)), None);
    }

    #[test]
    fn test_is_secondary_by_header() {
        let h = headers(&[(REMAINING, "4000"), ("retry-after", "60")]);
        assert!(is_secondary(StatusCode::FORBIDDEN, &h, ""));
    }

    #[test]
    fn test_is_secondary_by_message() {
        let body = r#"{"message":"You have exceeded a secondary rate limit. Please wait a few minutes."}"#;
        assert!(is_secondary(StatusCode::FORBIDDEN, &HeaderMap::new(), body));
    }

    #[test]
    fn test_plain_forbidden_is_not_secondary() {
        let body = r#"{"message":"Resource not accessible by integration"}"#;
        assert!(!is_secondary(StatusCode::FORBIDDEN, &HeaderMap::new(), body));
        assert!(!is_secondary(
            StatusCode::INTERNAL_SERVER_ERROR,
            &headers(&[("retry-after", "5")]),
            ""
        ));
    }
}
