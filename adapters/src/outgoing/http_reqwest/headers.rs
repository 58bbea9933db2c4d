use std::time::Duration;

use reqwest::header::HeaderMap;

use domain::quota::RateQuota;

/// Rate-limit header names used by the Pixels service. Matching is
/// case-insensitive on the wire; `HeaderMap` lookups already are.
pub const REQUESTS_LIMIT: &str = "requests-limit";
pub const REQUESTS_REMAINING: &str = "requests-remaining";
pub const REQUESTS_RESET: &str = "requests-reset";
pub const COOLDOWN_RESET: &str = "cooldown-reset";

fn header_f64(headers: &HeaderMap, name: &str) -> Option<f64> {
    let value = headers.get(name)?.to_str().ok()?.trim().parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

fn header_u32(headers: &HeaderMap, name: &str) -> Option<u32> {
    headers.get(name)?.to_str().ok()?.trim().parse::<u32>().ok()
}

/// Extracts the per-endpoint quota. `requests-reset` may carry fractional
/// seconds, so it is parsed as a float.
#[must_use]
pub fn parse_quota(headers: &HeaderMap) -> Option<RateQuota> {
    let limit = header_u32(headers, REQUESTS_LIMIT)?;
    let remaining = header_u32(headers, REQUESTS_REMAINING)?;
    let reset = Duration::from_secs_f64(header_f64(headers, REQUESTS_RESET)?);
    Some(RateQuota::new(limit, remaining, reset))
}

/// Extracts the throttle wait the service attaches to 429 responses.
#[must_use]
pub fn parse_cooldown(headers: &HeaderMap) -> Option<Duration> {
    header_f64(headers, COOLDOWN_RESET).map(Duration::from_secs_f64)
}
