use std::fmt;
use std::time::Duration;

/// Rate-limit state for one endpoint, as advertised by the service through
/// the `requests-limit` / `requests-remaining` / `requests-reset` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateQuota {
    pub limit: u32,
    pub remaining: u32,
    pub reset: Duration,
}

impl RateQuota {
    #[must_use]
    pub fn new(limit: u32, remaining: u32, reset: Duration) -> Self {
        Self {
            limit,
            remaining,
            reset,
        }
    }

    #[must_use]
    pub fn used(&self) -> u32 {
        self.limit.saturating_sub(self.remaining)
    }

    /// Whether one more request can be spent while still leaving `reserve`
    /// requests untouched in the current window.
    #[must_use]
    pub fn has_headroom(&self, reserve: u32) -> bool {
        self.remaining > reserve
    }
}

impl fmt::Display for RateQuota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} requests used, window resets in {}s",
            self.used(),
            self.limit,
            self.reset.as_secs()
        )
    }
}
