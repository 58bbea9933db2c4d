use std::time::Duration;

use domain::quota::RateQuota;

#[test]
fn headroom_keeps_the_reserve_untouched() {
    let quota = RateQuota::new(10, 3, Duration::from_secs(60));
    assert!(quota.has_headroom(0));
    assert!(quota.has_headroom(2));
    assert!(!quota.has_headroom(3));
    assert!(!quota.has_headroom(10));
}

#[test]
fn used_saturates_when_remaining_exceeds_limit() {
    let quota = RateQuota::new(5, 9, Duration::ZERO);
    assert_eq!(quota.used(), 0);
}

#[test]
fn display_matches_the_service_log_line() {
    let quota = RateQuota::new(10, 4, Duration::from_secs(42));
    assert_eq!(
        quota.to_string(),
        "6/10 requests used, window resets in 42s"
    );
}
