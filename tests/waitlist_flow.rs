// Flow-level checks for the waitlist signup and launch countdown, driven
// through the crate's public API. The pure core has no browser dependency,
// so these run natively.

use canvashaus_frontend::components::countdown::TimeLeft;
use canvashaus_frontend::components::notification::NoticeKind;
use canvashaus_frontend::waitlist::{is_valid_email, outcome_for_status, WaitlistOutcome};

#[test]
fn blank_and_malformed_addresses_never_reach_the_network() {
    // Validation short-circuits before any request is issued.
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("not-an-email"));
    assert!(is_valid_email("user@example.com"));
}

#[test]
fn accepted_signup_clears_the_field_and_shows_success() {
    let outcome = outcome_for_status(200);
    assert_eq!(outcome, WaitlistOutcome::Accepted);
    assert!(outcome.clears_input());
    assert_eq!(outcome.notice().kind, NoticeKind::Success);
}

#[test]
fn duplicate_signup_keeps_the_field_and_is_informational() {
    let outcome = outcome_for_status(409);
    assert_eq!(outcome, WaitlistOutcome::AlreadyRegistered);
    assert!(!outcome.clears_input());
    assert_eq!(outcome.notice().kind, NoticeKind::Info);
}

#[test]
fn other_failures_keep_the_field_for_retry() {
    for status in [400, 429, 500, 503] {
        let outcome = outcome_for_status(status);
        assert_eq!(outcome, WaitlistOutcome::Failed);
        assert!(!outcome.clears_input());
    }
    assert_eq!(outcome_for_status(500).notice().kind, NoticeKind::Error);
}

#[test]
fn countdown_one_hour_before_launch() {
    // target 2026-04-05T00:00:00, now 2026-04-04T23:00:00
    let one_hour = TimeLeft::from_millis(3_600_000.0);
    assert_eq!(
        one_hour,
        TimeLeft {
            hours: 1,
            minutes: 0,
            seconds: 0
        }
    );
}

#[test]
fn countdown_folds_days_into_hours() {
    let diff = ((3 * 24 * 3600 + 4 * 3600 + 59 * 60 + 59) * 1000) as f64;
    assert_eq!(
        TimeLeft::from_millis(diff),
        TimeLeft {
            hours: 76,
            minutes: 59,
            seconds: 59
        }
    );
}

#[test]
fn countdown_holds_zero_once_the_target_passes() {
    // Recomputing after the target keeps every field at zero.
    for diff in [0.0, -1.0, -86_400_000.0] {
        let state = TimeLeft::from_millis(diff);
        assert_eq!(state, TimeLeft::default());
        assert!(state.is_over());
    }
}
