use gloo_net::http::Request;
use serde::Serialize;

use crate::components::notification::{Notice, NoticeKind};
use crate::config;

#[derive(Serialize)]
struct JoinWaitlistRequest<'a> {
    email: &'a str,
}

/// Result of one waitlist signup attempt. The backend deduplicates by email
/// and answers 409 when the address is already registered.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WaitlistOutcome {
    Accepted,
    AlreadyRegistered,
    Failed,
}

impl WaitlistOutcome {
    /// Only an accepted signup resets the address field; on conflict or
    /// failure the user keeps their text to correct or retry.
    pub fn clears_input(self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn notice(self) -> Notice {
        match self {
            Self::Accepted => Notice::new(
                NoticeKind::Success,
                "You're on the list! We'll notify you when we launch.",
            ),
            Self::AlreadyRegistered => {
                Notice::new(NoticeKind::Info, "You're already on the waitlist!")
            }
            Self::Failed => Notice::new(
                NoticeKind::Error,
                "Something went wrong. Please try again.",
            ),
        }
    }
}

// Basic email validation; the waitlist store does the real vetting.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@')
}

/// Maps the response status. Everything outside 2xx/409 is one generic
/// failure, including server-side validation and rate limiting.
pub fn outcome_for_status(status: u16) -> WaitlistOutcome {
    match status {
        200..=299 => WaitlistOutcome::Accepted,
        409 => WaitlistOutcome::AlreadyRegistered,
        _ => WaitlistOutcome::Failed,
    }
}

/// Registers `email` on the waitlist. One attempt, no retries.
pub async fn join_waitlist(email: &str) -> WaitlistOutcome {
    let request = match Request::post(&format!("{}/api/waitlist", config::get_backend_url()))
        .json(&JoinWaitlistRequest { email })
    {
        Ok(request) => request,
        Err(error) => {
            gloo_console::error!(format!("Failed to build waitlist request: {}", error));
            return WaitlistOutcome::Failed;
        }
    };

    match request.send().await {
        Ok(response) => outcome_for_status(response.status()),
        Err(error) => {
            gloo_console::error!(format!("Waitlist request failed: {}", error));
            WaitlistOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_and_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("dup@example.com"));
    }

    #[test]
    fn maps_success_statuses_to_accepted() {
        assert_eq!(outcome_for_status(200), WaitlistOutcome::Accepted);
        assert_eq!(outcome_for_status(201), WaitlistOutcome::Accepted);
        assert_eq!(outcome_for_status(204), WaitlistOutcome::Accepted);
    }

    #[test]
    fn maps_conflict_to_already_registered() {
        assert_eq!(outcome_for_status(409), WaitlistOutcome::AlreadyRegistered);
    }

    #[test]
    fn maps_everything_else_to_failed() {
        for status in [400, 403, 422, 429, 500, 502, 503] {
            assert_eq!(outcome_for_status(status), WaitlistOutcome::Failed);
        }
    }

    #[test]
    fn only_accepted_clears_the_input() {
        assert!(WaitlistOutcome::Accepted.clears_input());
        assert!(!WaitlistOutcome::AlreadyRegistered.clears_input());
        assert!(!WaitlistOutcome::Failed.clears_input());
    }

    #[test]
    fn conflict_is_informational_not_an_error() {
        assert_eq!(
            WaitlistOutcome::AlreadyRegistered.notice().kind,
            NoticeKind::Info
        );
        assert_eq!(WaitlistOutcome::Accepted.notice().kind, NoticeKind::Success);
        assert_eq!(WaitlistOutcome::Failed.notice().kind, NoticeKind::Error);
    }

    #[test]
    fn request_body_is_a_single_email_field() {
        let body = serde_json::to_string(&JoinWaitlistRequest {
            email: "user@example.com",
        })
        .unwrap();
        assert_eq!(body, r#"{"email":"user@example.com"}"#);
    }
}
