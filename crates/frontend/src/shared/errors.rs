//! Action-level error families and their operator-facing texts.

use crate::shared::api_utils::TransportError;
use thiserror::Error;

const TIMEOUT_TEXT: &str = "সার্ভার সাড়া দিচ্ছে না। আবার চেষ্টা করুন।";

/// Login failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("wrong password")]
    WrongPassword,
    #[error("a login request is already in progress")]
    InProgress,
    #[error("login request failed: {0}")]
    Transport(#[from] TransportError),
}

impl AuthError {
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::WrongPassword => "পাসওয়ার্ড ভুল!",
            AuthError::Transport(TransportError::Timeout(_)) => TIMEOUT_TEXT,
            AuthError::InProgress | AuthError::Transport(_) => "লগইন করতে সমস্যা হয়েছে!",
        }
    }
}

/// Order list could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("order list request failed: {0}")]
    Transport(#[from] TransportError),
}

impl FetchError {
    pub fn message(&self) -> &'static str {
        match self {
            FetchError::Transport(TransportError::Timeout(_)) => TIMEOUT_TEXT,
            _ => "অর্ডার লোড করতে সমস্যা হয়েছে।",
        }
    }
}

/// Status change was not applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("the service rejected the status change")]
    Rejected,
    #[error("status update request failed: {0}")]
    Transport(#[from] TransportError),
}

impl UpdateError {
    pub fn message(&self) -> &'static str {
        match self {
            UpdateError::Rejected => "স্ট্যাটাস পরিবর্তন হয়নি!",
            UpdateError::Transport(TransportError::Timeout(_)) => TIMEOUT_TEXT,
            UpdateError::NotAuthenticated | UpdateError::Transport(_) => {
                "স্ট্যাটাস পরিবর্তন করতে সমস্যা হয়েছে!"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_password_and_transport_differ() {
        let wrong = AuthError::WrongPassword;
        let network = AuthError::from(TransportError::Network("offline".into()));
        assert_ne!(wrong.message(), network.message());
        assert_eq!(network.to_string(), "login request failed: network error: offline");
    }

    #[test]
    fn test_timeouts_share_text() {
        let timeout = TransportError::Timeout(100);
        assert_eq!(
            AuthError::from(timeout.clone()).message(),
            FetchError::from(timeout.clone()).message()
        );
        assert_eq!(
            FetchError::from(timeout.clone()).message(),
            UpdateError::from(timeout).message()
        );
    }

    #[test]
    fn test_update_rejected_text() {
        assert_eq!(UpdateError::Rejected.message(), "স্ট্যাটাস পরিবর্তন হয়নি!");
        assert_ne!(
            UpdateError::Rejected.message(),
            UpdateError::from(TransportError::Status(500)).message()
        );
    }
}
