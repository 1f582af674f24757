//! API Error Taxonomy
//!
//! Failure kinds surfaced by the API client. Screens map them to
//! user-facing messages; the console log keeps the technical detail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No bearer token in session storage; the request was never issued
    #[error("no session token")]
    AuthMissing,
    /// The backend rejected the token (401/403)
    #[error("session rejected")]
    AuthRejected,
    /// 4xx with the backend's own message where it sent one
    #[error("request rejected: {0}")]
    Validation(String),
    /// 5xx
    #[error("server error (status {0})")]
    Server(u16),
    /// The request never completed
    #[error("network error: {0}")]
    Network(String),
    /// Success status but the body did not match the expected shape
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message shown to the user. Auth errors and backend validation
    /// messages speak for themselves; anything else falls back to the
    /// caller's context message.
    pub fn user_message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::AuthMissing => "Unauthorized!".to_string(),
            ApiError::AuthRejected => "Sesi berakhir. Silakan login ulang.".to_string(),
            ApiError::Validation(message) => message.clone(),
            ApiError::Server(_) | ApiError::Network(_) | ApiError::Decode(_) => {
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_passes_through_verbatim() {
        let err = ApiError::Validation("Nama kamar sudah digunakan".to_string());
        assert_eq!(
            err.user_message_or("Terjadi kesalahan."),
            "Nama kamar sudah digunakan"
        );
    }

    #[test]
    fn technical_failures_use_the_caller_fallback() {
        assert_eq!(
            ApiError::Server(500).user_message_or("Gagal memuat data."),
            "Gagal memuat data."
        );
        assert_eq!(
            ApiError::Network("timeout".to_string()).user_message_or("Gagal memuat data."),
            "Gagal memuat data."
        );
        assert_eq!(
            ApiError::Decode("missing field".to_string()).user_message_or("Gagal memuat data."),
            "Gagal memuat data."
        );
    }

    #[test]
    fn auth_failures_ignore_the_fallback() {
        assert_eq!(ApiError::AuthMissing.user_message_or("x"), "Unauthorized!");
        assert_eq!(
            ApiError::AuthRejected.user_message_or("x"),
            "Sesi berakhir. Silakan login ulang."
        );
    }
}
