//! Errors of the API layer.
//!
//! Stores never hand these to views directly: they turn them into a plain
//! localized message with [`ApiError::user_message`].

use thiserror::Error;

use crate::utils::i18n::t;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never got a response (connection refused, DNS, CORS...)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response; `detail` is the server's `{"detail": ...}` field when present
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// 2xx response whose body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),

    /// 401 on a bearer request; the session has already been logged out
    #[error("bearer token rejected")]
    Unauthorized,

    /// No token, the request was not sent
    #[error("not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    /// Message for direct display.
    ///
    /// `fallback_key` names the generic i18n message used for HTTP failures
    /// without a server `detail`. When `use_detail` is false the detail is
    /// ignored even if the server sent one.
    pub fn user_message(&self, fallback_key: &str, use_detail: bool, lang: &str) -> String {
        match self {
            ApiError::Network(_) => t("network_error", lang),
            ApiError::Status {
                detail: Some(detail),
                ..
            } if use_detail => detail.clone(),
            ApiError::Status { .. } => t(fallback_key, lang),
            ApiError::Decode(_) => t("invalid_response", lang),
            ApiError::Unauthorized => t("session_expired", lang),
            ApiError::NotAuthenticated => t("not_authenticated", lang),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized | ApiError::Status { status: 401, .. }
        )
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_shown_verbatim_when_allowed() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Email already registered".into()),
        };
        assert_eq!(
            err.user_message("register_failed", true, "EN"),
            "Email already registered"
        );
        assert_eq!(
            err.user_message("login_failed", false, "EN"),
            "Authorization failed"
        );
    }

    #[test]
    fn status_without_detail_uses_fallback() {
        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(
            err.user_message("device_create_failed", true, "RU"),
            "Ошибка создания устройства"
        );
    }

    #[test]
    fn transport_failure_is_generic() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(
            err.user_message("trips_fetch_failed", true, "EN"),
            "Could not reach the server"
        );
    }
}
