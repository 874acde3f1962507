// ============================================================================
// ERRORS - Typed failures for the HTTP, storage and action layers
// ============================================================================

use thiserror::Error;

/// Failure talking to the RecomMedia API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode request: {0}")]
    Serialization(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 422))
    }
}

/// Failure reading or writing browser storage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("could not write `{key}`")]
    Write { key: String },
    #[error("could not encode `{key}`: {message}")]
    Serialization { key: String, message: String },
}

/// What an action hands back to the view that triggered it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("you need to log in first")]
    NotAuthenticated,
    /// Auth endpoint answered without a token, usually with a reason.
    #[error("{0}")]
    Rejected(String),
}

impl ActionError {
    /// Message shown next to the form or button that failed. A 401/422 on a
    /// token-carrying request means the session token was refused.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Api(ApiError::Network(_)) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ActionError::Api(err) if err.is_unauthorized() => {
                "Your session expired, please log in again".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Same as `user_message`, but for the login and signup forms where a
    /// 401/422 is about the submitted credentials.
    pub fn credentials_message(&self) -> String {
        match self {
            ActionError::Api(err) if err.is_unauthorized() => {
                "Invalid username or password".to_string()
            }
            other => other.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_expose_code() {
        let err = ApiError::Status {
            status: 401,
            message: "UNAUTHORIZED".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "HTTP 401: UNAUTHORIZED");
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn user_messages() {
        let unauthorized = ActionError::from(ApiError::Status {
            status: 401,
            message: String::new(),
        });
        assert_eq!(unauthorized.credentials_message(), "Invalid username or password");

        let rejected = ActionError::Rejected("Invalid username or password".into());
        assert_eq!(rejected.user_message(), "Invalid username or password");

        let server = ActionError::from(ApiError::Status {
            status: 500,
            message: "INTERNAL SERVER ERROR".into(),
        });
        assert_eq!(server.user_message(), "HTTP 500: INTERNAL SERVER ERROR");
        assert_eq!(
            ActionError::NotAuthenticated.user_message(),
            "you need to log in first"
        );
    }

    #[test]
    fn refused_token_is_not_blamed_on_credentials() {
        let expired = ActionError::from(ApiError::Status {
            status: 401,
            message: r#"{"msg":"Token has expired"}"#.into(),
        });
        assert_eq!(expired.user_message(), "Your session expired, please log in again");

        let malformed = ActionError::from(ApiError::Status {
            status: 422,
            message: r#"{"msg":"Not enough segments"}"#.into(),
        });
        assert_eq!(malformed.user_message(), "Your session expired, please log in again");

        let offline = ActionError::from(ApiError::Network("offline".into()));
        assert_eq!(offline.credentials_message(), offline.user_message());
    }
}
