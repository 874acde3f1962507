use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `/login` and `/signup`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Answer of `/login` and `/signup`. The API reports bad credentials with
/// a `msg` and no token, sometimes with a 200 status.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl TokenResponse {
    /// The token, if the server actually handed one out.
    pub fn usable_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .filter(|token| crate::state::store::is_usable_token(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_without_token() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"msg": "Invalid username or password"}"#).unwrap();
        assert_eq!(response.usable_token(), None);
        assert_eq!(response.msg.as_deref(), Some("Invalid username or password"));
    }

    #[test]
    fn token_with_user_info() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"token": "abc", "id": 7, "username": "neo"}"#).unwrap();
        assert_eq!(response.usable_token(), Some("abc"));
        assert_eq!(response.username.as_deref(), Some("neo"));
    }
}
