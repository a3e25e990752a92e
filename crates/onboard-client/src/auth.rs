//! Credentials accepted by the Onboard API.
//!
//! A caller supplies one of: a ready bearer token, an API key, or a
//! username and password. Keys and passwords are exchanged for an access
//! token once, before the first API request (see `http::ReqwestBackend`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path for exchanging an API key for an access token.
pub(crate) const LOGIN_API_KEY_PATH: &str = "/login/api-key";

/// Path for exchanging a username and password for an access token.
pub(crate) const LOGIN_PASSWORD_PATH: &str = "/login";

/// A string that never shows up in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// How the client authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Credentials {
    /// Send requests unauthenticated.
    #[default]
    None,
    /// A bearer token obtained elsewhere.
    Token(Secret),
    /// An Onboard API key, exchanged at `/login/api-key`.
    ApiKey(Secret),
    /// Portal login, exchanged at `/login`.
    UserPassword {
        user: String,
        password: Secret,
    },
}

impl Credentials {
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(Secret::new(token))
    }

    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(Secret::new(key))
    }

    pub fn user_password(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self::UserPassword {
            user: user.into(),
            password: Secret::new(password),
        }
    }

    /// Pick credentials from optional sources.
    ///
    /// Precedence: token, then API key, then user and password. A user
    /// without a password (or the reverse) is ignored.
    pub fn from_parts(
        token: Option<String>,
        api_key: Option<String>,
        user: Option<String>,
        password: Option<String>,
    ) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            return Self::token(token);
        }
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            return Self::api_key(key);
        }
        match (user, password) {
            (Some(user), Some(password)) if !user.is_empty() => {
                Self::user_password(user, password)
            }
            _ => Self::None,
        }
    }

    /// Whether requests will carry an `Authorization` header.
    pub const fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// ============================================================================
// Wire types for the login endpoints
// ============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct ApiKeyLogin<'a> {
    pub key: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PasswordLogin<'a> {
    pub login: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_redacted() {
        let creds = Credentials::user_password("ops@example.com", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("ops@example.com"));
        assert!(!debug.contains("hunter2"));

        let debug = format!("{:?}", Credentials::api_key("ob-p-secret"));
        assert!(!debug.contains("ob-p-secret"));
    }

    #[test]
    fn test_from_parts_precedence() {
        let creds = Credentials::from_parts(
            Some("tok".to_string()),
            Some("key".to_string()),
            Some("u".to_string()),
            Some("p".to_string()),
        );
        assert_eq!(creds, Credentials::token("tok"));

        let creds = Credentials::from_parts(None, Some("key".to_string()), None, None);
        assert_eq!(creds, Credentials::api_key("key"));

        let creds =
            Credentials::from_parts(None, None, Some("u".to_string()), Some("p".to_string()));
        assert_eq!(creds, Credentials::user_password("u", "p"));
    }

    #[test]
    fn test_from_parts_ignores_incomplete_login() {
        let creds = Credentials::from_parts(None, None, Some("u".to_string()), None);
        assert_eq!(creds, Credentials::None);
        assert!(!creds.is_authenticated());

        let creds = Credentials::from_parts(Some(String::new()), None, None, None);
        assert_eq!(creds, Credentials::None);
    }

    #[test]
    fn test_login_bodies() {
        let body = serde_json::to_value(ApiKeyLogin { key: "k" }).unwrap();
        assert_eq!(body, serde_json::json!({"key": "k"}));

        let body = serde_json::to_value(PasswordLogin {
            login: "u",
            password: "p",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"login": "u", "password": "p"}));
    }
}
