//! Authentication credentials for NiceHash.
//!
//! NiceHash authenticates private endpoints with an API id and an API key
//! sent as the `id` and `key` query parameters. Nothing is validated locally:
//! a wrong or missing credential shows up as an error payload from the
//! remote service.
//!
//! Use a key with trading permissions; read-only keys are rejected by the
//! order endpoints.

use std::fmt;

use serde::Serialize;

/// API id and key used by authenticated endpoints.
///
/// Both fields are optional. A client without credentials can still call
/// every public endpoint.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// NiceHash API id
    pub api_id: Option<String>,
    /// NiceHash API key. Never printed by `Debug`.
    pub api_key: Option<String>,
}

impl Credentials {
    /// Create credentials from an id and a key.
    ///
    /// Accepts strings or numbers, since NiceHash API ids are numeric.
    pub fn new(api_id: impl ToString, api_key: impl ToString) -> Self {
        Self {
            api_id: Some(api_id.to_string()),
            api_key: Some(api_key.to_string()),
        }
    }

    /// Whether both the id and the key are set and non-empty.
    pub fn is_complete(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.api_id) && present(&self.api_key)
    }

    /// Query parameters merged into authenticated requests.
    ///
    /// Returned even when credentials are missing; unset fields are left out
    /// of the query string.
    pub fn auth_params(&self) -> AuthParams {
        AuthParams {
            id: self.api_id.clone(),
            key: self.api_key.clone(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_id", &self.api_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// The `id`/`key` query parameter pair.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl fmt::Debug for AuthParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthParams")
            .field("id", &self.id)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credentials_are_incomplete() {
        assert!(!Credentials::default().is_complete());
    }

    #[test]
    fn test_numeric_credentials() {
        let creds = Credentials::new(12345, 12345);
        assert!(creds.is_complete());
        assert_eq!(creds.api_id.as_deref(), Some("12345"));
        assert_eq!(creds.api_key.as_deref(), Some("12345"));
    }

    #[test]
    fn test_partial_or_empty_credentials_are_incomplete() {
        let only_id = Credentials {
            api_id: Some("1".to_string()),
            api_key: None,
        };
        assert!(!only_id.is_complete());

        let empty_key = Credentials::new("1", "");
        assert!(!empty_key.is_complete());
    }

    #[test]
    fn test_auth_params_without_credentials() {
        let params = Credentials::default().auth_params();
        assert!(params.id.is_none());
        assert!(params.key.is_none());
        assert_eq!(serde_urlencoded::to_string(&params).unwrap(), "");
    }

    #[test]
    fn test_auth_params_serialize() {
        let params = Credentials::new("abc", "secret").auth_params();
        assert_eq!(serde_urlencoded::to_string(&params).unwrap(), "id=abc&key=secret");
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = Credentials::new("abc", "secret");
        let printed = format!("{:?} {:?}", creds, creds.auth_params());
        assert!(printed.contains("abc"));
        assert!(!printed.contains("secret"));
    }
}
