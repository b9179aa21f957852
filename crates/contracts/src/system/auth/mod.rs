use serde::{Deserialize, Serialize};

/// Marks the authentication call: `POST {base}?auth=1`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthQuery {
    pub auth: u8,
}

impl Default for AuthQuery {
    fn default() -> Self {
        Self { auth: 1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthResponse {
    /// Token of a successful login; a success without a token counts as failure
    pub fn into_token(self) -> Option<String> {
        if self.success {
            self.token.filter(|t| !t.is_empty())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_token() {
        let ok: AuthResponse = serde_json::from_str(r#"{"success":true,"token":"t-1"}"#).unwrap();
        assert_eq!(ok.into_token().as_deref(), Some("t-1"));

        let wrong: AuthResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(wrong.into_token(), None);

        let tokenless: AuthResponse = serde_json::from_str(r#"{"success":true,"token":""}"#).unwrap();
        assert_eq!(tokenless.into_token(), None);
    }
}
