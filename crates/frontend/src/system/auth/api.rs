use contracts::shared::wire::decode;
use contracts::system::auth::{AuthQuery, AuthRequest, AuthResponse};

use crate::shared::api_utils::{api_url, send_text, CancelToken, TransportError};
use crate::shared::config::AppConfig;
use crate::shared::errors::AuthError;

/// Exchange the shared password for a session token
pub async fn authenticate(
    config: &AppConfig,
    password: String,
    cancel: &CancelToken,
) -> Result<String, AuthError> {
    let url = api_url(&config.api_base_url, &AuthQuery::default())?;
    let request = AuthRequest { password };

    let body = send_text(&url, Some(&request), config.request_timeout_ms, cancel).await?;
    let response: AuthResponse = decode(&body, "auth").map_err(TransportError::decode)?;

    response.into_token().ok_or(AuthError::WrongPassword)
}
