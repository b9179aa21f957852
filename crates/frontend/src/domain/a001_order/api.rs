use contracts::domain::a001_order::{
    ListOrdersResponse, Order, TokenQuery, UpdateStatusRequest, UpdateStatusResponse,
};
use contracts::shared::wire::decode;

use super::ui::list::gate::PendingUpdate;
use crate::shared::api_utils::{api_url, send_text, CancelToken, TransportError};
use crate::shared::config::AppConfig;
use crate::shared::errors::{FetchError, UpdateError};

fn token_url(config: &AppConfig, token: &str) -> Result<String, TransportError> {
    api_url(
        &config.api_base_url,
        &TokenQuery {
            token: token.to_string(),
        },
    )
}

/// Fetch the full order list. An unsuccessful response yields an empty list.
pub async fn fetch_orders(
    config: &AppConfig,
    token: &str,
    cancel: &CancelToken,
) -> Result<Vec<Order>, FetchError> {
    let url = token_url(config, token)?;
    let body = send_text::<()>(&url, None, config.request_timeout_ms, cancel).await?;
    let response: ListOrdersResponse =
        decode(&body, "order list").map_err(TransportError::decode)?;
    Ok(response.into_orders())
}

/// Write a new status for one sheet row
pub async fn update_status(
    config: &AppConfig,
    token: &str,
    update: &PendingUpdate,
    cancel: &CancelToken,
) -> Result<(), UpdateError> {
    let url = token_url(config, token)?;
    let request = UpdateStatusRequest {
        row_ref: update.row_ref,
        new_status: update.new_status,
    };

    let body = send_text(&url, Some(&request), config.request_timeout_ms, cancel).await?;
    let response: UpdateStatusResponse =
        decode(&body, "status update").map_err(TransportError::decode)?;

    if response.success {
        Ok(())
    } else {
        Err(UpdateError::Rejected)
    }
}
