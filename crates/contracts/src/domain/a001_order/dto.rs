use super::aggregate::{Order, OrderStatus, RowRef};
use serde::{Deserialize, Serialize};

/// Query string carrying the auth token.
///
/// The token travels as `?token=` because the spreadsheet backend cannot read
/// custom headers on cross-origin requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenQuery {
    pub token: String,
}

/// Response of `GET {base}?token=...`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOrdersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<Order>>,
}

impl ListOrdersResponse {
    /// Orders carried by a successful response; empty otherwise
    pub fn into_orders(self) -> Vec<Order> {
        if self.success {
            self.data.unwrap_or_default()
        } else {
            Vec::new()
        }
    }
}

/// Body of `POST {base}?token=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(rename = "rowNum")]
    pub row_ref: RowRef,
    #[serde(rename = "newStatus")]
    pub new_status: OrderStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStatusResponse {
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wire::decode;

    #[test]
    fn test_update_request_wire_shape() {
        let body = UpdateStatusRequest {
            row_ref: RowRef(14),
            new_status: OrderStatus::Delivered,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"rowNum": 14, "newStatus": "Delivered"})
        );
    }

    #[test]
    fn test_list_response_variants() {
        let ok: ListOrdersResponse =
            decode(r#"{"success":true,"data":[{"OrderID":"A1","rowNum":2}]}"#, "orders").unwrap();
        assert_eq!(ok.into_orders().len(), 1);

        let no_data: ListOrdersResponse = decode(r#"{"success":true}"#, "orders").unwrap();
        assert!(no_data.into_orders().is_empty());

        let rejected: ListOrdersResponse =
            decode(r#"{"success":false,"data":[{"rowNum":2}]}"#, "orders").unwrap();
        assert!(rejected.into_orders().is_empty());
    }

    #[test]
    fn test_update_response_defaults_to_failure() {
        let response: UpdateStatusResponse = decode("{}", "update").unwrap();
        assert!(!response.success);
    }
}
