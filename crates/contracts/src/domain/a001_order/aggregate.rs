use crate::domain::common::AggregateId;
use crate::shared::lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Row number of the order in the backing spreadsheet.
///
/// The only key the backend accepts for a status update. `OrderID` is shown
/// and searched but never used to address a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowRef(pub u64);

impl AggregateId for RowRef {
    fn as_string(&self) -> String {
        self.0.as_string()
    }
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RowRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for RowRef {
    /// Sheets hand row numbers back either as numbers or as numeric strings.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        lenient::row_number(&value)
            .map(RowRef)
            .map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Order lifecycle status as stored in the `Status` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Value written to and read from the sheet
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// CSS class used to color the status selector
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-pending",
            OrderStatus::Shipped => "status-shipped",
            OrderStatus::Delivered => "status-delivered",
            OrderStatus::Cancelled => "status-cancelled",
        }
    }

    /// All statuses in selector order
    pub fn all() -> [OrderStatus; 4] {
        [
            OrderStatus::Pending,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Pending" => Some(OrderStatus::Pending),
            "Shipped" => Some(OrderStatus::Shipped),
            "Delivered" => Some(OrderStatus::Delivered),
            "Cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Order
// ============================================================================

/// One row of the orders sheet as served by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderID", default, deserialize_with = "lenient::text")]
    pub order_id: String,

    #[serde(rename = "CustomerName", default, deserialize_with = "lenient::text")]
    pub customer_name: String,

    #[serde(rename = "Address", default, deserialize_with = "lenient::text")]
    pub address: String,

    #[serde(rename = "PhoneNumber", default, deserialize_with = "lenient::text")]
    pub phone_number: String,

    #[serde(rename = "OrderDetails", default, deserialize_with = "lenient::text")]
    pub details: String,

    /// Raw timestamp text; see [`Order::timestamp_utc`]
    #[serde(rename = "Timestamp", default, deserialize_with = "lenient::text")]
    pub timestamp: String,

    /// `None` when the sheet holds something other than the four known values
    #[serde(rename = "Status", default, deserialize_with = "lenient::status")]
    pub status: Option<OrderStatus>,

    #[serde(rename = "rowNum")]
    pub row_ref: RowRef,
}

impl Order {
    /// Parsed timestamp, `None` when the cell is not RFC 3339
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.timestamp.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Case-insensitive substring match on name, phone or order id.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches_query(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        [&self.customer_name, &self.phone_number, &self.order_id]
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(json: &str) -> Order {
        serde_json::from_str(json).expect("order should parse")
    }

    #[test]
    fn test_parse_full_row() {
        let order = parse(
            r#"{"OrderID":"A1","CustomerName":"Rahim","Address":"Dhaka","PhoneNumber":"01711",
                "OrderDetails":"2x tea","Timestamp":"2024-03-05T08:07:00.000Z","Status":"Shipped","rowNum":7}"#,
        );
        assert_eq!(order.order_id, "A1");
        assert_eq!(order.customer_name, "Rahim");
        assert_eq!(order.status, Some(OrderStatus::Shipped));
        assert_eq!(order.row_ref, RowRef(7));
        assert_eq!(
            order.timestamp_utc(),
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 8, 7, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_sparse_and_numeric_cells() {
        let order = parse(r#"{"OrderID":1042,"PhoneNumber":8801711000000,"CustomerName":null,"rowNum":"12"}"#);
        assert_eq!(order.order_id, "1042");
        assert_eq!(order.phone_number, "8801711000000");
        assert_eq!(order.customer_name, "");
        assert_eq!(order.address, "");
        assert_eq!(order.status, None);
        assert_eq!(order.row_ref, RowRef(12));
        assert_eq!(order.timestamp_utc(), None);
    }

    #[test]
    fn test_unknown_status_is_none() {
        let order = parse(r#"{"Status":"Returned","rowNum":2}"#);
        assert_eq!(order.status, None);
    }

    #[test]
    fn test_missing_row_number_is_rejected() {
        let result: Result<Order, _> = serde_json::from_str(r#"{"OrderID":"A1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_matches_query_fields() {
        let order = parse(r#"{"OrderID":"ORD-77","CustomerName":"Karim Uddin","PhoneNumber":"01819","rowNum":3}"#);
        assert!(order.matches_query("karim"));
        assert!(order.matches_query("018"));
        assert!(order.matches_query("ord-7"));
        assert!(order.matches_query(""));
        assert!(!order.matches_query("dhaka"));
    }

    #[test]
    fn test_status_codes() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
            assert_eq!(
                status.css_class(),
                format!("status-{}", status.code().to_lowercase())
            );
        }
        assert_eq!(OrderStatus::from_code("pending"), None);
    }

    #[test]
    fn test_row_ref_string_form() {
        assert_eq!(RowRef(5).as_string(), "5");
        assert_eq!(RowRef(12).to_string(), "12");
    }
}
