//! Tolerant readers for spreadsheet cells.
//!
//! Apps Script serializes cells by their sheet type, so a phone number column
//! can arrive as a JSON number and an empty cell as `null` or `""`.

use crate::domain::a001_order::OrderStatus;
use anyhow::{anyhow, Context};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text cell: `null` becomes empty, numbers and booleans their literal text
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a text cell, got {}",
            other
        ))),
    }
}

/// Status cell: anything outside the known codes reads as `None`
pub fn status<'de, D>(deserializer: D) -> Result<Option<OrderStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| OrderStatus::from_code(s.trim())))
}

/// Row number given as a JSON integer or a numeric string
pub fn row_number(value: &Value) -> anyhow::Result<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| anyhow!("row number {} is not a non-negative integer", n)),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .with_context(|| format!("row number {:?} is not numeric", s)),
        other => Err(anyhow!("unexpected row number {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_number_forms() {
        assert_eq!(row_number(&json!(4)).unwrap(), 4);
        assert_eq!(row_number(&json!(" 18 ")).unwrap(), 18);
        assert!(row_number(&json!(-1)).is_err());
        assert!(row_number(&json!(2.5)).is_err());
        assert!(row_number(&json!("row")).is_err());
        assert!(row_number(&json!(null)).is_err());
    }
}
