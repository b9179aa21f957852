use anyhow::Context;
use serde::de::DeserializeOwned;

/// Decode a response body, naming the endpoint in the error chain
pub fn decode<T: DeserializeOwned>(body: &str, what: &str) -> anyhow::Result<T> {
    serde_json::from_str(body).with_context(|| format!("malformed {} response", what))
}
