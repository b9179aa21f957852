//! Runtime configuration of the dashboard.
//!
//! Values are resolved once at startup: `<meta>` tags in the host page win,
//! then the compile-time environment, then built-in defaults.

use web_sys::window;

/// Path appended to the page origin when no API base is configured
const DEFAULT_API_PATH: &str = "/exec";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;

const META_API_BASE: &str = "order-api-base";
const META_REQUEST_TIMEOUT: &str = "order-request-timeout-ms";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployed order service URL, without query string
    pub api_base_url: String,
    /// Per-request timeout; the request is aborted when it elapses
    pub request_timeout_ms: u32,
}

impl AppConfig {
    pub fn load() -> Self {
        let config = Self::resolve(
            read_meta(META_API_BASE),
            read_meta(META_REQUEST_TIMEOUT),
            option_env!("ORDER_API_BASE_URL"),
            option_env!("ORDER_REQUEST_TIMEOUT_MS"),
            same_origin_base,
        );
        log::debug!(
            "config: api base {}, timeout {} ms",
            config.api_base_url,
            config.request_timeout_ms
        );
        config
    }

    fn resolve(
        meta_base: Option<String>,
        meta_timeout: Option<String>,
        env_base: Option<&str>,
        env_timeout: Option<&str>,
        fallback_base: impl FnOnce() -> String,
    ) -> Self {
        let api_base_url = meta_base
            .or_else(|| non_empty(env_base))
            .unwrap_or_else(fallback_base);

        let request_timeout_ms = meta_timeout
            .as_deref()
            .and_then(parse_timeout_ms)
            .or_else(|| env_timeout.and_then(parse_timeout_ms))
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        Self {
            api_base_url,
            request_timeout_ms,
        }
    }
}

/// Positive number of milliseconds; anything else is ignored
pub fn parse_timeout_ms(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn read_meta(name: &str) -> Option<String> {
    let document = window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    non_empty(element.get_attribute("content").as_deref())
}

fn same_origin_base() -> String {
    let origin = window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, DEFAULT_API_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> String {
        "http://localhost/exec".to_string()
    }

    #[test]
    fn test_meta_overrides_env() {
        let config = AppConfig::resolve(
            Some("https://meta.example/exec".into()),
            Some("2500".into()),
            Some("https://env.example/exec"),
            Some("9000"),
            fallback,
        );
        assert_eq!(config.api_base_url, "https://meta.example/exec");
        assert_eq!(config.request_timeout_ms, 2500);
    }

    #[test]
    fn test_env_then_defaults() {
        let config = AppConfig::resolve(None, None, Some("https://env.example/exec"), None, fallback);
        assert_eq!(config.api_base_url, "https://env.example/exec");
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);

        let config = AppConfig::resolve(None, None, Some("  "), Some("5000"), fallback);
        assert_eq!(config.api_base_url, "http://localhost/exec");
        assert_eq!(config.request_timeout_ms, 5000);
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = AppConfig::resolve(None, Some("soon".into()), None, Some("0"), fallback);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(parse_timeout_ms(" 750 "), Some(750));
        assert_eq!(parse_timeout_ms("-1"), None);
    }
}
