//! Frontend configuration module
//!
//! Backend locations and client behaviour, fixed at build time through
//! `AUTOCARE_*` environment variables.

use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "/api/v1";
const DEFAULT_BOOKING_BASE_URL: &str = "/booking";
const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Frontend configuration for backend URLs and request policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the auth, user and employee endpoints
    pub api_base_url: String,
    /// Base URL of the booking backend
    pub booking_base_url: String,
    /// Requests unanswered after this long are aborted
    pub request_timeout: Duration,
    /// Target of the hard redirect issued when the session is rejected
    pub login_path: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("AUTOCARE_API_BASE_URL"),
            option_env!("AUTOCARE_BOOKING_BASE_URL"),
            option_env!("AUTOCARE_REQUEST_TIMEOUT_SECS"),
            option_env!("AUTOCARE_LOGIN_PATH"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix origin-relative URLs (`/api/v1`) with `origin`; the HTTP
    /// client only accepts absolute URLs.
    #[must_use]
    pub fn with_origin(mut self, origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        for url in [&mut self.api_base_url, &mut self.booking_base_url] {
            if url.starts_with('/') {
                *url = format!("{origin}{url}");
            }
        }
        self
    }

    fn from_values(
        api_base_url: Option<&str>,
        booking_base_url: Option<&str>,
        timeout_secs: Option<&str>,
        login_path: Option<&str>,
    ) -> Self {
        let timeout_secs = timeout_secs
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            api_base_url: base_url(api_base_url, DEFAULT_API_BASE_URL),
            booking_base_url: base_url(booking_base_url, DEFAULT_BOOKING_BASE_URL),
            request_timeout: Duration::from_secs(timeout_secs),
            login_path: non_blank(login_path, DEFAULT_LOGIN_PATH).to_string(),
        }
    }
}

fn non_blank<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
}

/// Base URLs are joined with `/path`, so they carry no trailing slash.
fn base_url(value: Option<&str>, fallback: &str) -> String {
    non_blank(value, fallback).trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = FrontendConfig::from_values(None, None, None, None);
        assert_eq!(config.api_base_url, "/api/v1");
        assert_eq!(config.booking_base_url, "/booking");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn overrides_are_trimmed() {
        let config = FrontendConfig::from_values(
            Some("https://api.example.com/api/v1/"),
            Some(" https://booking.example.com "),
            Some("30"),
            Some("/signin"),
        );
        assert_eq!(config.api_base_url, "https://api.example.com/api/v1");
        assert_eq!(config.booking_base_url, "https://booking.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.login_path, "/signin");
    }

    #[test]
    fn invalid_timeout_falls_back() {
        for raw in ["abc", "0", "-5", ""] {
            let config = FrontendConfig::from_values(None, None, Some(raw), None);
            assert_eq!(config.request_timeout, Duration::from_secs(10), "{raw}");
        }
    }

    #[test]
    fn with_origin_only_touches_relative_urls() {
        let config = FrontendConfig::from_values(
            None,
            Some("https://booking.example.com"),
            None,
            None,
        )
        .with_origin("https://app.example.com/");
        assert_eq!(config.api_base_url, "https://app.example.com/api/v1");
        assert_eq!(config.booking_base_url, "https://booking.example.com");
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn root_login_path_is_kept() {
        let config = FrontendConfig::from_values(None, None, None, Some("/"));
        assert_eq!(config.login_path, "/");

        let config = FrontendConfig::from_values(None, None, None, Some("/auth/login/"));
        assert_eq!(config.login_path, "/auth/login/");
    }

    #[test]
    fn blank_urls_fall_back() {
        let config = FrontendConfig::from_values(Some("  "), Some(""), None, Some(" "));
        assert_eq!(config.api_base_url, "/api/v1");
        assert_eq!(config.booking_base_url, "/booking");
        assert_eq!(config.login_path, "/login");
    }
}
