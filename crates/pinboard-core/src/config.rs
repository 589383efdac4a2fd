//! Client Configuration
//!
//! Endpoint bases and behaviour policies, read from `PINBOARD_*` keys.

use crate::error::ConfigError;
use crate::fetcher::{FetchPolicy, ReadFailurePolicy, StalePolicy};
use crate::models::Pin;
use crate::toggle::TogglePolicy;

pub const API_BASE_KEY: &str = "PINBOARD_API_BASE";
pub const ASSET_BASE_KEY: &str = "PINBOARD_ASSET_BASE";
pub const DISCARD_STALE_KEY: &str = "PINBOARD_DISCARD_STALE";
pub const SURFACE_READ_ERRORS_KEY: &str = "PINBOARD_SURFACE_READ_ERRORS";
pub const ROLLBACK_TOGGLES_KEY: &str = "PINBOARD_ROLLBACK_TOGGLES";
pub const ANONYMOUS_HOME_KEY: &str = "PINBOARD_ANONYMOUS_HOME";

/// What guests see at `/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnonymousHome {
    #[default]
    Login,
    Boards,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path
    pub api_base: String,
    /// Where uploaded pin images are served from
    pub asset_base: String,
    pub fetch: FetchPolicy,
    pub toggle: TogglePolicy,
    pub anonymous_home: AnonymousHome,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            asset_base: "/static/uploads".to_string(),
            fetch: FetchPolicy::default(),
            toggle: TogglePolicy::default(),
            anonymous_home: AnonymousHome::default(),
        }
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value: value.to_string() }),
    }
}

impl ClientConfig {
    /// Build from a key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup(API_BASE_KEY) {
            config.api_base = base;
        }
        if let Some(base) = lookup(ASSET_BASE_KEY) {
            config.asset_base = base;
        }
        if let Some(value) = lookup(DISCARD_STALE_KEY) {
            if parse_flag(DISCARD_STALE_KEY, &value)? {
                config.fetch.stale = StalePolicy::DiscardStale;
            }
        }
        if let Some(value) = lookup(SURFACE_READ_ERRORS_KEY) {
            if parse_flag(SURFACE_READ_ERRORS_KEY, &value)? {
                config.fetch.on_failure = ReadFailurePolicy::Surface;
            }
        }
        if let Some(value) = lookup(ROLLBACK_TOGGLES_KEY) {
            if parse_flag(ROLLBACK_TOGGLES_KEY, &value)? {
                config.toggle = TogglePolicy::RollbackOnFailure;
            }
        }
        if let Some(value) = lookup(ANONYMOUS_HOME_KEY) {
            config.anonymous_home = match value.trim().to_ascii_lowercase().as_str() {
                "login" => AnonymousHome::Login,
                "boards" => AnonymousHome::Boards,
                _ => {
                    return Err(ConfigError::InvalidValue { key: ANONYMOUS_HOME_KEY, value })
                }
            };
        }

        Ok(config)
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    /// Where a pin's image is served from.
    ///
    /// A bare filename and the backend's `/static/uploads/<file>` paths are
    /// joined onto the asset base. Other server paths resolve against the
    /// asset base's origin. Absolute URLs pass through.
    pub fn image_url(&self, pin: &Pin) -> Option<String> {
        let base = self.asset_base.trim_end_matches('/');
        if !pin.image_filename.is_empty() {
            return Some(format!("{}/{}", base, pin.image_filename));
        }

        let url = pin.image_url.as_deref().filter(|u| !u.is_empty())?;
        if is_absolute(url) {
            return Some(url.to_string());
        }
        if let Some(file) = url.strip_prefix(UPLOADS_PATH) {
            return Some(format!("{}/{}", base, file.trim_start_matches('/')));
        }
        if url.starts_with('/') {
            return Some(format!("{}{}", origin(base), url));
        }
        Some(format!("{}/{}", base, url))
    }
}

/// Upload path the backend puts into `image_url`
const UPLOADS_PATH: &str = "/static/uploads/";

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}

/// `scheme://host[:port]` of an absolute base, empty for a server-relative one
fn origin(base: &str) -> &str {
    match base.find("://") {
        Some(scheme_end) => {
            let host_start = scheme_end + 3;
            match base[host_start..].find('/') {
                Some(path_start) => &base[..host_start + path_start],
                None => base,
            }
        }
        None => "",
    }
}
