//! Gate settings types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Destination used when no redirect URL is configured.
pub const DEFAULT_REDIRECT_URL: &str = "https://www.google.com/ncr";

/// Marker file whose presence disables enforcement.
pub const DEFAULT_BYPASS_FILE: &str = "skipipcheck";

/// Session cookies cleared when a request is denied.
pub const DEFAULT_SESSION_COOKIES: [&str; 2] = ["__typecho_uid", "__typecho_authCode"];

/// Settings for the access gate.
///
/// `allow_pool` distinguishes "never configured" (`None`) from
/// "configured but empty" (`Some("")`); both leave the gate unconfigured,
/// but hosts may want to render them differently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSettings {
    /// Raw allowlist: source addresses separated by commas. A full-width
    /// comma `，` is accepted as a separator. Entries are matched by exact
    /// string equality, not by IP semantics.
    #[serde(default)]
    pub allow_pool: Option<String>,

    /// Where denied clients are redirected. Blank falls back to
    /// [`DEFAULT_REDIRECT_URL`].
    #[serde(default)]
    pub rewrite_url: String,

    /// Path of the emergency bypass marker file.
    #[serde(default = "default_bypass_file")]
    pub bypass_file: PathBuf,

    /// Cookies cleared on deny.
    #[serde(default = "default_session_cookies")]
    pub session_cookies: Vec<String>,

    /// Link target for the setup notice shown while unconfigured.
    #[serde(default)]
    pub config_url: Option<String>,
}

fn default_bypass_file() -> PathBuf {
    PathBuf::from(DEFAULT_BYPASS_FILE)
}

fn default_session_cookies() -> Vec<String> {
    DEFAULT_SESSION_COOKIES.iter().map(ToString::to_string).collect()
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            allow_pool: None,
            rewrite_url: String::new(),
            bypass_file: default_bypass_file(),
            session_cookies: default_session_cookies(),
            config_url: None,
        }
    }
}

impl GateSettings {
    /// Create settings with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw allowlist string.
    #[must_use]
    pub fn with_allow_pool(mut self, pool: impl Into<String>) -> Self {
        self.allow_pool = Some(pool.into());
        self
    }

    /// Set the redirect URL for denied clients.
    #[must_use]
    pub fn with_rewrite_url(mut self, url: impl Into<String>) -> Self {
        self.rewrite_url = url.into();
        self
    }

    /// Set the bypass marker file path.
    #[must_use]
    pub fn with_bypass_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.bypass_file = path.into();
        self
    }

    /// Set the setup-notice link target.
    #[must_use]
    pub fn with_config_url(mut self, url: impl Into<String>) -> Self {
        self.config_url = Some(url.into());
        self
    }

    /// Whether an allowlist has been configured (non-empty raw string).
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.allow_pool.as_deref().is_some_and(|pool| !pool.is_empty())
    }

    /// Validate the settings.
    ///
    /// The allowlist string itself is never rejected; any text splits into
    /// entries. Only the redirect URL and cookie names are checked.
    pub fn validate(&self) -> Result<(), String> {
        let url = self.rewrite_url.trim();
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!("rewrite_url must carry an http(s) scheme, got '{url}'"));
        }

        for (i, cookie) in self.session_cookies.iter().enumerate() {
            if cookie.is_empty() {
                return Err(format!("session_cookies[{i}] is empty"));
            }
        }

        Ok(())
    }
}
