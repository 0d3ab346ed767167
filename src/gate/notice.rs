//! Administrative notices rendered by the host.

use crate::config::GateSettings;

/// Setup notice shown while no allowlist is configured.
///
/// Returned as a value alongside the decision; there is no hidden
/// "show notice" state surviving across calls. The host renders the
/// banner (or the injection script) once per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupNotice {
    /// Link target of the settings page, if the host provided one.
    pub config_url: Option<String>,
}

impl SetupNotice {
    /// Create a notice from the current settings.
    #[must_use]
    pub fn from_settings(settings: &GateSettings) -> Self {
        Self {
            config_url: settings.config_url.clone(),
        }
    }

    /// Render the banner HTML.
    #[must_use]
    pub fn banner_html(&self) -> String {
        let mut html = String::from(
            "<div class=\"whitegate-notice\">\
             <span class=\"whitegate-notice__text\">\
             Configure the admin access allowlist to enable protection.\
             </span>",
        );
        if let Some(ref url) = self.config_url {
            html.push_str(&format!(
                "<a href=\"{url}\" class=\"whitegate-notice__link\">Configure now</a>"
            ));
        }
        html.push_str("</div>");
        html
    }

    /// Render a script that injects the banner at the top of `<body>`.
    ///
    /// The banner HTML is embedded as a JSON string literal so the markup
    /// survives JavaScript string escaping intact.
    #[must_use]
    pub fn inject_script(&self) -> String {
        let encoded = serde_json::to_string(&self.banner_html())
            .unwrap_or_else(|_| "\"\"".to_string());
        format!("<script>document.body.insertAdjacentHTML(\"afterbegin\", {encoded})</script>")
    }
}

/// Admin-bar badge reflecting whether enforcement is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    /// An allowlist is configured and enforced.
    Enabled,

    /// No allowlist configured; the gate is dormant.
    Disabled,
}

impl StatusBadge {
    /// Derive the badge from the current settings.
    #[must_use]
    pub fn from_settings(settings: &GateSettings) -> Self {
        if settings.is_configured() {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    /// Render the badge HTML.
    #[must_use]
    pub fn html(&self) -> String {
        match self {
            Self::Enabled => "<span class=\"message success\">ACL enabled</span>".to_string(),
            Self::Disabled => "<span class=\"message error\">ACL disabled</span>".to_string(),
        }
    }
}
