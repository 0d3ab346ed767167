//! Host-executed enforcement instructions.

use crate::config::GateSettings;

/// Extension points at which the host consults the gate.
///
/// The gate registers no callbacks; the host calls it at these points and
/// acts on the returned decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    /// Before rendering any administrative page.
    PreAdminRender,

    /// Immediately after a login completes.
    PostLogin,
}

impl std::fmt::Display for HookPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreAdminRender => write!(f, "pre-admin-render"),
            Self::PostLogin => write!(f, "post-login"),
        }
    }
}

/// What the host must do when a request is denied.
///
/// The gate never performs these effects itself. The host is expected to
/// clear the named cookies, tear down the server-side session (best-effort;
/// a missing session is not an error), emit a `Location` redirect, and stop
/// processing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyAction {
    /// Redirect destination for the `Location` header.
    pub location: String,

    /// Cookies to delete from the client.
    pub clear_cookies: Vec<String>,

    /// Whether to invalidate the server-side session.
    pub destroy_session: bool,
}

impl DenyAction {
    /// Build the deny instruction for a resolved redirect URL.
    #[must_use]
    pub fn new(location: impl Into<String>, settings: &GateSettings) -> Self {
        Self {
            location: location.into(),
            clear_cookies: settings.session_cookies.clone(),
            destroy_session: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deny_action_carries_session_cookies() {
        let settings = GateSettings::default();
        let action = DenyAction::new("https://example.com/", &settings);

        assert_eq!(action.location, "https://example.com/");
        assert_eq!(
            action.clear_cookies,
            vec!["__typecho_uid".to_string(), "__typecho_authCode".to_string()]
        );
        assert!(action.destroy_session);
    }

    #[test]
    fn test_hook_point_display() {
        assert_eq!(HookPoint::PreAdminRender.to_string(), "pre-admin-render");
        assert_eq!(HookPoint::PostLogin.to_string(), "post-login");
    }
}
