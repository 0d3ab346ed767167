//! Gate decisions.

/// Outcome of evaluating one request against the allowlist.
///
/// Evaluation is terminal on the first decision reached; there are no
/// retries and no partial outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The source address is on the allowlist, or no address was available
    /// to check.
    Allow,

    /// Enforcement is switched off, by the sentinel entry or the bypass.
    AllowAll,

    /// The source address is not on the allowlist. The host must redirect
    /// to `redirect_url` and tear down the session.
    Deny {
        /// Resolved redirect destination.
        redirect_url: String,
    },

    /// No allowlist has been configured; show a setup notice instead of
    /// enforcing.
    Unconfigured,
}

impl Decision {
    /// Whether the request may proceed.
    ///
    /// `Unconfigured` also lets the request through, but signals that a
    /// notice should be rendered rather than that access was checked.
    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow | Self::AllowAll)
    }

    /// Whether the request must be rejected.
    #[must_use]
    pub fn is_deny(&self) -> bool {
        matches!(self, Self::Deny { .. })
    }

    /// Whether the gate is waiting on configuration.
    #[must_use]
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, Self::Unconfigured)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::AllowAll => write!(f, "allow-all"),
            Self::Deny { redirect_url } => write!(f, "deny: redirect to {redirect_url}"),
            Self::Unconfigured => write!(f, "unconfigured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Decision::Allow.is_allow());
        assert!(Decision::AllowAll.is_allow());
        assert!(!Decision::Unconfigured.is_allow());

        let deny = Decision::Deny {
            redirect_url: "https://example.com/".to_string(),
        };
        assert!(deny.is_deny());
        assert!(!deny.is_allow());
        assert!(Decision::Unconfigured.is_unconfigured());
    }

    #[test]
    fn test_display() {
        assert_eq!(Decision::Allow.to_string(), "allow");
        let deny = Decision::Deny {
            redirect_url: "https://example.com/".to_string(),
        };
        assert_eq!(deny.to_string(), "deny: redirect to https://example.com/");
    }
}
