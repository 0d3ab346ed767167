//! The core evaluation logic.

use super::allowlist::Allowlist;
use super::decision::Decision;
use super::request::RequestContext;
use crate::config::{GateSettings, DEFAULT_REDIRECT_URL};

/// Pure allow/deny evaluator.
///
/// Stateless; every call is independent and idempotent given identical
/// inputs. The bypass flag is sampled by the caller (see
/// [`super::BypassSwitch`]) so that evaluation itself touches no I/O.
#[derive(Debug)]
pub struct AccessGate;

impl AccessGate {
    /// Evaluate one request against the configured allowlist.
    ///
    /// Decision order:
    /// 1. No source address available: allow, no check is possible.
    /// 2. Bypass engaged: allow everyone, irrespective of configuration.
    /// 3. Settings unset or allowlist string empty: unconfigured.
    /// 4. Allowlist carries the `0.0.0.0` sentinel: allow everyone.
    /// 5. Source address present verbatim in the list: allow.
    /// 6. Otherwise: deny, with the resolved redirect destination.
    #[must_use]
    pub fn evaluate(
        settings: Option<&GateSettings>,
        request: &RequestContext,
        bypass: bool,
    ) -> Decision {
        let Some(source_address) = request.source_address.as_deref() else {
            return Decision::Allow;
        };

        if bypass {
            return Decision::AllowAll;
        }

        let raw_pool = settings.and_then(|s| s.allow_pool.as_deref());
        let Some(raw_pool) = raw_pool.filter(|pool| !pool.is_empty()) else {
            return Decision::Unconfigured;
        };

        let allowlist = Allowlist::parse(raw_pool);

        if allowlist.allows_everyone() {
            return Decision::AllowAll;
        }

        if allowlist.contains(source_address) {
            return Decision::Allow;
        }

        let rewrite_url = settings.map(|s| s.rewrite_url.as_str()).unwrap_or("");
        Decision::Deny {
            redirect_url: resolve_redirect(rewrite_url),
        }
    }
}

/// Resolve the configured redirect URL.
///
/// Trims surrounding whitespace; a blank result falls back to the fixed
/// default destination.
#[must_use]
pub fn resolve_redirect(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_REDIRECT_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
