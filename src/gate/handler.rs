//! Gate handler with lifecycle, stats, and metrics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::bypass::BypassSwitch;
use super::decision::Decision;
use super::enforcement::{DenyAction, HookPoint};
use super::error::{GateError, GateResult};
use super::evaluator::AccessGate;
use super::notice::SetupNotice;
use super::request::RequestContext;
use crate::config::GateSettings;

/// Lifecycle state of the gate handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateStatus {
    /// Handler validated its settings but is not yet serving checks.
    Initializing,

    /// Handler is serving checks.
    Running,

    /// Handler is stopped.
    Stopped,
}

impl std::fmt::Display for GateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initializing => write!(f, "initializing"),
            Self::Running => write!(f, "running"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// Counters for gate activity.
#[derive(Debug, Default)]
pub struct GateStats {
    /// Total requests checked.
    pub requests_checked: AtomicU64,
    /// Requests that passed (allow or allow-all).
    pub requests_allowed: AtomicU64,
    /// Requests denied.
    pub requests_denied: AtomicU64,
    /// Checks short-circuited by the bypass switch.
    pub bypassed: AtomicU64,
    /// Checks answered while unconfigured.
    pub unconfigured: AtomicU64,
}

impl GateStats {
    /// Create new stats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one decision.
    pub fn record(&self, decision: &Decision, bypassed: bool) {
        self.requests_checked.fetch_add(1, Ordering::Relaxed);
        if bypassed {
            self.bypassed.fetch_add(1, Ordering::Relaxed);
        }
        match decision {
            Decision::Allow | Decision::AllowAll => {
                self.requests_allowed.fetch_add(1, Ordering::Relaxed);
            },
            Decision::Deny { .. } => {
                self.requests_denied.fetch_add(1, Ordering::Relaxed);
            },
            Decision::Unconfigured => {
                self.unconfigured.fetch_add(1, Ordering::Relaxed);
            },
        }
    }
}

/// Everything the host needs to act on one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    /// Extension point the check was made at.
    pub hook: HookPoint,

    /// The decision reached.
    pub decision: Decision,

    /// Set when the decision is a deny; the host executes it and halts.
    pub deny_action: Option<DenyAction>,

    /// Set when the gate is unconfigured; the host renders it.
    pub notice: Option<SetupNotice>,
}

/// Access gate handler.
///
/// Owns the settings and the bypass switch, and wraps the pure evaluator
/// with lifecycle management and counters. Checks are answered only while
/// running; a stopped handler lets everything through rather than locking
/// administrators out.
pub struct GateHandler {
    /// Current settings.
    settings: GateSettings,

    /// Bypass switch (built from settings at start).
    bypass: Option<BypassSwitch>,

    /// Current lifecycle state.
    status: GateStatus,

    /// Counters.
    stats: Arc<GateStats>,

    /// Start time for uptime reporting.
    started_at: Option<Instant>,
}

impl std::fmt::Debug for GateHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateHandler")
            .field("settings", &self.settings)
            .field("bypass", &self.bypass.is_some())
            .field("status", &self.status)
            .field("stats", &self.stats)
            .finish()
    }
}

impl GateHandler {
    /// Create a handler with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(GateSettings::default())
    }

    /// Create a handler with the given settings.
    #[must_use]
    pub fn with_settings(settings: GateSettings) -> Self {
        Self {
            settings,
            bypass: None,
            status: GateStatus::Stopped,
            stats: Arc::new(GateStats::new()),
            started_at: None,
        }
    }

    /// Validate settings and prepare the handler.
    ///
    /// # Errors
    ///
    /// Returns `GateError::InvalidState` if the handler is not stopped, or
    /// `GateError::InvalidSettings` if validation fails.
    pub fn init(&mut self) -> GateResult<()> {
        if self.status != GateStatus::Stopped {
            return Err(GateError::InvalidState {
                current: self.status.to_string(),
                expected: "stopped".to_string(),
            });
        }

        info!("initializing access gate");
        self.settings.validate().map_err(GateError::InvalidSettings)?;

        self.status = GateStatus::Initializing;
        Ok(())
    }

    /// Start serving checks.
    ///
    /// # Errors
    ///
    /// Returns `GateError::InvalidState` if called before `init`.
    pub fn start(&mut self) -> GateResult<()> {
        if self.status != GateStatus::Initializing {
            return Err(GateError::InvalidState {
                current: self.status.to_string(),
                expected: "initializing".to_string(),
            });
        }

        self.bypass = Some(BypassSwitch::new(self.settings.bypass_file.clone()));
        self.status = GateStatus::Running;
        self.started_at = Some(Instant::now());

        info!(
            configured = self.settings.is_configured(),
            bypass_file = %self.settings.bypass_file.display(),
            "access gate started"
        );
        Ok(())
    }

    /// Stop the handler.
    pub fn stop(&mut self) -> GateResult<()> {
        debug!("stopping access gate");

        self.bypass = None;
        self.status = GateStatus::Stopped;
        self.started_at = None;

        info!("access gate stopped");
        Ok(())
    }

    /// Apply new settings without restarting.
    ///
    /// # Errors
    ///
    /// Returns `GateError::InvalidSettings` if the new settings are invalid;
    /// the previous settings stay in effect.
    pub fn reload(&mut self, settings: GateSettings) -> GateResult<()> {
        settings.validate().map_err(GateError::InvalidSettings)?;

        if self.status == GateStatus::Running {
            self.bypass = Some(BypassSwitch::new(settings.bypass_file.clone()));
        }
        self.settings = settings;

        info!(configured = self.settings.is_configured(), "access gate settings reloaded");
        Ok(())
    }

    /// Check one request at the given extension point.
    ///
    /// Samples the bypass switch, evaluates, and bundles the decision with
    /// the instructions the host acts on. A handler that is not running
    /// answers `Allow` without consulting the allowlist.
    pub fn check_access(&self, hook: HookPoint, ctx: &RequestContext) -> GateOutcome {
        if self.status != GateStatus::Running {
            return GateOutcome {
                hook,
                decision: Decision::Allow,
                deny_action: None,
                notice: None,
            };
        }

        let bypassed = self.bypass.as_ref().is_some_and(BypassSwitch::engaged);
        let decision = AccessGate::evaluate(Some(&self.settings), ctx, bypassed);
        self.stats.record(&decision, bypassed);

        let deny_action = match decision {
            Decision::Deny { ref redirect_url } => {
                debug!(
                    hook = %hook,
                    source = ctx.source_address.as_deref().unwrap_or("-"),
                    redirect = %redirect_url,
                    "request denied"
                );
                Some(DenyAction::new(redirect_url.clone(), &self.settings))
            },
            _ => None,
        };

        let notice = if decision.is_unconfigured() {
            Some(SetupNotice::from_settings(&self.settings))
        } else {
            None
        };

        GateOutcome {
            hook,
            decision,
            deny_action,
            notice,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> GateStatus {
        self.status.clone()
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &GateSettings {
        &self.settings
    }

    /// Counters.
    #[must_use]
    pub fn stats(&self) -> &GateStats {
        &self.stats
    }

    /// Render counters in Prometheus text format.
    #[must_use]
    pub fn metrics_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "whitegate_requests_checked {}\n",
            self.stats.requests_checked.load(Ordering::Relaxed)
        ));
        output.push_str(&format!(
            "whitegate_requests_allowed {}\n",
            self.stats.requests_allowed.load(Ordering::Relaxed)
        ));
        output.push_str(&format!(
            "whitegate_requests_denied {}\n",
            self.stats.requests_denied.load(Ordering::Relaxed)
        ));
        output.push_str(&format!(
            "whitegate_bypassed {}\n",
            self.stats.bypassed.load(Ordering::Relaxed)
        ));
        output.push_str(&format!(
            "whitegate_unconfigured {}\n",
            self.stats.unconfigured.load(Ordering::Relaxed)
        ));

        if let Some(started) = self.started_at {
            output.push_str(&format!(
                "whitegate_uptime_secs {}\n",
                started.elapsed().as_secs_f64()
            ));
        }

        output
    }
}

impl Default for GateHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_handler(settings: GateSettings) -> GateHandler {
        let mut handler = GateHandler::with_settings(settings);
        handler.init().unwrap();
        handler.start().unwrap();
        handler
    }

    #[test]
    fn test_lifecycle() {
        let mut handler = GateHandler::new();
        assert_eq!(handler.status(), GateStatus::Stopped);

        handler.init().unwrap();
        assert_eq!(handler.status(), GateStatus::Initializing);

        handler.start().unwrap();
        assert_eq!(handler.status(), GateStatus::Running);

        handler.stop().unwrap();
        assert_eq!(handler.status(), GateStatus::Stopped);
    }

    #[test]
    fn test_start_before_init_fails() {
        let mut handler = GateHandler::new();
        assert!(matches!(handler.start(), Err(GateError::InvalidState { .. })));
    }

    #[test]
    fn test_init_rejects_bad_settings() {
        let mut handler =
            GateHandler::with_settings(GateSettings::default().with_rewrite_url("no-scheme"));
        assert!(matches!(handler.init(), Err(GateError::InvalidSettings(_))));
        assert_eq!(handler.status(), GateStatus::Stopped);
    }

    #[test]
    fn test_stopped_handler_allows() {
        let handler = GateHandler::with_settings(
            GateSettings::default().with_allow_pool("10.0.0.1"),
        );
        let ctx = RequestContext::new().with_source_address("8.8.8.8");
        let outcome = handler.check_access(HookPoint::PreAdminRender, &ctx);
        assert_eq!(outcome.decision, Decision::Allow);
        // Not counted, the gate was not consulted
        assert_eq!(handler.stats().requests_checked.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_deny_outcome_carries_action() {
        let handler = running_handler(
            GateSettings::default()
                .with_allow_pool("10.0.0.1")
                .with_rewrite_url("https://example.com/away"),
        );

        let ctx = RequestContext::new().with_source_address("10.0.0.9");
        let outcome = handler.check_access(HookPoint::PostLogin, &ctx);

        assert!(outcome.decision.is_deny());
        let action = outcome.deny_action.unwrap();
        assert_eq!(action.location, "https://example.com/away");
        assert_eq!(action.clear_cookies.len(), 2);
        assert!(action.destroy_session);
        assert!(outcome.notice.is_none());
    }

    #[test]
    fn test_allowed_outcome_has_no_action() {
        let handler = running_handler(GateSettings::default().with_allow_pool("10.0.0.1"));

        let ctx = RequestContext::new().with_source_address("10.0.0.1");
        let outcome = handler.check_access(HookPoint::PreAdminRender, &ctx);

        assert_eq!(outcome.decision, Decision::Allow);
        assert!(outcome.deny_action.is_none());
        assert!(outcome.notice.is_none());
    }

    #[test]
    fn test_unconfigured_outcome_carries_notice() {
        let handler = running_handler(
            GateSettings::default().with_config_url("https://blog.example/admin/options"),
        );

        let ctx = RequestContext::new().with_source_address("10.0.0.1");
        let outcome = handler.check_access(HookPoint::PreAdminRender, &ctx);

        assert_eq!(outcome.decision, Decision::Unconfigured);
        let notice = outcome.notice.unwrap();
        assert_eq!(
            notice.config_url.as_deref(),
            Some("https://blog.example/admin/options")
        );
    }

    #[test]
    fn test_stats_accumulate() {
        let handler = running_handler(GateSettings::default().with_allow_pool("10.0.0.1"));

        let allowed = RequestContext::new().with_source_address("10.0.0.1");
        let denied = RequestContext::new().with_source_address("8.8.8.8");

        handler.check_access(HookPoint::PreAdminRender, &allowed);
        handler.check_access(HookPoint::PreAdminRender, &denied);
        handler.check_access(HookPoint::PostLogin, &denied);

        let stats = handler.stats();
        assert_eq!(stats.requests_checked.load(Ordering::Relaxed), 3);
        assert_eq!(stats.requests_allowed.load(Ordering::Relaxed), 1);
        assert_eq!(stats.requests_denied.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_reload_swaps_allowlist() {
        let mut handler = running_handler(GateSettings::default().with_allow_pool("10.0.0.1"));

        let ctx = RequestContext::new().with_source_address("10.0.0.2");
        assert!(handler
            .check_access(HookPoint::PreAdminRender, &ctx)
            .decision
            .is_deny());

        handler
            .reload(GateSettings::default().with_allow_pool("10.0.0.1,10.0.0.2"))
            .unwrap();
        assert_eq!(
            handler.check_access(HookPoint::PreAdminRender, &ctx).decision,
            Decision::Allow
        );
    }

    #[test]
    fn test_reload_rejects_bad_settings_keeps_old() {
        let mut handler = running_handler(GateSettings::default().with_allow_pool("10.0.0.1"));

        let result = handler.reload(GateSettings::default().with_rewrite_url("bogus"));
        assert!(matches!(result, Err(GateError::InvalidSettings(_))));
        assert_eq!(handler.settings().allow_pool.as_deref(), Some("10.0.0.1"));
    }

    #[test]
    fn test_metrics_text() {
        let handler = running_handler(GateSettings::default().with_allow_pool("10.0.0.1"));

        let ctx = RequestContext::new().with_source_address("10.0.0.1");
        handler.check_access(HookPoint::PreAdminRender, &ctx);

        let metrics = handler.metrics_text();
        assert!(metrics.contains("whitegate_requests_checked 1"));
        assert!(metrics.contains("whitegate_requests_allowed 1"));
        assert!(metrics.contains("whitegate_uptime_secs"));
    }
}
