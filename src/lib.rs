//! # Whitegate
//!
//! An embeddable IP access gate for administrative endpoints. The host
//! application calls the gate at well-defined extension points with the
//! current request's source address; the gate evaluates it against a
//! configured allowlist and returns an explicit decision together with
//! the instructions the host should act on (redirect, cookie clearing,
//! setup notice).
//!
//! ## Features
//!
//! - **IP Allowlist**: permit administrative access by exact source address
//! - **Escape Sentinel**: the literal entry `0.0.0.0` admits everyone
//! - **Emergency Bypass**: a marker file disables enforcement out-of-band
//! - **Setup Notice**: unconfigured installs get a banner, not a lockout
//!
//! ## Usage
//!
//! ```ignore
//! use whitegate::config::GateSettings;
//! use whitegate::gate::{GateHandler, HookPoint, RequestContext};
//!
//! let settings = GateSettings::default().with_allow_pool("10.0.0.1,10.0.0.2");
//! let mut handler = GateHandler::with_settings(settings);
//! handler.init()?;
//! handler.start()?;
//!
//! let ctx = RequestContext::new().with_source_address("10.0.0.5");
//! let outcome = handler.check_access(HookPoint::PreAdminRender, &ctx);
//! if let Some(action) = outcome.deny_action {
//!     // clear action.clear_cookies, redirect to action.location, halt
//! }
//! ```
//!
//! ## Design
//!
//! The gate is pure: [`gate::AccessGate::evaluate`] performs no I/O and
//! mutates nothing. All side effects on deny (cookie deletion, session
//! teardown, the redirect itself) are described by data the host executes.
//! The only ambient input is the bypass marker file, sampled by the
//! handler before each evaluation.

pub mod config;
pub mod gate;
