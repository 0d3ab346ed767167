//! # Access Gate
//!
//! Decides whether a request's source address may reach an administrative
//! endpoint. Supports an exact-match allowlist, an all-allowing sentinel
//! entry, an emergency bypass file, and a setup notice for unconfigured
//! installs.
//!
//! ## Usage
//!
//! ```ignore
//! use whitegate::gate::{AccessGate, Decision, RequestContext};
//!
//! let ctx = RequestContext::new().with_source_address("10.0.0.5");
//! let decision = AccessGate::evaluate(Some(&settings), &ctx, false);
//! match decision {
//!     Decision::Deny { redirect_url } => { /* redirect and halt */ },
//!     _ => { /* proceed */ },
//! }
//! ```

mod allowlist;
mod bypass;
mod decision;
mod enforcement;
mod error;
mod evaluator;
mod handler;
mod notice;
mod request;

pub use allowlist::{Allowlist, SENTINEL_ALLOW_ALL};
pub use bypass::BypassSwitch;
pub use decision::Decision;
pub use enforcement::{DenyAction, HookPoint};
pub use error::{GateError, GateResult};
pub use evaluator::{resolve_redirect, AccessGate};
pub use handler::{GateHandler, GateOutcome, GateStats, GateStatus};
pub use notice::{SetupNotice, StatusBadge};
pub use request::RequestContext;
