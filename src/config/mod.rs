//! # Gate Configuration
//!
//! Typed settings for the access gate, loaded from TOML. The gate itself
//! never inspects raw storage formats; hosts that persist settings in some
//! other shape adapt them into [`GateSettings`] before handing them over.

mod error;
mod loader;
mod types;

pub use error::{ConfigError, ConfigResult};
pub use loader::GateConfigLoader;
pub use types::{GateSettings, DEFAULT_BYPASS_FILE, DEFAULT_REDIRECT_URL, DEFAULT_SESSION_COOKIES};
