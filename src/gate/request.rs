//! Per-request context handed to the gate.

/// Context for one inbound request.
///
/// The source address is absent when the host environment exposes no
/// remote-address information; the gate treats that as "no check possible"
/// and allows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Source address of the request, as the host reports it.
    pub source_address: Option<String>,
}

impl RequestContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source address.
    #[must_use]
    pub fn with_source_address(mut self, address: impl Into<String>) -> Self {
        self.source_address = Some(address.into());
        self
    }

    /// Build a context from the process environment.
    ///
    /// Reads `REMOTE_ADDR`, the CGI-style variable hosts set for the
    /// handling process. Absence is not an error; it yields a context
    /// with no source address.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            source_address: std::env::var("REMOTE_ADDR").ok(),
        }
    }

    /// Whether the host reported a source address.
    #[must_use]
    pub fn has_source_address(&self) -> bool {
        self.source_address.is_some()
    }
}
