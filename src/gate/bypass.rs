//! Emergency bypass switch.

use std::path::{Path, PathBuf};

/// Out-of-band switch that disables enforcement entirely.
///
/// The switch engages when a marker file exists on disk, or when the
/// override flag is set programmatically. It is independent of the
/// `0.0.0.0` sentinel entry; either mechanism alone disables enforcement.
#[derive(Debug, Clone)]
pub struct BypassSwitch {
    /// Marker file checked on each sample.
    marker_file: PathBuf,

    /// Explicit override, engaged regardless of the marker file.
    force: bool,
}

impl BypassSwitch {
    /// Create a switch watching the given marker file.
    #[must_use]
    pub fn new(marker_file: impl Into<PathBuf>) -> Self {
        Self {
            marker_file: marker_file.into(),
            force: false,
        }
    }

    /// Engage the switch programmatically.
    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Whether enforcement is currently disabled.
    ///
    /// Samples the filesystem; a marker file appearing or disappearing
    /// between requests takes effect on the next check.
    #[must_use]
    pub fn engaged(&self) -> bool {
        self.force || self.marker_file.exists()
    }

    /// The marker file path.
    #[must_use]
    pub fn marker_file(&self) -> &Path {
        &self.marker_file
    }
}
