use std::fmt;

/// Host operating-system identity, as far as the test layout cares.
///
/// macOS builds the test runner as an application bundle; every other host
/// produces a flat executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Darwin,
    Other,
}

impl HostOs {
    /// Identity of the machine this binary was compiled for.
    pub fn current() -> Self {
        Self::from_identity(std::env::consts::OS)
    }

    /// Map an OS identity string (`"macos"`, `"linux"`, `"darwin"`, ...).
    ///
    /// Total: anything unrecognised is `Other`.
    pub fn from_identity(identity: &str) -> Self {
        match identity.trim().to_lowercase().as_str() {
            "macos" | "darwin" => HostOs::Darwin,
            _ => HostOs::Other,
        }
    }
}

/// Which child stream a line of output came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

impl OutputStream {
    pub fn tag(self) -> &'static str {
        match self {
            OutputStream::Stdout => "stdout",
            OutputStream::Stderr => "stderr",
        }
    }
}

impl fmt::Display for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Style tool mode used by the `lint` and `format` tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMode {
    /// Report formatting differences and fail; never rewrite.
    Check,
    /// Rewrite files in place.
    Rewrite,
}
