use std::io;
use std::path::PathBuf;

/// Every error longlines can produce before the read loop starts.
/// Displayed as user-facing messages.
#[derive(Debug)]
pub enum LongLinesError {
    NotFound {
        path: PathBuf,
    },
    PermissionDenied {
        path: PathBuf,
    },
    Open {
        path: PathBuf,
        source: io::Error,
    },
}

impl std::fmt::Display for LongLinesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                write!(f, "{} [permission denied]", path.display())
            }
            Self::Open { path, source } => {
                write!(f, "could not open {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LongLinesError {}

impl LongLinesError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::Open { .. } => 2,
            Self::PermissionDenied { .. } => 4,
        }
    }
}
