use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to initialize module enumeration: {message}")]
    CreateFailed { code: u32, message: String },

    #[error("module enumeration terminated unexpectedly: {message}")]
    EnumerationInterrupted { code: u32, message: String },
}

pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;

impl SnapshotError {
    /// The platform error code reported by the OS facility which failed.
    pub fn os_error_code(&self) -> u32 {
        match self {
            &SnapshotError::CreateFailed { code, .. } => code,
            &SnapshotError::EnumerationInterrupted { code, .. } => code,
        }
    }
}
