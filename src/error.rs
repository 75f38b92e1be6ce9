use thiserror::Error;

#[derive(Debug, Error)]
pub enum PeekShieldError {
    #[error("Unsupported")]
    Unsupported,

    #[error("No display available")]
    NoDisplay,

    /// The platform refused to enumerate windows at all.
    #[error("Window enumeration failed: {0}")]
    Enumeration(String),

    /// A single window's owning process could not be resolved.
    #[error("Process lookup failed for pid {pid}: {reason}")]
    ProcessLookup { pid: u32, reason: String },

    #[error("Frame capture failed: {0}")]
    Capture(String),

    #[error("Platform error: {0}")]
    Platform(String),
}

pub type PeekShieldResult<T> = Result<T, PeekShieldError>;
