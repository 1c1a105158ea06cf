use thiserror::Error;

/// The main error type for Wasmserve operations
#[derive(Error, Debug)]
pub enum WasmserveError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path-related errors
    #[error("Path error: {message}")]
    Path { message: String },

    /// Document root not found
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// Server errors
    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Server-related errors
#[derive(Error, Debug)]
pub enum ServerError {
    /// Server startup failed
    #[error("Failed to start server on port {port}: {reason}")]
    StartupFailed { port: u16, reason: String },
}

/// Result type alias for Wasmserve operations
pub type Result<T> = std::result::Result<T, WasmserveError>;

impl WasmserveError {
    /// new path error
    pub fn path(message: impl Into<String>) -> Self {
        Self::Path {
            message: message.into(),
        }
    }

    /// directory not found error
    pub fn directory_not_found(path: impl Into<String>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }
}

impl ServerError {
    /// new startup failed error
    pub fn startup_failed(port: u16, reason: impl Into<String>) -> Self {
        Self::StartupFailed {
            port,
            reason: reason.into(),
        }
    }
}
