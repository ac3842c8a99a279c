//! Error type for the wordup command.

/// Everything that can stop a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The command line could not be understood.
    #[error("{0}")]
    Usage(String),

    /// The codec rejected its input or configuration.
    #[error(transparent)]
    Core(#[from] wordup_core::Error),

    /// JSON output could not be produced.
    #[error("cannot serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Output could not be written.
    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}
