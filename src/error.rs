use std::{path::PathBuf, process::ExitStatus};

/// Custom error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] confy::ConfyError),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error("terminal-notifier not usable at '{}': {reason}", path.display())]
    ExecutableNotFound { path: PathBuf, reason: String },
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("terminal-notifier exited with {status}: {stderr}")]
    ToolFailure { status: ExitStatus, stderr: String },
    #[error("unexpected list output at line {line}: {reason}")]
    OutputParse { line: usize, reason: String },
    #[error("terminal-notifier requires macOS 10.8 or higher")]
    UnsupportedPlatform,
    #[cfg(test)]
    #[error(transparent)]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
