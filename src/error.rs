use thiserror::Error;

/// Unified error type for release-util operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Version format error: {0}")]
    Format(String),

    #[error("Back compat check disallowed for newer version: {current} < {other}")]
    Precondition { current: String, other: String },

    #[error("Could not find {pattern} in {file}")]
    NotFound { pattern: String, file: String },

    #[error("Cannot run {script} on feature branch '{branch}'")]
    UnsupportedBranch { script: String, branch: String },

    #[error("Status parse error: {0}")]
    StatusParse(String),

    #[error("failed to download url \"{url}\": {source}")]
    Download {
        url: String,
        #[source]
        source: Box<ReleaseError>,
    },

    #[error("Command '{command}' failed with exit code {}", exit_code(.code))]
    Command {
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Missing property '{key}' in {file}")]
    MissingProperty { key: String, file: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

fn exit_code(code: &Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Convenience type alias for Results in release-util
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        ReleaseError::Format(msg.into())
    }

    /// Create a status parse error with context
    pub fn status_parse(msg: impl Into<String>) -> Self {
        ReleaseError::StatusParse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a transport error with context
    pub fn transport(msg: impl Into<String>) -> Self {
        ReleaseError::Transport(msg.into())
    }

    /// Create a not-found error naming the pattern and the file that was scanned
    pub fn not_found(pattern: impl Into<String>, file: impl Into<String>) -> Self {
        ReleaseError::NotFound {
            pattern: pattern.into(),
            file: file.into(),
        }
    }
}
