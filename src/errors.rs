use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(String, String),

    #[error("Vault error: {0}")]
    VaultError(String),

    #[error("Path is outside the vault: {0}")]
    OutsideVault(String),

    #[error("Invalid selection pattern: {0}")]
    PatternError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for CopyError {
    fn from(err: std::io::Error) -> Self {
        CopyError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for CopyError {
    fn from(err: serde_json::Error) -> Self {
        CopyError::ConfigError(err.to_string())
    }
}

impl From<glob::PatternError> for CopyError {
    fn from(err: glob::PatternError) -> Self {
        CopyError::PatternError(err.to_string())
    }
}
