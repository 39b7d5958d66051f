use crate::errors::CopyError;
use arboard::Clipboard;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: String) -> Result<(), CopyError>;
}

/// Writes to the system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), CopyError> {
        debug!("Initializing clipboard");
        let mut clipboard =
            Clipboard::new().map_err(|e| CopyError::ClipboardInitError(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| CopyError::ClipboardWriteError(e.to_string()))
    }
}
