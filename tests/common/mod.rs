#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use vault_copy::clipboard::ClipboardWriter;
use vault_copy::errors::CopyError;
use vault_copy::notice::{Notice, Notifier};
use vault_copy::vault::{Entry, Vault, VaultFile, VaultFolder};

pub fn file(path: &str) -> Entry {
    Entry::File(VaultFile::new(path))
}

pub fn folder(path: &str, children: Vec<Entry>) -> Entry {
    Entry::Folder(VaultFolder::new(path, children))
}

/// In-memory vault; files without content fail to read.
#[derive(Default)]
pub struct MemoryVault {
    contents: HashMap<String, String>,
}

impl MemoryVault {
    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.contents.insert(path.to_owned(), content.to_owned());
        self
    }
}

#[async_trait]
impl Vault for MemoryVault {
    async fn read(&self, file: &VaultFile) -> Result<String, CopyError> {
        self.contents
            .get(&file.path)
            .cloned()
            .ok_or_else(|| CopyError::FileReadError(file.path.clone(), "not found".to_owned()))
    }
}

#[derive(Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        RecordingClipboard {
            fail: true,
            ..Default::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardWriter for RecordingClipboard {
    async fn write_text(&self, text: String) -> Result<(), CopyError> {
        if self.fail {
            return Err(CopyError::ClipboardWriteError("no display".to_owned()));
        }
        self.writes.lock().unwrap().push(text);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
