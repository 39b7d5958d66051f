use crate::vault::VaultFile;
use tracing::{debug, trace};

pub const DEFAULT_IGNORED_EXTENSIONS: &str = "txt, svg";

/// Extension blacklist parsed from a comma-separated setting.
#[derive(Debug, Clone, Default)]
pub struct IgnoredExtensions {
    extensions: Vec<String>,
}

impl IgnoredExtensions {
    pub fn new(setting: &str) -> Self {
        let extensions: Vec<String> = setting
            .split(',')
            .map(|ext| ext.trim().to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        debug!("Using ignored extensions: {:?}", extensions);

        IgnoredExtensions { extensions }
    }

    pub fn should_ignore(&self, file: &VaultFile) -> bool {
        let extension = file.extension.to_lowercase();
        self.extensions.iter().any(|ignored| *ignored == extension)
    }

    /// Drops every file whose extension is blacklisted, keeping order.
    pub fn filter(&self, files: Vec<VaultFile>) -> Vec<VaultFile> {
        files
            .into_iter()
            .filter(|file| {
                let ignore = self.should_ignore(file);
                if ignore {
                    trace!("Ignoring file by extension: {}", file.path);
                }
                !ignore
            })
            .collect()
    }
}
