use crate::clipboard::ClipboardWriter;
use crate::commands::CommandId;
use crate::flatten::flatten_selection;
use crate::ignore::IgnoredExtensions;
use crate::notice::{Notice, Notifier};
use crate::settings::Settings;
use crate::template::{has_content_token, render};
use crate::vault::{Entry, Vault, VaultFile};
use futures::future::join_all;
use tracing::{debug, error, info, trace, warn};

/// How a copy invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing left after flattening and filtering; clipboard untouched.
    NoValidFiles,
    /// Clipboard written with the rendered content of `files` files.
    Copied { files: usize, bytes: usize },
    /// No content could be produced or written; clipboard untouched.
    Failed,
}

/// Runs the flatten, filter, read, render and copy pipeline against a host.
pub struct ContentCopier<V, C, N> {
    settings: Settings,
    vault: V,
    clipboard: C,
    notifier: N,
}

impl<V, C, N> ContentCopier<V, C, N>
where
    V: Vault,
    C: ClipboardWriter,
    N: Notifier,
{
    pub fn new(settings: Settings, vault: V, clipboard: C, notifier: N) -> Self {
        ContentCopier {
            settings,
            vault,
            clipboard,
            notifier,
        }
    }

    /// Entry point for the multi-selection menu command.
    pub async fn copy_contents(&self, selection: &[Entry]) -> CopyOutcome {
        self.copy_selected_files(selection).await
    }

    /// Entry point for the single-entry menu command.
    pub async fn copy_content(&self, entry: &Entry) -> CopyOutcome {
        self.copy_selected_files(std::slice::from_ref(entry)).await
    }

    /// Dispatches a menu command to its entry point.
    pub async fn run_command(&self, id: CommandId, selection: &[Entry]) -> CopyOutcome {
        debug!("Running command {}", id);
        match id {
            CommandId::CopyContents => self.copy_contents(selection).await,
            CommandId::CopyContent => match selection {
                [entry] => self.copy_content(entry).await,
                [] => {
                    self.notifier.notify(&Notice::NoValidFiles);
                    CopyOutcome::NoValidFiles
                }
                [entry, ..] => {
                    warn!(
                        "{} takes a single entry; copying {} and ignoring {} more",
                        id,
                        entry.path(),
                        selection.len() - 1
                    );
                    self.copy_content(entry).await
                }
            },
        }
    }

    async fn copy_selected_files(&self, selection: &[Entry]) -> CopyOutcome {
        debug!("Flattening selection of {} entries", selection.len());
        let ignored = IgnoredExtensions::new(&self.settings.ignored_extensions);
        let files = ignored.filter(flatten_selection(selection));

        if files.is_empty() {
            self.notifier.notify(&Notice::NoValidFiles);
            return CopyOutcome::NoValidFiles;
        }

        let template = &self.settings.template;
        if !has_content_token(template) {
            self.notifier.notify(&Notice::MissingContentToken);
        }

        let rendered = join_all(files.iter().map(|file| self.render_file(template, file))).await;

        let mut copied = 0;
        let mut all_content = String::new();
        for segment in rendered.into_iter().flatten() {
            copied += 1;
            all_content.push_str(&segment);
        }
        trace!("Final content length: {}", all_content.len());

        if all_content.is_empty() {
            self.notifier.notify(&Notice::CopyFailed);
            return CopyOutcome::Failed;
        }

        let bytes = all_content.len();
        if let Err(e) = self.clipboard.write_text(all_content).await {
            error!("{}", e);
            self.notifier.notify(&Notice::CopyFailed);
            return CopyOutcome::Failed;
        }

        info!("Copied {} of {} files ({} bytes)", copied, files.len(), bytes);
        self.notifier.notify(&Notice::Copied(copied));
        CopyOutcome::Copied {
            files: copied,
            bytes,
        }
    }

    async fn render_file(&self, template: &str, file: &VaultFile) -> Option<String> {
        trace!("Reading file: {}", file.path);
        match self.vault.read(file).await {
            Ok(content) => Some(render(template, file, &content)),
            Err(e) => {
                warn!("Failed to read {}: {}", file.path, e);
                None
            }
        }
    }
}
