use crate::errors::CopyError;
use crate::utils::{is_hidden, normalize_path, parent_path, split_file_name};
use async_trait::async_trait;
use glob::MatchOptions;
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// A file inside the vault. Content is never held here; it is read on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultFile {
    pub path: String,
    pub parent: Option<String>,
    pub basename: String,
    pub extension: String,
}

impl VaultFile {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path);
        let (basename, extension) = split_file_name(name);
        VaultFile {
            parent: parent_path(&path),
            basename,
            extension,
            path,
        }
    }

    /// Parent folder path, or the empty string for files at the vault root.
    pub fn folder(&self) -> &str {
        self.parent.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultFolder {
    pub path: String,
    pub children: Vec<Entry>,
}

impl VaultFolder {
    pub fn new(path: impl Into<String>, children: Vec<Entry>) -> Self {
        VaultFolder {
            path: path.into(),
            children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File(VaultFile),
    Folder(VaultFolder),
}

impl Entry {
    pub fn path(&self) -> &str {
        match self {
            Entry::File(file) => &file.path,
            Entry::Folder(folder) => &folder.path,
        }
    }
}

#[async_trait]
pub trait Vault: Send + Sync {
    async fn read(&self, file: &VaultFile) -> Result<String, CopyError>;
}

/// A vault backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, CopyError> {
        let root = root.as_ref();
        let canonical = std::fs::canonicalize(root)
            .map_err(|e| CopyError::VaultError(format!("{}: {}", root.display(), e)))?;
        if !canonical.is_dir() {
            return Err(CopyError::VaultError(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        debug!("Opened vault at {}", canonical.display());
        Ok(FsVault { root: canonical })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves selection arguments into vault entries, in argument order.
    ///
    /// Each argument is either a path or a glob pattern relative to the vault
    /// root. Wildcards never match hidden names. Arguments that match nothing,
    /// or are not valid patterns, are skipped with a warning.
    pub fn select(&self, patterns: &[String]) -> Result<Vec<Entry>, CopyError> {
        let mut entries = Vec::new();
        for pattern in patterns {
            let normalized = normalize_path(pattern);
            let candidate = self.root.join(&normalized);

            if candidate.exists() {
                entries.push(self.entry_at(&candidate)?);
                continue;
            }

            let full_pattern = if Path::new(&normalized).is_absolute() {
                normalized.clone()
            } else {
                format!(
                    "{}/{}",
                    glob::Pattern::escape(&normalize_path(&self.root)),
                    normalized
                )
            };

            let options = MatchOptions {
                require_literal_leading_dot: true,
                ..MatchOptions::new()
            };
            let paths = match glob::glob_with(&full_pattern, options) {
                Ok(paths) => paths,
                Err(e) => {
                    warn!("Skipping {}: {}", pattern, CopyError::from(e));
                    continue;
                }
            };
            let mut matched = false;
            for path in paths {
                match path {
                    Ok(path) => {
                        matched = true;
                        entries.push(self.entry_at(&path)?);
                    }
                    Err(e) => warn!("Error processing pattern {}: {:?}", pattern, e),
                }
            }
            if !matched {
                warn!("No vault entries match {}", pattern);
            }
        }
        Ok(entries)
    }

    /// Builds the entry for a path on disk, loading folder contents recursively.
    pub fn entry_at(&self, path: &Path) -> Result<Entry, CopyError> {
        let canonical = std::fs::canonicalize(path)
            .map_err(|e| CopyError::VaultError(format!("{}: {}", path.display(), e)))?;
        let relative = canonical
            .strip_prefix(&self.root)
            .map_err(|_| CopyError::OutsideVault(path.display().to_string()))?;
        let relative = normalize_path(relative);

        if canonical.is_dir() {
            Ok(Entry::Folder(self.load_folder(&canonical, relative)?))
        } else {
            Ok(Entry::File(VaultFile::new(relative)))
        }
    }

    fn load_folder(&self, dir: &Path, relative: String) -> Result<VaultFolder, CopyError> {
        trace!("Listing folder: {}", dir.display());
        let mut children = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy();
            if is_hidden(&name) {
                continue;
            }

            let child_path = if relative.is_empty() {
                name.into_owned()
            } else {
                format!("{}/{}", relative, name)
            };

            if entry.file_type().is_dir() {
                children.push(Entry::Folder(self.load_folder(entry.path(), child_path)?));
            } else if entry.file_type().is_file() {
                children.push(Entry::File(VaultFile::new(child_path)));
            }
        }

        Ok(VaultFolder::new(relative, children))
    }
}

#[async_trait]
impl Vault for FsVault {
    async fn read(&self, file: &VaultFile) -> Result<String, CopyError> {
        async_fs::read_to_string(self.root.join(&file.path))
            .await
            .map_err(|err| CopyError::FileReadError(file.path.clone(), err.to_string()))
    }
}
