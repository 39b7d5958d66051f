use crate::errors::CopyError;
use crate::ignore::DEFAULT_IGNORED_EXTENSIONS;
use crate::template::{Token, NEWLINE_ESCAPE, TEMPLATE_RAW, TEMPLATE_STANDARD};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::{debug, info};

/// Where settings live relative to the vault root, unless overridden.
pub const DEFAULT_SETTINGS_PATH: &str = ".obsidian/plugins/copy-files-content/data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub template: String,
    pub ignored_extensions: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            template: TEMPLATE_STANDARD.to_owned(),
            ignored_extensions: DEFAULT_IGNORED_EXTENSIONS.to_owned(),
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Template: {}", self.template)?;
        write!(f, "Ignored extensions: {}", self.ignored_extensions)
    }
}

/// Persisted form: every field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    template: Option<String>,
    ignored_extensions: Option<String>,
}

impl Settings {
    /// Builds settings from persisted data, filling missing fields with defaults.
    ///
    /// Fields of the wrong type, or data that is not an object, are rejected.
    pub fn merge_with_defaults(data: Option<Value>) -> Result<Self, CopyError> {
        let stored = match data {
            None | Some(Value::Null) => StoredSettings::default(),
            Some(value) => serde_json::from_value::<StoredSettings>(value)
                .map_err(|e| CopyError::ConfigError(format!("invalid settings data: {}", e)))?,
        };

        let defaults = Settings::default();
        Ok(Settings {
            template: stored.template.unwrap_or(defaults.template),
            ignored_extensions: stored
                .ignored_extensions
                .unwrap_or(defaults.ignored_extensions),
        })
    }
}

/// Opaque key-value persistence supplied by the host.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load_data(&self) -> Result<Option<Value>, CopyError>;
    async fn save_data(&self, data: Value) -> Result<(), CopyError>;
}

/// Stores settings as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn for_vault(root: &Path) -> Self {
        JsonFileStore::new(root.join(DEFAULT_SETTINGS_PATH))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    async fn load_data(&self) -> Result<Option<Value>, CopyError> {
        if !async_fs::try_exists(&self.path).await? {
            debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(None);
        }
        let raw = async_fs::read_to_string(&self.path).await?;
        let value = serde_json::from_str(&raw).map_err(|e| {
            CopyError::ConfigError(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(Some(value))
    }

    async fn save_data(&self, data: Value) -> Result<(), CopyError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(&data)?;
        async_fs::write(&self.path, raw).await?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Loaded settings plus the store they persist to. Every change is saved
/// before the call returns.
pub struct SettingsEditor<S> {
    settings: Settings,
    store: S,
}

impl<S: SettingsStore> SettingsEditor<S> {
    pub async fn load(store: S) -> Result<Self, CopyError> {
        let settings = Settings::merge_with_defaults(store.load_data().await?)?;
        Ok(SettingsEditor { settings, store })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    pub async fn set_template(&mut self, template: impl Into<String>) -> Result<(), CopyError> {
        self.settings.template = template.into();
        self.save().await
    }

    pub async fn set_ignored_extensions(
        &mut self,
        extensions: impl Into<String>,
    ) -> Result<(), CopyError> {
        self.settings.ignored_extensions = extensions.into();
        self.save().await
    }

    /// Appends a placeholder to the end of the template.
    pub async fn insert_token(&mut self, token: Token) -> Result<(), CopyError> {
        self.settings.template.push_str(token.placeholder());
        self.save().await
    }

    pub async fn insert_newline(&mut self) -> Result<(), CopyError> {
        self.settings.template.push_str(NEWLINE_ESCAPE);
        self.save().await
    }

    pub async fn reset_standard(&mut self) -> Result<(), CopyError> {
        info!("Resetting template to standard");
        self.set_template(TEMPLATE_STANDARD).await
    }

    pub async fn reset_raw(&mut self) -> Result<(), CopyError> {
        info!("Resetting template to raw content");
        self.set_template(TEMPLATE_RAW).await
    }

    async fn save(&self) -> Result<(), CopyError> {
        self.store
            .save_data(serde_json::to_value(&self.settings)?)
            .await
    }
}
