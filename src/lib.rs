pub mod clipboard;
pub mod commands;
pub mod copy;
pub mod errors;
pub mod flatten;
pub mod ignore;
pub mod logger;
pub mod notice;
pub mod settings;
pub mod template;
pub mod utils;
pub mod vault;

pub use commands::{CommandId, MenuCommand, MENU_COMMANDS};
pub use copy::{ContentCopier, CopyOutcome};
pub use errors::CopyError;
pub use ignore::IgnoredExtensions;
pub use settings::{Settings, SettingsEditor};
pub use vault::{Entry, FsVault, Vault, VaultFile, VaultFolder};
