use crate::errors::CopyError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Copy every file covered by a multi-entry selection.
    CopyContents,
    /// Copy a single file, or every file inside a single folder.
    CopyContent,
}

impl CommandId {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandId::CopyContents => "copy-contents",
            CommandId::CopyContent => "copy-content",
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = CopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MENU_COMMANDS
            .iter()
            .map(|command| command.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CopyError::UnknownCommand(s.to_owned()))
    }
}

/// A context-menu item the host shows for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCommand {
    pub id: CommandId,
    pub title: &'static str,
    pub icon: &'static str,
}

pub static MENU_COMMANDS: [MenuCommand; 2] = [
    MenuCommand {
        id: CommandId::CopyContents,
        title: "Copy contents",
        icon: "clipboard-copy",
    },
    MenuCommand {
        id: CommandId::CopyContent,
        title: "Copy content",
        icon: "clipboard-copy",
    },
];
