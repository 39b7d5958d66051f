use crate::template::Token;
use std::fmt;
use tracing::{info, warn};

/// User-visible feedback from a copy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoValidFiles,
    MissingContentToken,
    Copied(usize),
    CopyFailed,
}

impl Notice {
    pub fn is_warning(&self) -> bool {
        !matches!(self, Notice::Copied(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoValidFiles => write!(f, "No valid files found."),
            Notice::MissingContentToken => write!(
                f,
                "Warning: Template is missing {}. File contents will not be included.",
                Token::Content
            ),
            Notice::Copied(count) => write!(f, "Copied {} files to clipboard!", count),
            Notice::CopyFailed => write!(f, "Failed to copy content."),
        }
    }
}

/// Transient notification surface supplied by the host.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Shows notices through the log output.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        if notice.is_warning() {
            warn!("{}", notice);
        } else {
            info!("{}", notice);
        }
    }
}
