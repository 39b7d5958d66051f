use crate::errors::CopyError;
use crate::vault::VaultFile;
use std::fmt;
use std::str::FromStr;

/// Two-character escape in templates that renders as a newline.
pub const NEWLINE_ESCAPE: &str = "\\n";

/// Header, content, then a horizontal rule.
pub const TEMPLATE_STANDARD: &str = "**File:** {{path}}\\n\\n{{content}}\\n\\n---\\n\\n";

/// Content only.
pub const TEMPLATE_RAW: &str = "{{content}}\\n\\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Content,
    Path,
    Folder,
    FileName,
    FileExt,
}

impl Token {
    pub const ALL: [Token; 5] = [
        Token::Content,
        Token::Path,
        Token::Folder,
        Token::FileName,
        Token::FileExt,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            Token::Content => "{{content}}",
            Token::Path => "{{path}}",
            Token::Folder => "{{folder}}",
            Token::FileName => "{{fileName}}",
            Token::FileExt => "{{fileExt}}",
        }
    }

    fn name(self) -> &'static str {
        let placeholder = self.placeholder();
        &placeholder[2..placeholder.len() - 2]
    }

    fn value<'a>(self, file: &'a VaultFile, content: &'a str) -> &'a str {
        match self {
            Token::Content => content,
            Token::Path => &file.path,
            Token::Folder => file.folder(),
            Token::FileName => &file.basename,
            Token::FileExt => &file.extension,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

impl FromStr for Token {
    type Err = CopyError;

    /// Accepts either the bare name (`fileName`) or the placeholder (`{{fileName}}`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Token::ALL
            .into_iter()
            .find(|token| token.name() == s || token.placeholder() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Token::ALL.iter().map(|t| t.name()).collect();
                CopyError::ConfigError(format!(
                    "unknown template token '{}', expected one of: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

pub fn has_content_token(template: &str) -> bool {
    template.contains(Token::Content.placeholder())
}

/// Renders the template for one file.
///
/// Placeholders and newline escapes are substituted in a single left-to-right
/// pass, so text coming from the file (its content or its path) is inserted
/// verbatim and never re-scanned.
pub fn render(template: &str, file: &VaultFile, content: &str) -> String {
    let mut output = String::with_capacity(template.len() + content.len());
    let mut rest = template;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '{' || c == '\\') {
            None => {
                output.push_str(rest);
                break;
            }
            Some(idx) if idx > 0 => {
                output.push_str(&rest[..idx]);
                rest = &rest[idx..];
                continue;
            }
            Some(_) => {}
        }

        if let Some(tail) = rest.strip_prefix(NEWLINE_ESCAPE) {
            output.push('\n');
            rest = tail;
        } else if let Some((token, tail)) = Token::ALL.into_iter().find_map(|token| {
            rest.strip_prefix(token.placeholder())
                .map(|tail| (token, tail))
        }) {
            output.push_str(token.value(file, content));
            rest = tail;
        } else {
            // Lone '{' or '\' that starts nothing we recognise; both are one byte.
            output.push_str(&rest[..1]);
            rest = &rest[1..];
        }
    }

    output
}
