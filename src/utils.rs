use std::path::Path;

/// Converts a path into the `/`-separated form used to identify vault entries.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    let path = path.strip_prefix("./").unwrap_or(path);

    path.to_string_lossy().replace('\\', "/")
}

/// Returns the parent folder of a vault path, or `None` for root-level entries.
pub fn parent_path(path: &str) -> Option<String> {
    path.rsplit_once('/')
        .map(|(parent, _)| parent.to_owned())
        .filter(|parent| !parent.is_empty())
}

/// Splits a file name into its base name and extension.
///
/// The extension is whatever follows the final dot; a leading dot does not
/// start an extension, so `.env` has base name `.env` and no extension.
pub fn split_file_name(name: &str) -> (String, String) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (name[..idx].to_owned(), name[idx + 1..].to_owned()),
        _ => (name.to_owned(), String::new()),
    }
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
