use crate::vault::{Entry, VaultFile};
use std::collections::HashSet;
use tracing::trace;

/// Expands a selection into the files it covers, depth-first.
///
/// Order of first appearance is kept; a file reached again later, through a
/// folder or by direct selection, is dropped.
pub fn flatten_selection(selection: &[Entry]) -> Vec<VaultFile> {
    let mut visited = HashSet::new();
    let mut files = Vec::new();
    collect_files(selection, &mut visited, &mut files);
    files
}

fn collect_files<'a>(
    entries: &'a [Entry],
    visited: &mut HashSet<&'a str>,
    files: &mut Vec<VaultFile>,
) {
    for entry in entries {
        match entry {
            Entry::File(file) => {
                if visited.insert(file.path.as_str()) {
                    files.push(file.clone());
                } else {
                    trace!("Skipping duplicate file: {}", file.path);
                }
            }
            Entry::Folder(folder) => collect_files(&folder.children, visited, files),
        }
    }
}
