use crate::EXCLUDED_DIRS;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// One entry discovered during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Depth below the root; the root itself is 0.
    pub depth: usize,
    /// File or directory name (the root keeps its full given path).
    pub name: String,
    /// Whether this entry is a directory.
    pub is_dir: bool,
}

/// Traversal filter: prunes excluded directories (subtree and all) and skips
/// hidden files. Hidden directories other than the excluded ones are still
/// traversed. The root entry always passes.
fn is_visible(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }

    let name = entry.file_name().to_string_lossy();
    if entry.file_type().is_dir() {
        if EXCLUDED_DIRS.contains(&name.as_ref()) {
            debug!(dir = %name, "pruning excluded directory");
            return false;
        }
        true
    } else {
        !name.starts_with('.')
    }
}

/// Returns a lazy, depth-first, pre-order iterator over the tree rooted at
/// `root`. Within each directory, files sort before subdirectories so that a
/// directory's own files are emitted before any of its subtrees.
///
/// Traversal errors (unreadable directories and the like) are yielded as
/// items, not swallowed; callers decide whether to propagate.
pub fn entries(root: &Path) -> impl Iterator<Item = walkdir::Result<TreeEntry>> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by(|a, b| {
            let a_dir = a.file_type().is_dir();
            let b_dir = b.file_type().is_dir();
            a_dir
                .cmp(&b_dir)
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(is_visible)
        .map(|res| {
            res.map(|entry| TreeEntry {
                depth: entry.depth(),
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type().is_dir(),
            })
        })
}

/// Renders the tree rooted at `root` to `out`, one entry per line.
///
/// Directories print as `name/` indented by two spaces per depth level; files
/// print at their own depth, which puts them one level deeper than the
/// directory that contains them.
///
/// # Errors
/// Returns an error if traversal fails or the sink rejects a write.
pub fn print_tree(root: &Path, out: &mut impl Write) -> Result<()> {
    for entry in entries(root) {
        let entry = entry?;
        let indent = "  ".repeat(entry.depth);
        if entry.is_dir {
            writeln!(out, "{indent}{}/", entry.name)?;
        } else {
            writeln!(out, "{indent}{}", entry.name)?;
        }
    }
    Ok(())
}
