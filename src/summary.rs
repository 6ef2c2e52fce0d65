//! Directory content summaries
//!
//! A directory is listed exactly once. Its files are reduced to a histogram
//! of file types ("3 py, 1 md") and its subdirectories are returned sorted
//! for the renderer to recurse into.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Number of histogram groups shown before the `...` marker.
pub const MAX_SUMMARY_GROUPS: usize = 4;

/// Bucket for files with no extension that are not otherwise recognized.
pub const NO_EXTENSION: &str = "no-ext";

/// Extensionless files that are named after their own type.
const BUILD_FILE_NAMES: &[&str] = &["makefile", "dockerfile", "jenkinsfile"];

/// An immediate subdirectory scheduled for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdir {
    pub name: String,
    pub path: PathBuf,
}

/// File-type histogram of one directory, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSummary {
    /// Up to `MAX_SUMMARY_GROUPS` (kind, count) pairs, most frequent first
    pub groups: Vec<(String, usize)>,
    /// Whether more distinct kinds existed than were kept
    pub truncated: bool,
}

impl FileSummary {
    /// Build a summary from file names in listing order.
    ///
    /// Ties in frequency keep the order in which each kind was first seen.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for name in names {
            *counts.entry(file_kind(name.as_ref())).or_insert(0) += 1;
        }

        let truncated = counts.len() > MAX_SUMMARY_GROUPS;
        let mut groups: Vec<(String, usize)> = counts.into_iter().collect();
        // sort_by is stable, which preserves first-seen order among equal counts
        groups.sort_by(|a, b| b.1.cmp(&a.1));
        groups.truncate(MAX_SUMMARY_GROUPS);

        Self { groups, truncated }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (kind, count)) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", count, kind)?;
        }
        if self.truncated {
            f.write_str(", ...")?;
        }
        Ok(())
    }
}

/// Result of listing one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirSummary {
    pub files: FileSummary,
    /// Sorted case-insensitively by name
    pub subdirs: Vec<Subdir>,
}

impl DirSummary {
    /// No files and no subdirectories survived filtering.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.subdirs.is_empty()
    }
}

/// Histogram key for a file name.
///
/// The lowercased extension when there is one. Otherwise dotfiles and known
/// build files are keyed by their full name and everything else lands in
/// `NO_EXTENSION`.
pub fn file_kind(name: &str) -> String {
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .filter(|e| !e.is_empty());

    match ext {
        Some(ext) => ext,
        None if name.starts_with('.') => name.to_string(),
        None if BUILD_FILE_NAMES.contains(&name.to_lowercase().as_str()) => name.to_string(),
        None => NO_EXTENSION.to_string(),
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List `path` once and summarize it.
///
/// Dot-prefixed entries are skipped unless `show_hidden` is set. Entries
/// that are neither files nor directories after following symlinks (broken
/// links, sockets) are ignored. An error means the directory itself could
/// not be listed.
pub fn summarize(path: &Path, show_hidden: bool) -> io::Result<DirSummary> {
    let mut file_names = Vec::new();
    let mut subdirs = Vec::new();

    for entry in std::fs::read_dir(path)?.filter_map(|e| e.ok()) {
        let name = entry.file_name().to_string_lossy().to_string();
        if !show_hidden && is_hidden(&name) {
            continue;
        }

        let entry_path = entry.path();
        if entry_path.is_dir() {
            subdirs.push(Subdir {
                name,
                path: entry_path,
            });
        } else if entry_path.is_file() {
            file_names.push(name);
        }
    }

    // read_dir order is filesystem-dependent; fix it before counting so
    // histogram ties come out the same on every run
    file_names.sort();
    subdirs.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(DirSummary {
        files: FileSummary::from_names(&file_names),
        subdirs,
    })
}
