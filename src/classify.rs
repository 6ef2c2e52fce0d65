//! Stop-directory classification
//!
//! Recognizes directories whose contents are tooling output rather than
//! project structure: dependency caches, version-control internals, IDE
//! folders, build outputs and virtual environments. The renderer prints a
//! single labelled line for such a directory and never descends into it.

use std::path::Path;

/// Outcome of classifying a single directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Ordinary directory, eligible for recursion
    Traverse,
    /// Stop directory with its display label
    Stop(String),
}

impl Classification {
    pub fn label(&self) -> Option<&str> {
        match self {
            Classification::Stop(label) => Some(label),
            Classification::Traverse => None,
        }
    }
}

/// Basename matched exactly against a directory's own name.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DirRule {
    name: String,
    label: String,
}

/// File whose existence inside a directory marks it as an environment root.
/// `relative` may contain `/` separators (e.g. `bin/activate`).
#[derive(Debug, Clone, PartialEq, Eq)]
struct MarkerRule {
    relative: String,
    label: String,
}

const DEFAULT_DIR_RULES: &[(&str, &str)] = &[
    ("node_modules", "📦 Node.js Modules"),
    (".git", "Git Repository"),
    (".hg", "Mercurial Repository"),
    (".svn", "SVN Repository"),
    ("__pycache__", "🐍 Python Cache"),
    (".pytest_cache", "🧪 Pytest Cache"),
    (".mypy_cache", "Type Checker Cache"),
    (".tox", "Tox Environment"),
    (".idea", "IntelliJ/PyCharm Config"),
    (".vscode", "VSCode Config"),
    ("target", "🦀 Rust Target/Build"),
    ("build", "🔨 Build Directory"),
    ("dist", "📦 Distribution/Output"),
    ("site-packages", "🐍 Python Site Packages"),
];

const DEFAULT_MARKER_RULES: &[(&str, &str)] = &[
    ("pyvenv.cfg", "🐍 Python Virtual Env"),
    ("bin/activate", "🐍 Python Virtual Env (Unix)"),
    ("Scripts/activate", "🐍 Python Virtual Env (Win)"),
];

/// The classification tables for one run.
///
/// Built once before the walk and only read during it. `Default` carries
/// the built-in tables; `disabled()` carries none, so every directory is
/// traversed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRules {
    dirs: Vec<DirRule>,
    markers: Vec<MarkerRule>,
}

impl Default for StopRules {
    fn default() -> Self {
        let rules = DEFAULT_DIR_RULES
            .iter()
            .fold(Self::disabled(), |rules, (name, label)| {
                rules.with_dir_rule(*name, *label)
            });
        DEFAULT_MARKER_RULES
            .iter()
            .fold(rules, |rules, (relative, label)| {
                rules.with_marker_rule(*relative, *label)
            })
    }
}

impl StopRules {
    /// Rules that never stop anything.
    pub fn disabled() -> Self {
        Self {
            dirs: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Add a basename rule. Later rules never override earlier ones.
    pub fn with_dir_rule(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.dirs.push(DirRule {
            name: name.into(),
            label: label.into(),
        });
        self
    }

    /// Add a marker-file rule, checked in insertion order.
    pub fn with_marker_rule(
        mut self,
        relative: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.markers.push(MarkerRule {
            relative: relative.into(),
            label: label.into(),
        });
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.dirs.is_empty() && self.markers.is_empty()
    }

    /// Decide whether `path` is a stop directory.
    ///
    /// Name rules are consulted first; marker checks only run when no name
    /// rule matched. They are plain existence checks, so an unreadable
    /// directory simply yields no marker.
    pub fn classify(&self, path: &Path) -> Classification {
        if let Some(name) = path.file_name().map(|n| n.to_string_lossy()) {
            if let Some(rule) = self.dirs.iter().find(|rule| rule.name == *name) {
                return Classification::Stop(rule.label.clone());
            }
        }

        self.markers
            .iter()
            .find(|rule| marker_exists(path, &rule.relative))
            .map(|rule| Classification::Stop(rule.label.clone()))
            .unwrap_or(Classification::Traverse)
    }
}

fn marker_exists(dir: &Path, relative: &str) -> bool {
    let candidate = relative
        .split('/')
        .fold(dir.to_path_buf(), |path, part| path.join(part));
    // exists() maps permission errors to false
    candidate.exists()
}
