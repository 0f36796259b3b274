//! The set of directories a scan never descends into.
//!
//! Two sources: a baseline of OS-designated system directories, and paths the
//! user supplies via `--exclude`, the sidecar ignore file or the config file.
//! Baseline entries are taken on faith; user entries must exist.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostics;

use super::paths;

/// Sidecar ignore file read from the working directory.
pub const IGNORE_FILE_NAME: &str = ".siftignore";

/// Environment variables naming protected system directories. Unset ones are
/// silently skipped.
const PROTECTED_ENV_VARS: &[&str] = &[
    "windir",
    "ProgramFiles",
    "ProgramFiles(x86)",
    "ProgramData",
    "APPDATA",
    "LOCALAPPDATA",
];

/// Well-known protected directories living at the drive root, excluded
/// whether or not they currently exist.
const PROTECTED_ROOT_NAMES: &[&str] = &[
    "$Recycle.Bin",
    "System Volume Information",
    "Config.Msi",
    "Recovery",
];

/// Set of absolute directory paths compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    paths: HashSet<String>,
}

impl ExclusionSet {
    pub fn insert(&mut self, path: &Path) {
        self.paths.insert(key(path));
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(&key(path))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

// Component-wise rebuild drops trailing separators and `.` segments, so the
// same directory always hashes to the same key.
fn key(path: &Path) -> String {
    let normalized: PathBuf = path.components().collect();
    normalized.to_string_lossy().to_lowercase()
}

/// Baseline exclusions for a scan rooted at `scan_root`: the environment-
/// designated system directories plus the well-known protected names at the
/// root of the scanned drive.
pub fn baseline(scan_root: &Path) -> ExclusionSet {
    let mut set = ExclusionSet::default();

    for var in PROTECTED_ENV_VARS {
        if let Some(value) = env::var_os(var) {
            set.insert(Path::new(&value));
        }
    }

    let drive = drive_root(scan_root);
    for name in PROTECTED_ROOT_NAMES {
        set.insert(&drive.join(name));
    }

    set
}

fn drive_root(path: &Path) -> PathBuf {
    path.ancestors()
        .last()
        .unwrap_or(path)
        .to_path_buf()
}

/// Fold raw user-supplied paths into the baseline set.
///
/// Each raw path is normalized; entries that resolve to an existing
/// directory join the set, the rest are dropped with a warning. The second
/// return value carries the normalized accepted paths for user-facing
/// reporting.
pub fn merge(
    mut set: ExclusionSet,
    raw_paths: &[String],
    diag: &dyn Diagnostics,
) -> (ExclusionSet, Vec<PathBuf>) {
    let mut validated = Vec::new();

    for raw in raw_paths {
        let normalized = paths::normalize(raw);
        if normalized.is_dir() {
            set.insert(&normalized);
            validated.push(normalized);
        } else {
            diag.warn(&format!(
                "exclude path '{}' is not a valid directory, ignoring",
                raw
            ));
        }
    }

    (set, validated)
}

/// Raw exclusion paths from the sidecar ignore file: one per non-blank,
/// non-`#` line. A missing or unreadable file contributes nothing.
pub fn read_ignore_file(path: &Path) -> Vec<String> {
    let Ok(contents) = fs::read_to_string(path) else {
        return Vec::new();
    };
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
