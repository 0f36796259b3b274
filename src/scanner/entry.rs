use serde::Serialize;
use std::path::PathBuf;

use super::exclusions::ExclusionSet;

/// A file that met the size threshold during a scan.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path of the file.
    pub path: PathBuf,

    /// Size in bytes at the time the file was visited.
    pub size: u64,
}

/// Everything one scan invocation needs, fixed before the walk starts and
/// read-only from then on.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Absolute directory the traversal starts from.
    pub root: PathBuf,

    /// Files smaller than this many bytes are ignored.
    pub min_size_bytes: u64,

    /// Directories that are never descended into.
    pub excluded: ExclusionSet,
}
