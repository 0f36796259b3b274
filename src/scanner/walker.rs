//! The core walk: a single-threaded top-down traversal that prunes excluded
//! subtrees before descending and collects files at or above the size
//! threshold.

use std::path::Path;
use walkdir::WalkDir;

use crate::diagnostics::Diagnostics;
use crate::platform::AttributeProbe;
use crate::progress::ProgressSink;

use super::entry::{FileRecord, ScanRequest};
use super::exclusions::ExclusionSet;

/// Walks a directory tree for one [`ScanRequest`].
///
/// A directory is pruned, and never descended into, when its name starts
/// with a dot, its path is in the exclusion set, its hidden attribute is
/// set, or stat-ing it fails. Files are skipped on dot-prefixed names,
/// hidden/system attributes, or any per-entry I/O error. No single
/// inaccessible entry ever aborts the walk.
pub struct TreeScanner<'a> {
    probe: &'a dyn AttributeProbe,
    diag: &'a dyn Diagnostics,
    progress: &'a dyn ProgressSink,
}

impl<'a> TreeScanner<'a> {
    pub fn new(
        probe: &'a dyn AttributeProbe,
        diag: &'a dyn Diagnostics,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self {
            probe,
            diag,
            progress,
        }
    }

    /// Collect every qualifying file under the request's root.
    ///
    /// The returned list has no defined ordering; ranking happens
    /// downstream.
    pub fn scan(&self, request: &ScanRequest) -> Vec<FileRecord> {
        let mut records = Vec::new();

        let walker = WalkDir::new(&request.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| self.keep(entry, &request.excluded));

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    self.diag.warn(&format!("skipping unreadable entry: {err}"));
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                self.progress.visit_dir(entry.path());
                continue;
            }
            if !entry.file_type().is_file() {
                // Symlinks and other special entries are not walked into
                // and never qualify.
                continue;
            }

            if let Some(record) = self.inspect_file(entry.path(), request.min_size_bytes) {
                records.push(record);
            }
        }

        self.progress.clear();
        records
    }

    /// Prune decision, applied to every entry below the root before it is
    /// yielded. Pruned directories contribute nothing to the result.
    fn keep(&self, entry: &walkdir::DirEntry, excluded: &ExclusionSet) -> bool {
        if entry.depth() == 0 {
            return true;
        }

        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            return false;
        }
        if !entry.file_type().is_dir() {
            return true;
        }

        if excluded.contains(entry.path()) {
            self.diag
                .debug(&format!("pruned excluded directory {}", entry.path().display()));
            return false;
        }

        match self.probe.is_hidden(entry.path()) {
            Ok(hidden) => !hidden,
            Err(err) => {
                // Inaccessible counts as excluded.
                self.diag.warn(&format!(
                    "not descending into {}: {err}",
                    entry.path().display()
                ));
                false
            }
        }
    }

    /// Per-file filter: attribute bits, then the size threshold. Any error
    /// skips the file and the walk moves on.
    fn inspect_file(&self, path: &Path, min_size_bytes: u64) -> Option<FileRecord> {
        let flags = match self.probe.flags(path) {
            Ok(flags) => flags,
            Err(err) => {
                self.diag
                    .debug(&format!("skipping file {}: {err}", path.display()));
                return None;
            }
        };
        if flags.hidden || flags.system {
            return None;
        }

        let size = match std::fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                self.diag
                    .debug(&format!("skipping file {}: {err}", path.display()));
                return None;
            }
        };

        (size >= min_size_bytes).then(|| FileRecord {
            path: path.to_path_buf(),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingDiagnostics, NullDiagnostics};
    use crate::error::AccessError;
    use crate::platform::{EntryFlags, NativeProbe};
    use crate::progress::NullProgress;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Probe with scripted attribute bits and failures, for exercising the
    /// prune rules on hosts without hidden/system attributes.
    #[derive(Debug, Default)]
    struct ScriptedProbe {
        hidden: Vec<PathBuf>,
        system: Vec<PathBuf>,
        failing: Vec<PathBuf>,
    }

    impl AttributeProbe for ScriptedProbe {
        fn flags(&self, path: &Path) -> Result<EntryFlags, AccessError> {
            if self.failing.iter().any(|p| p == path) {
                return Err(AccessError::PermissionDenied);
            }
            Ok(EntryFlags {
                hidden: self.hidden.iter().any(|p| p == path),
                system: self.system.iter().any(|p| p == path),
            })
        }
    }

    fn write_file(path: &Path, bytes: usize) {
        let mut file = File::create(path).unwrap();
        file.write_all(&vec![b'x'; bytes]).unwrap();
    }

    fn request(root: &Path, min_size: u64) -> ScanRequest {
        ScanRequest {
            root: root.to_path_buf(),
            min_size_bytes: min_size,
            excluded: ExclusionSet::default(),
        }
    }

    fn scan_with(probe: &dyn AttributeProbe, request: &ScanRequest) -> Vec<FileRecord> {
        TreeScanner::new(probe, &NullDiagnostics, &NullProgress).scan(request)
    }

    #[test]
    fn collects_only_files_at_or_above_the_threshold() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("small.bin"), 10);
        write_file(&dir.path().join("medium.bin"), 60);
        write_file(&dir.path().join("large.bin"), 200);

        let records = scan_with(&NativeProbe, &request(dir.path(), 50));

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.size >= 50));
        let mut names: Vec<_> = records
            .iter()
            .map(|r| r.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["large.bin", "medium.bin"]);
    }

    #[test]
    fn exact_threshold_size_qualifies() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("exact.bin"), 50);

        let records = scan_with(&NativeProbe, &request(dir.path(), 50));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn dot_directories_are_never_descended_into() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        write_file(&dir.path().join(".git/huge.pack"), 500);
        write_file(&dir.path().join("kept.bin"), 500);

        let records = scan_with(&NativeProbe, &request(dir.path(), 50));

        assert_eq!(records.len(), 1);
        assert!(records[0].path.ends_with("kept.bin"));
    }

    #[test]
    fn dot_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join(".cache"), 500);

        let records = scan_with(&NativeProbe, &request(dir.path(), 50));
        assert!(records.is_empty());
    }

    #[test]
    fn excluded_directories_are_pruned_case_insensitively() {
        let dir = TempDir::new().unwrap();
        let skipped = dir.path().join("skipme");
        fs::create_dir(&skipped).unwrap();
        write_file(&skipped.join("huge.bin"), 500);
        write_file(&dir.path().join("kept.bin"), 500);

        let mut req = request(dir.path(), 50);
        // Spelled differently from the on-disk name
        let spelled = skipped.to_string_lossy().to_uppercase();
        req.excluded.insert(Path::new(&spelled));

        let records = scan_with(&NativeProbe, &req);

        assert_eq!(records.len(), 1);
        assert!(records[0].path.ends_with("kept.bin"));
    }

    #[test]
    fn hidden_attribute_prunes_a_directory() {
        let dir = TempDir::new().unwrap();
        let shy = dir.path().join("shy");
        fs::create_dir(&shy).unwrap();
        write_file(&shy.join("huge.bin"), 500);
        write_file(&dir.path().join("kept.bin"), 500);

        let probe = ScriptedProbe {
            hidden: vec![shy],
            ..Default::default()
        };
        let records = scan_with(&probe, &request(dir.path(), 50));

        assert_eq!(records.len(), 1);
        assert!(records[0].path.ends_with("kept.bin"));
    }

    #[test]
    fn hidden_or_system_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let ghost = dir.path().join("ghost.bin");
        let driver = dir.path().join("driver.sys");
        write_file(&ghost, 500);
        write_file(&driver, 500);
        write_file(&dir.path().join("kept.bin"), 500);

        let probe = ScriptedProbe {
            hidden: vec![ghost],
            system: vec![driver],
            ..Default::default()
        };
        let records = scan_with(&probe, &request(dir.path(), 50));

        assert_eq!(records.len(), 1);
        assert!(records[0].path.ends_with("kept.bin"));
    }

    #[test]
    fn inaccessible_directory_does_not_stop_siblings() {
        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        write_file(&locked.join("unreachable.bin"), 500);
        let sibling = dir.path().join("open");
        fs::create_dir(&sibling).unwrap();
        write_file(&sibling.join("found.bin"), 500);

        let probe = ScriptedProbe {
            failing: vec![locked],
            ..Default::default()
        };
        let diag = CollectingDiagnostics::default();
        let records =
            TreeScanner::new(&probe, &diag, &NullProgress).scan(&request(dir.path(), 50));

        assert_eq!(records.len(), 1);
        assert!(records[0].path.ends_with("found.bin"));
        // The prune is logged, not fatal
        assert!(diag
            .recorded("warn")
            .iter()
            .any(|m| m.contains("not descending")));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_enumeration_does_not_abort_the_walk() {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        write_file(&dir.path().join("found.bin"), 500);
        fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

        let records = scan_with(&NativeProbe, &request(dir.path(), 50));

        fs::set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].path.ends_with("found.bin"));
    }

    #[test]
    fn nested_directories_are_walked() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("a/b/c");
        fs::create_dir_all(&deep).unwrap();
        write_file(&deep.join("deep.bin"), 500);

        let records = scan_with(&NativeProbe, &request(dir.path(), 50));

        assert_eq!(records.len(), 1);
        assert!(records[0].path.ends_with("a/b/c/deep.bin"));
    }

    #[test]
    fn progress_reports_each_directory_entered() {
        use crate::progress::ProgressSink;
        use std::sync::Mutex;

        #[derive(Default)]
        struct RecordingProgress {
            dirs: Mutex<Vec<PathBuf>>,
            cleared: Mutex<bool>,
        }
        impl ProgressSink for RecordingProgress {
            fn visit_dir(&self, path: &Path) {
                self.dirs.lock().unwrap().push(path.to_path_buf());
            }
            fn clear(&self) {
                *self.cleared.lock().unwrap() = true;
            }
        }

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let progress = RecordingProgress::default();
        TreeScanner::new(&NativeProbe, &NullDiagnostics, &progress)
            .scan(&request(dir.path(), 0));

        let dirs = progress.dirs.lock().unwrap();
        assert!(dirs.iter().any(|p| p == dir.path()));
        assert!(dirs.iter().any(|p| p.ends_with("sub")));
        assert!(*progress.cleared.lock().unwrap());
    }
}
