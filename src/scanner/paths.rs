//! Normalization of user-supplied path strings.
//!
//! Users reach this tool from cmd.exe, PowerShell and MSYS-style shells, so
//! the same drive can arrive spelled `C:\Users`, `C:/Users` or `/c/Users`.
//! Everything is rewritten to the native drive-rooted form before being
//! resolved to an absolute path.

use std::path::{Path, PathBuf};

use crate::error::{Result, SiftError};

/// Rewrite shell-specific spellings and resolve to an absolute path.
///
/// Never fails: a nonsensical input produces a path that simply fails the
/// downstream directory check.
pub fn normalize(input: &str) -> PathBuf {
    // Drive-letter spellings only exist on the target OS; elsewhere (unit
    // tests, mostly) the input is already in native form.
    let rewritten = if cfg!(windows) {
        rewrite_shell_shape(input)
    } else {
        input.to_string()
    };
    let path = PathBuf::from(&rewritten);
    std::path::absolute(&path).unwrap_or(path)
}

/// Fail with `NotADirectory` unless the path names an existing directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(SiftError::NotADirectory(path.to_path_buf()))
    }
}

/// Pure string-level rewriting of the three input shapes:
/// native paths (slashes flipped), MSYS drive paths (`/d/data` ->
/// `D:\data`), and bare drive specifiers (`C:` -> `C:\`).
fn rewrite_shell_shape(input: &str) -> String {
    let mut text = input.replace('/', "\\");

    // MSYS/Git Bash style: a leading separator followed by a single-letter
    // segment is a drive letter, not a directory.
    if let Some(rest) = text.strip_prefix('\\') {
        let mut segments = rest.split('\\');
        if let Some(first) = segments.next() {
            if first.len() == 1 && first.chars().all(|c| c.is_ascii_alphabetic()) {
                let mut rebuilt = format!("{}:\\", first.to_ascii_uppercase());
                rebuilt.push_str(&segments.collect::<Vec<_>>().join("\\"));
                text = rebuilt;
            }
        }
    }

    // A bare drive specifier refers to the drive's current directory unless
    // it gets its trailing separator.
    if text.len() == 2 && text.ends_with(':') && text.as_bytes()[0].is_ascii_alphabetic() {
        text.push('\\');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn msys_drive_paths_become_drive_rooted() {
        assert_eq!(rewrite_shell_shape("/d/folder"), "D:\\folder");
        assert_eq!(rewrite_shell_shape("/d/folder/sub"), "D:\\folder\\sub");
        assert_eq!(rewrite_shell_shape("/c"), "C:\\");
    }

    #[test]
    fn forward_slashes_flip() {
        assert_eq!(rewrite_shell_shape("C:/Users/foo"), "C:\\Users\\foo");
    }

    #[test]
    fn bare_drive_gains_separator() {
        assert_eq!(rewrite_shell_shape("C:"), "C:\\");
        assert_eq!(rewrite_shell_shape("d:"), "d:\\");
    }

    #[test]
    fn native_shapes_pass_through() {
        assert_eq!(rewrite_shell_shape("D:\\data"), "D:\\data");
        // UNC: the second segment is a server name, not a drive
        assert_eq!(rewrite_shell_shape("\\\\server\\share"), "\\\\server\\share");
    }

    #[test]
    fn normalize_produces_absolute_paths() {
        let normalized = normalize("some_relative_dir");
        assert!(normalized.is_absolute());
    }

    #[test]
    fn ensure_directory_accepts_existing_dirs() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_directory(dir.path()).is_ok());
    }

    #[test]
    fn ensure_directory_rejects_files_and_missing_paths() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(matches!(
            ensure_directory(&file),
            Err(SiftError::NotADirectory(_))
        ));
        assert!(matches!(
            ensure_directory(&dir.path().join("missing")),
            Err(SiftError::NotADirectory(_))
        ));
    }
}
