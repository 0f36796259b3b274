//! File-attribute capability.
//!
//! The walker decides what to prune from the hidden/system bits, but never
//! reads them itself; it goes through [`AttributeProbe`] so tests can script
//! attributes on platforms that don't have them.

use std::fs;
use std::path::Path;

use crate::error::AccessError;

/// Windows per-entry attribute bits, as reported by `GetFileAttributes`.
pub const FILE_ATTRIBUTE_HIDDEN: u32 = 0x02;
pub const FILE_ATTRIBUTE_SYSTEM: u32 = 0x04;

/// Attribute bits for one filesystem entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFlags {
    pub hidden: bool,
    pub system: bool,
}

/// Looks up the hidden/system attributes of a path.
pub trait AttributeProbe {
    /// Stat the entry once and report both bits.
    fn flags(&self, path: &Path) -> Result<EntryFlags, AccessError>;

    fn is_hidden(&self, path: &Path) -> Result<bool, AccessError> {
        Ok(self.flags(path)?.hidden)
    }

    fn is_system(&self, path: &Path) -> Result<bool, AccessError> {
        Ok(self.flags(path)?.system)
    }
}

/// Probe backed by the host OS's metadata.
#[derive(Debug, Default)]
pub struct NativeProbe;

#[cfg(windows)]
impl AttributeProbe for NativeProbe {
    fn flags(&self, path: &Path) -> Result<EntryFlags, AccessError> {
        use std::os::windows::fs::MetadataExt;

        let metadata = fs::metadata(path)?;
        let attributes = metadata.file_attributes();
        Ok(EntryFlags {
            hidden: attributes & FILE_ATTRIBUTE_HIDDEN != 0,
            system: attributes & FILE_ATTRIBUTE_SYSTEM != 0,
        })
    }
}

#[cfg(not(windows))]
impl AttributeProbe for NativeProbe {
    // Still stats the entry so permission failures surface as AccessError
    // and prune it, matching the behavior on the target OS.
    fn flags(&self, path: &Path) -> Result<EntryFlags, AccessError> {
        fs::metadata(path)?;
        Ok(EntryFlags::default())
    }
}
