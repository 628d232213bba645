//! Contains the core data structures for the application.

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry materialized in the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedEntry {
    /// Path relative to both the template root and the target root.
    pub relative_path: PathBuf,
    pub kind: EntryKind,
    /// Bytes written; `None` for directories.
    pub bytes: Option<u64>,
}

/// Everything a copy pass produced, in the order it was produced.
#[derive(Debug, Clone, Default)]
pub struct CopySummary {
    pub entries: Vec<CopiedEntry>,
}

impl CopySummary {
    pub fn files(&self) -> usize {
        self.count(EntryKind::File)
    }

    pub fn directories(&self) -> usize {
        self.count(EntryKind::Directory)
    }

    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().filter_map(|e| e.bytes).sum()
    }

    fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

/// What a successful run hands back to the UI layer.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub target: PathBuf,
    pub copied: CopySummary,
}
