use std::{fs, path::Path};

use ignore::WalkBuilder;
#[cfg(feature = "logging")]
use log::trace;

use crate::engine::{
    error::ScaffoldError,
    model::{CopiedEntry, CopySummary, EntryKind},
};

/// Recursively copies the contents of `src` into `dest`.
///
/// `dest` must already exist. Entries come out of the walker depth-first in
/// pre-order, so every directory is created before anything inside it is
/// copied. The first failure aborts the copy and whatever was written so far
/// stays on disk.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<CopySummary, ScaffoldError> {
    let mut summary = CopySummary::default();

    // Templates ship dotfiles and their own .gitignore, so no filtering.
    let walker = WalkBuilder::new(src)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for res in walker {
        let entry = res?;
        if entry.depth() == 0 {
            continue;
        }

        let rel_path = entry
            .path()
            .strip_prefix(src)
            .unwrap_or(entry.path())
            .to_path_buf();
        let target = dest.join(&rel_path);

        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        let copied = if is_dir {
            fs::create_dir(&target)
                .map_err(|e| ScaffoldError::fs("create directory", &target, e))?;
            CopiedEntry {
                relative_path: rel_path,
                kind: EntryKind::Directory,
                bytes: None,
            }
        } else {
            // Anything that is not a directory gets a plain content copy,
            // which follows symlinks.
            let bytes = fs::copy(entry.path(), &target)
                .map_err(|e| ScaffoldError::fs("copy", entry.path(), e))?;
            CopiedEntry {
                relative_path: rel_path,
                kind: EntryKind::File,
                bytes: Some(bytes),
            }
        };

        #[cfg(feature = "logging")]
        trace!("{:?} {}", copied.kind, copied.relative_path.display());
        summary.entries.push(copied);
    }

    Ok(summary)
}
