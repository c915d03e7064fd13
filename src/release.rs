// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Recreate the release directory empty
///
/// Any pre-existing directory at `path` is removed recursively first, so
/// prior release output is destroyed irrevocably. Runs before any board is
/// attempted; a filesystem failure here aborts the whole run.
pub fn create_release_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(Error::filesystem(path))?;
    }
    fs::create_dir_all(path).map_err(Error::filesystem(path))
}

/// Ensure the build workspace exists
///
/// An existing workspace is reused as-is, stale contents included; the clean
/// step removes them just before each board builds.
pub fn prepare_workspace(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(Error::filesystem(path))
}

/// Remove every top-level entry of the workspace
///
/// Directories are removed recursively and files directly, so nothing a
/// previous board generated can leak into the current board's build. Symbolic
/// links are removed as links, never followed.
pub fn clean_workspace(path: &Path) -> Result<()> {
    let mut removed = 0;
    for entry_res in fs::read_dir(path).map_err(Error::filesystem(path))? {
        let entry = entry_res.map_err(Error::filesystem(path))?;
        let entry_path = entry.path();

        // DirEntry::file_type does not traverse symlinks, so a link to a
        // directory is deleted as a file.
        let file_type = entry.file_type().map_err(Error::filesystem(&entry_path))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&entry_path).map_err(Error::filesystem(&entry_path))?;
        } else {
            fs::remove_file(&entry_path).map_err(Error::filesystem(&entry_path))?;
        }
        removed += 1;
    }

    log::debug!("cleaned {} entries from {}", removed, path.display());
    Ok(())
}
