// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::VersionTag;
use crate::error::{Error, Result};

/// The deterministic release name for one board's artifact
///
/// Board identifiers are unique within the matrix, so names never collide.
pub fn artifact_name(prefix: &str, board: &str, version: VersionTag, ext: &str) -> String {
    format!("{}_{}-{}{}", prefix, board, version, ext)
}

/// Move a board's compiled output into the release directory
///
/// Looks for `output_name` at the top of the workspace. If the compile step
/// reported success but left no such file, that is a toolchain contract
/// violation and is reported as `MissingArtifact`, not a compile failure.
///
/// # Return
///
/// The destination path of the collected artifact
pub fn collect(
    workspace: &Path,
    output_name: &str,
    release_dir: &Path,
    dest_name: &str,
    board: &str,
) -> Result<PathBuf> {
    let output = workspace.join(output_name);
    if !output.is_file() {
        return Err(Error::MissingArtifact {
            board: board.to_string(),
            path: output,
        });
    }

    let dest = release_dir.join(dest_name);
    move_file(&output, &dest)?;
    Ok(dest)
}

// Rename when possible; a rename across filesystems fails, so fall back to
// copy and remove.
fn move_file(source: &Path, dest: &Path) -> Result<()> {
    if fs::rename(source, dest).is_ok() {
        return Ok(());
    }

    fs::copy(source, dest).map_err(Error::filesystem(dest))?;
    fs::remove_file(source).map_err(Error::filesystem(source))
}
