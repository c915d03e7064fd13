// SPDX-License-Identifier: GPL-3.0-only

use std::io;
use std::path::PathBuf;

/// The failure taxonomy of a release run
///
/// Every variant is fatal to the whole matrix: the run stops at the first
/// failing board and the remaining boards are never attempted. Artifacts
/// already collected for earlier boards are left in the release directory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A directory create/remove or artifact move failed
    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configure step did not succeed for a board
    #[error("configure step failed for board {board}: {diagnostic}")]
    Configure { board: String, diagnostic: String },

    /// The compile step did not succeed for a board
    #[error("compile step failed for board {board}: {diagnostic}")]
    Compile { board: String, diagnostic: String },

    /// The compile step reported success but its expected output is absent
    #[error("compile step for board {board} reported success but {} was not produced", .path.display())]
    MissingArtifact { board: String, path: PathBuf },

    /// The build configuration could not be parsed or is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on
    pub fn filesystem<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> Error {
        let path = path.into();
        move |source| Error::Filesystem { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
