// SPDX-License-Identifier: GPL-3.0-only

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::boards::BOARDS;
use crate::error::{Error, Result};

/// The firmware version appended to every artifact name
///
/// Fixed for the whole run; rendered as `major.minor`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct VersionTag {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A release build configuration
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// The board identifiers to build, in order
    pub boards: Vec<String>,
    /// The firmware version for this release
    pub version: VersionTag,
    /// The leading component of every release artifact name
    pub artifact_prefix: String,
    /// The fixed file name the compile step leaves in the workspace.
    /// The release artifact extension is derived from it.
    pub output_name: String,
    /// The directory collected artifacts are placed in, recreated each run
    pub release_dir: PathBuf,
    /// The shared build workspace, cleared before each board
    pub workspace_dir: PathBuf,
    /// The cmake source directory; a relative path is taken from the shared
    /// workspace directory and anchored to an absolute path at startup
    pub source_dir: PathBuf,
    /// The SDK root used when PICO_SDK_PATH is not set; relative paths are
    /// anchored like `source_dir`
    pub sdk_default: String,
    /// Where to write the release manifest, or None to skip it
    pub manifest_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            boards: BOARDS.iter().map(|board| board.to_string()).collect(),
            version: VersionTag { major: 6, minor: 0 },
            artifact_prefix: "pico_fido".to_string(),
            output_name: "pico_fido.uf2".to_string(),
            release_dir: PathBuf::from("release"),
            workspace_dir: PathBuf::from("build_release"),
            source_dir: PathBuf::from(".."),
            sdk_default: "../../pico-sdk".to_string(),
            manifest_path: Some(PathBuf::from("manifest.json")),
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file
    ///
    /// Fields absent from the file keep their default values.
    ///
    /// # Errors
    ///
    /// `Error::Filesystem` if the file cannot be read, `Error::Config` if it
    /// is not valid JSON for this structure or the board list breaks the
    /// matrix invariants
    pub fn load(path: &str) -> Result<Config> {
        let string = fs::read_to_string(path).map_err(Error::filesystem(path))?;
        let config = serde_json::from_str::<Config>(&string)
            .map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    // Board identifiers must be unique and non-empty: artifact names are a
    // function of the board, so a duplicate would overwrite an earlier
    // board's artifact in the release directory.
    fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for board in &self.boards {
            if board.is_empty() {
                return Err(Error::Config("empty board identifier".to_string()));
            }
            if !seen.insert(board.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate board identifier: {}",
                    board
                )));
            }
        }
        Ok(())
    }

    /// The release artifact extension, taken from the compiled output name
    pub fn artifact_ext(&self) -> String {
        match self.output_name.rfind('.') {
            Some(dot) => self.output_name[dot..].to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{Config, VersionTag};
    use crate::error::Error;

    #[test]
    fn test_version_display() {
        let version = VersionTag { major: 6, minor: 0 };
        assert_eq!(version.to_string(), "6.0");
    }

    #[test]
    fn test_default_matches_board_matrix() {
        let config = Config::default();
        assert_eq!(config.boards.len(), crate::boards::BOARDS.len());
        assert_eq!(config.artifact_ext(), ".uf2");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "boards": ["pico"], "version": { "major": 7, "minor": 1 } }"#,
        )
        .unwrap();
        assert_eq!(config.boards, vec!["pico".to_string()]);
        assert_eq!(config.version, VersionTag { major: 7, minor: 1 });
        assert_eq!(config.output_name, "pico_fido.uf2");
    }

    #[test]
    fn test_load_rejects_duplicate_boards() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("release.json");
        fs::write(&path, r#"{ "boards": ["pico", "pico_w", "pico"] }"#).unwrap();

        let err = Config::load(path.to_str().unwrap()).unwrap_err();
        match err {
            Error::Config(message) => assert!(message.contains("pico")),
            other => panic!("expected Config, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_empty_board_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("release.json");
        fs::write(&path, r#"{ "boards": ["pico", ""] }"#).unwrap();

        let result = Config::load(path.to_str().unwrap());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_ext_without_dot() {
        let config = Config {
            output_name: "firmware".to_string(),
            ..Config::default()
        };
        assert_eq!(config.artifact_ext(), "");
    }
}
