// SPDX-License-Identifier: GPL-3.0-only

use std::collections::BTreeMap;
use std::fs::{read_dir, File};
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sha256::Sha256;

/// A manifest of the collected release artifacts
///
/// Written beside the release directory after every board has built, so the
/// release directory itself holds exactly one artifact per board.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Manifest {
    /// The firmware version that was released
    pub version: String,
    /// A dictionary of artifact names and their hashes
    pub files: BTreeMap<String, Sha256>,
}

impl Manifest {
    /// Create a new Manifest by reading the provided release directory
    ///
    /// # Arguments
    ///
    /// * `version` - the firmware version string for this release
    /// * `path` - the directory containing the collected artifacts
    ///
    /// # Errors
    ///
    /// Errors that are encountered while reading will be returned
    pub fn new<P: AsRef<Path>>(version: &str, path: P) -> Result<Manifest> {
        let path = path.as_ref();
        let mut files = BTreeMap::new();

        for entry_res in read_dir(path).map_err(Error::filesystem(path))? {
            let entry = entry_res.map_err(Error::filesystem(path))?;

            let name = entry.file_name().to_string_lossy().to_string();

            let file = File::open(entry.path()).map_err(Error::filesystem(entry.path()))?;
            let sha = Sha256::new(file).map_err(Error::filesystem(entry.path()))?;

            files.insert(name, sha);
        }

        Ok(Manifest {
            version: version.to_string(),
            files,
        })
    }

    /// Serialize this manifest as pretty JSON and write it to `path`
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = serde_json::to_vec_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
            .map_err(Error::filesystem(path))?;
        std::fs::write(path, bytes).map_err(Error::filesystem(path))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::Manifest;

    #[test]
    fn test_lists_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pico_fido_pico-6.0.uf2"), b"a").unwrap();
        fs::write(temp_dir.path().join("pico_fido_pico_w-6.0.uf2"), b"b").unwrap();

        let manifest = Manifest::new("6.0", temp_dir.path()).unwrap();

        assert_eq!(manifest.version, "6.0");
        let names: Vec<&str> = manifest.files.keys().map(|name| name.as_str()).collect();
        assert_eq!(
            names,
            vec!["pico_fido_pico-6.0.uf2", "pico_fido_pico_w-6.0.uf2"]
        );
    }

    #[test]
    fn test_write_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let release = temp_dir.path().join("release");
        fs::create_dir(&release).unwrap();
        fs::write(release.join("pico_fido_pico-6.0.uf2"), b"firmware").unwrap();

        let manifest = Manifest::new("6.0", &release).unwrap();
        let manifest_path = temp_dir.path().join("manifest.json");
        manifest.write(&manifest_path).unwrap();

        let json = fs::read_to_string(&manifest_path).unwrap();
        let back = serde_json::from_str::<Manifest>(&json).unwrap();
        assert_eq!(manifest, back);
    }
}
