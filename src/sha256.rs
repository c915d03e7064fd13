// SPDX-License-Identifier: GPL-3.0-only

use std::io::{self, Read};

use hex::FromHex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::Digest;

/// Deserializes a lowercase hex string to a `Vec<u8>`.
fn from_hex<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    use serde::de::Error;
    String::deserialize(deserializer)
        .and_then(|string| Vec::from_hex(&string).map_err(|err| Error::custom(err.to_string())))
}

/// Serializes `buffer` to a lowercase hex string.
fn to_hex<T: AsRef<[u8]>, S: Serializer>(buffer: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(buffer.as_ref()))
}

/// A SHA-256 artifact digest, serialized as lowercase hex
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Sha256(
    #[serde(deserialize_with = "from_hex", serialize_with = "to_hex")] Vec<u8>,
);

impl Sha256 {
    /// Hash everything the provided reader yields
    ///
    /// # Errors
    ///
    /// Errors that are encountered while reading will be returned
    pub fn new<R: Read>(mut input: R) -> io::Result<Sha256> {
        let mut hasher = sha2::Sha256::new();
        io::copy(&mut input, &mut hasher)?;
        Ok(Sha256(hasher.finalize().as_slice().to_vec()))
    }
}
