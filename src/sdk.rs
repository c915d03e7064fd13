// SPDX-License-Identifier: GPL-3.0-only

use std::env;

/// Environment variable that overrides the pico-sdk location
pub const SDK_ENV: &str = "PICO_SDK_PATH";

/// Resolve the SDK root for this run
///
/// If `PICO_SDK_PATH` is set its value is used verbatim, without any
/// existence check; otherwise `default` is used. Resolution happens once,
/// before the board loop, and the same value is handed to every configure
/// step — there is no per-board override.
pub fn resolve_sdk_root(default: &str) -> String {
    match env::var(SDK_ENV) {
        Ok(path) => path,
        Err(_) => default.to_string(),
    }
}
