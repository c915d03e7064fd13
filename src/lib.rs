// SPDX-License-Identifier: GPL-3.0-only

pub use self::boards::BOARDS;
pub use self::build::{build, build_matrix, BuildArguments};
pub use self::collect::artifact_name;
pub use self::config::{Config, VersionTag};
pub use self::error::{Error, Result};
pub use self::manifest::Manifest;
pub use self::runner::{ProcessRunner, StepStatus, ToolRunner};
pub use self::sdk::{resolve_sdk_root, SDK_ENV};
pub use self::sha256::Sha256;

mod boards;
mod build;
mod collect;
mod config;
mod error;
mod manifest;
mod release;
mod runner;
mod sdk;
mod sha256;
