// SPDX-License-Identifier: GPL-3.0-only

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::sdk::SDK_ENV;

/// Outcome of one external tool invocation
///
/// Success and failure are decided solely by the tool's exit status; the
/// failure variant carries a rendered diagnostic for the run report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StepStatus {
    Success,
    Failure(String),
}

/// The external configure/compile pair driven for every board
///
/// Implementations run synchronously inside the workspace and block until
/// the tool's process group exits. Tests substitute a fake runner so the
/// matrix can be exercised without spawning real processes.
pub trait ToolRunner {
    /// Generate the build system for one board inside the workspace
    fn configure(&self, workspace: &Path, board: &str, sdk_root: &str) -> io::Result<StepStatus>;

    /// Build inside the workspace with the given concurrency degree
    fn compile(&self, workspace: &Path, jobs: usize) -> io::Result<StepStatus>;
}

/// Runs cmake and make as child processes, inheriting stdio so their
/// diagnostics reach the operator verbatim
pub struct ProcessRunner {
    source_dir: PathBuf,
}

impl ProcessRunner {
    pub fn new<P: AsRef<Path>>(source_dir: P) -> ProcessRunner {
        ProcessRunner {
            source_dir: source_dir.as_ref().to_path_buf(),
        }
    }
}

impl ToolRunner for ProcessRunner {
    fn configure(&self, workspace: &Path, board: &str, sdk_root: &str) -> io::Result<StepStatus> {
        log::debug!(
            "cmake {} -DPICO_BOARD={} ({}={})",
            self.source_dir.display(),
            board,
            SDK_ENV,
            sdk_root
        );

        let status = Command::new("cmake")
            .current_dir(workspace)
            .env(SDK_ENV, sdk_root)
            .arg(&self.source_dir)
            .arg(format!("-DPICO_BOARD={}", board))
            .status()?;

        if status.success() {
            Ok(StepStatus::Success)
        } else {
            Ok(StepStatus::Failure(status.to_string()))
        }
    }

    fn compile(&self, workspace: &Path, jobs: usize) -> io::Result<StepStatus> {
        log::debug!("make -j{}", jobs);

        let status = Command::new("make")
            .current_dir(workspace)
            .arg(format!("-j{}", jobs))
            .status()?;

        if status.success() {
            Ok(StepStatus::Success)
        } else {
            Ok(StepStatus::Failure(status.to_string()))
        }
    }
}
