// SPDX-License-Identifier: GPL-3.0-only

use std::env;
use std::path::{Path, PathBuf};

use crate::collect::{artifact_name, collect};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::release::{clean_workspace, create_release_dir, prepare_workspace};
use crate::runner::{ProcessRunner, StepStatus, ToolRunner};
use crate::sdk::resolve_sdk_root;

pub struct BuildArguments<'a> {
    pub config_path: Option<&'a str>,
    pub jobs: Option<usize>,
    pub isolated: bool,
}

/// Build one board to completion: clean, configure, compile, collect
///
/// Any failure aborts the whole run; there is no per-board retry and no
/// continue-on-error mode.
///
/// # Return
///
/// The path of the collected release artifact
fn build_board<R: ToolRunner>(
    config: &Config,
    runner: &R,
    workspace: &Path,
    sdk_root: &str,
    jobs: usize,
    board: &str,
) -> Result<PathBuf> {
    clean_workspace(workspace)?;

    println!("fido-build: [{}] configure", board);
    let status = runner
        .configure(workspace, board, sdk_root)
        .map_err(|err| Error::Configure {
            board: board.to_string(),
            diagnostic: format!("failed to run configure step: {}", err),
        })?;
    if let StepStatus::Failure(diagnostic) = status {
        return Err(Error::Configure {
            board: board.to_string(),
            diagnostic,
        });
    }

    println!("fido-build: [{}] compile with {} jobs", board, jobs);
    let status = runner
        .compile(workspace, jobs)
        .map_err(|err| Error::Compile {
            board: board.to_string(),
            diagnostic: format!("failed to run compile step: {}", err),
        })?;
    if let StepStatus::Failure(diagnostic) = status {
        return Err(Error::Compile {
            board: board.to_string(),
            diagnostic,
        });
    }

    let dest_name = artifact_name(
        &config.artifact_prefix,
        board,
        config.version,
        &config.artifact_ext(),
    );
    collect(
        workspace,
        &config.output_name,
        &config.release_dir,
        &dest_name,
        board,
    )
}

/// Build every board in the matrix, in order, fail-fast
///
/// The release directory is recreated empty and the workspace prepared once,
/// then boards run strictly sequentially: exactly one board is in flight at
/// any time and all boards share one workspace, unless `isolated` gives each
/// board its own subdirectory of it. The first failing board aborts the run;
/// artifacts already collected stay in the release directory.
///
/// # Return
///
/// The collected artifact paths, one per board, in matrix order
pub fn build_matrix<R: ToolRunner>(
    config: &Config,
    runner: &R,
    sdk_root: &str,
    jobs: usize,
    isolated: bool,
) -> Result<Vec<PathBuf>> {
    create_release_dir(&config.release_dir)?;
    prepare_workspace(&config.workspace_dir)?;

    let total = config.boards.len();
    let mut artifacts = Vec::with_capacity(total);

    for (index, board) in config.boards.iter().enumerate() {
        println!("fido-build: building {} ({}/{})", board, index + 1, total);

        let workspace = if isolated {
            let workspace = config.workspace_dir.join(board);
            prepare_workspace(&workspace)?;
            workspace
        } else {
            config.workspace_dir.clone()
        };

        let artifact = build_board(config, runner, &workspace, sdk_root, jobs, board)?;
        log::debug!("collected {}", artifact.display());
        artifacts.push(artifact);
    }

    Ok(artifacts)
}

/// Anchor a workspace-relative path to an absolute one
///
/// Relative source and SDK paths in the configuration are written relative
/// to the shared workspace directory. Per-board workspaces sit one level
/// deeper, so those paths are turned into absolute ones up front and every
/// workspace resolves them identically. Absolute paths pass through
/// untouched, and nothing here checks that the target exists.
fn anchor_to_workspace(workspace_dir: &Path, path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = env::current_dir().map_err(Error::filesystem("."))?;
    Ok(cwd.join(workspace_dir).join(path))
}

/// Run a full release build
///
/// Loads the configuration, resolves the SDK root once, then drives the
/// board matrix through cmake and make. After the last board succeeds the
/// release manifest is written beside the release directory.
pub fn build(args: BuildArguments) -> Result<()> {
    let config = match args.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let source_dir = anchor_to_workspace(&config.workspace_dir, &config.source_dir)?;

    let sdk_root = resolve_sdk_root(&config.sdk_default);
    let sdk_root = anchor_to_workspace(&config.workspace_dir, Path::new(&sdk_root))?
        .to_string_lossy()
        .into_owned();
    log::debug!("SDK root: {}", sdk_root);

    let jobs = args.jobs.unwrap_or_else(num_cpus::get);

    let runner = ProcessRunner::new(&source_dir);
    let artifacts = build_matrix(&config, &runner, &sdk_root, jobs, args.isolated)?;

    if let Some(manifest_path) = &config.manifest_path {
        let version = config.version.to_string();
        Manifest::new(&version, &config.release_dir)?.write(manifest_path)?;
        println!("fido-build: wrote manifest to {}", manifest_path.display());
    }

    println!(
        "fido-build: placed {} artifacts in {}",
        artifacts.len(),
        config.release_dir.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::path::Path;

    use super::anchor_to_workspace;

    #[test]
    fn test_relative_paths_anchor_to_shared_workspace() {
        let anchored =
            anchor_to_workspace(Path::new("build_release"), Path::new("..")).unwrap();

        // Absolute and fixed to the shared workspace, so a per-board
        // workspace one level deeper resolves the same source tree.
        assert!(anchored.is_absolute());
        assert_eq!(
            anchored,
            env::current_dir().unwrap().join("build_release").join("..")
        );
    }

    #[test]
    fn test_relative_sdk_default_anchors_like_the_source() {
        let anchored =
            anchor_to_workspace(Path::new("build_release"), Path::new("../../pico-sdk"))
                .unwrap();

        assert!(anchored.is_absolute());
        assert!(anchored.ends_with("build_release/../../pico-sdk"));
    }

    #[test]
    fn test_absolute_paths_pass_through() {
        let anchored =
            anchor_to_workspace(Path::new("build_release"), Path::new("/opt/pico-sdk"))
                .unwrap();

        assert_eq!(anchored, Path::new("/opt/pico-sdk"));
    }
}
