//! Fixed release coordinates and runner-provided paths

use std::error::Error;
use std::path::{Path, PathBuf};

// ============================================================================
// Release Coordinates
// ============================================================================

pub const OWNER: &str = "RickIsGone";
pub const REPO: &str = "install-llvm-stripped";
pub const TAG: &str = "v1.0.0";
pub const ASSET_NAME: &str = "llvm-stripped.7z";

/// Subdirectory of the workspace the archive is extracted into
pub const OUTPUT_SUBDIR: &str = "llvm";

// ============================================================================
// Runner Paths
// ============================================================================

/// Filesystem locations for one action run, derived from the runner's
/// workspace and temp roots.
#[derive(Debug, Clone)]
pub struct ActionPaths {
    /// Where the archive gets extracted (`<workspace>/llvm`)
    pub output_dir: PathBuf,
    /// Where the downloaded archive lands (`<temp>/llvm-stripped.7z`)
    pub archive_path: PathBuf,
}

impl ActionPaths {
    pub fn resolve(workspace_root: &Path, temp_root: &Path) -> Self {
        Self {
            output_dir: workspace_root.join(OUTPUT_SUBDIR),
            archive_path: temp_root.join(ASSET_NAME),
        }
    }

    /// Read the workspace and temp roots the runner exports for every job.
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let workspace = std::env::var("GITHUB_WORKSPACE")
            .map_err(|_| "GITHUB_WORKSPACE is not set")?;
        let temp = std::env::var("RUNNER_TEMP").map_err(|_| "RUNNER_TEMP is not set")?;
        Ok(Self::resolve(Path::new(&workspace), Path::new(&temp)))
    }
}
