//! Action entry point: resolve release, download, extract

use std::error::Error;
use std::fs;

use crate::config::{ActionPaths, ASSET_NAME, OWNER, REPO, TAG};
use crate::extract::extract_archive;
use crate::github;
use crate::logging::{log_download, log_extract, log_info};
use crate::utils::download_file;

/// Run the whole action against the runner-provided environment.
pub fn run() -> Result<(), Box<dyn Error>> {
    let paths = ActionPaths::from_env()?;
    run_with_paths(&paths, &github::release_url(OWNER, REPO, TAG))
}

pub fn run_with_paths(paths: &ActionPaths, api_url: &str) -> Result<(), Box<dyn Error>> {
    ensure_output_dir(paths)?;

    log_info(&format!("Fetching release info from {}", api_url));
    let release = github::fetch_release(api_url)?;

    let asset = github::find_asset(&release, ASSET_NAME)
        .ok_or_else(|| format!("Asset '{}' not found in release '{}'", ASSET_NAME, TAG))?;

    log_download(&format!(
        "Downloading {} to {:?}",
        asset.browser_download_url, paths.archive_path
    ));
    download_file(&asset.browser_download_url, &paths.archive_path)?;

    log_extract(&format!(
        "Extracting {:?} to {:?}",
        paths.archive_path, paths.output_dir
    ));
    extract_archive(&paths.archive_path, &paths.output_dir)?;

    log_info("LLVM successfully extracted.");
    Ok(())
}

/// Create the output directory (and parents) before anything else runs.
fn ensure_output_dir(paths: &ActionPaths) -> Result<(), Box<dyn Error>> {
    if !paths.output_dir.exists() {
        fs::create_dir_all(&paths.output_dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Put a fake `7z` on PATH that succeeds whenever the archive exists.
    fn install_7z_shim(dir: &std::path::Path) -> String {
        let shim = dir.join("7z");
        fs::write(&shim, "#!/bin/sh\n[ -f \"$2\" ] || exit 2\nexit 0\n").unwrap();
        let mut perms = fs::metadata(&shim).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&shim, perms).unwrap();

        let old_path = std::env::var("PATH").unwrap_or_default();
        std::env::set_var("PATH", format!("{}:{}", dir.display(), old_path));
        old_path
    }

    #[test]
    fn test_run_with_paths_succeeds_end_to_end() {
        let mut server = mockito::Server::new();
        let archive_bytes: &[u8] = b"not a real archive";
        let release = serde_json::json!({
            "tag_name": TAG,
            "assets": [{
                "name": ASSET_NAME,
                "browser_download_url": format!("{}/dl/{}", server.url(), ASSET_NAME),
            }]
        });
        let _meta = server
            .mock("GET", format!("/repos/tags/{}", TAG).as_str())
            .with_status(200)
            .with_body(release.to_string())
            .create();
        let _dl = server
            .mock("GET", format!("/dl/{}", ASSET_NAME).as_str())
            .with_status(200)
            .with_body(archive_bytes)
            .create();

        let root = tempfile::tempdir().unwrap();
        let shim_dir = tempfile::tempdir().unwrap();
        let old_path = install_7z_shim(shim_dir.path());

        let paths = ActionPaths::resolve(&root.path().join("workspace"), &root.path().join("tmp"));
        let api_url = format!("{}/repos/tags/{}", server.url(), TAG);
        let result = run_with_paths(&paths, &api_url);

        std::env::set_var("PATH", old_path);

        // Zero exit from the extractor means the whole run is Ok
        result.unwrap();
        assert!(paths.output_dir.is_dir());
        assert_eq!(fs::read(&paths.archive_path).unwrap(), archive_bytes);
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ActionPaths::resolve(&dir.path().join("deep/workspace"), dir.path());
        assert!(!paths.output_dir.exists());
        ensure_output_dir(&paths).unwrap();
        assert!(paths.output_dir.is_dir());
    }

    #[test]
    fn test_ensure_output_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ActionPaths::resolve(dir.path(), dir.path());
        ensure_output_dir(&paths).unwrap();
        ensure_output_dir(&paths).unwrap();
        assert!(paths.output_dir.is_dir());
    }
}
