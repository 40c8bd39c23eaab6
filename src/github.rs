//! GitHub Releases API client
//!
//! Fetches release metadata for a fixed tag and resolves the asset to
//! download by exact name match.

use std::error::Error;

use serde::Deserialize;

use crate::logging::log_warning;

/// GitHub release metadata
#[derive(Deserialize, Debug, Clone)]
pub struct GithubRelease {
    pub tag_name: String,
    pub assets: Vec<GithubAsset>,
}

/// GitHub release asset
#[derive(Deserialize, Debug, Clone)]
pub struct GithubAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// Build the releases-by-tag API URL for a repository.
pub fn release_url(owner: &str, repo: &str, tag: &str) -> String {
    format!(
        "https://api.github.com/repos/{}/{}/releases/tags/{}",
        owner, repo, tag
    )
}

/// Fetch release metadata from the GitHub API.
///
/// Hosted runners rate-limit anonymous API calls aggressively, so the
/// job's `GITHUB_TOKEN` is sent when present.
pub fn fetch_release(api_url: &str) -> Result<GithubRelease, Box<dyn Error>> {
    let mut request = ureq::get(api_url).set("User-Agent", "github-action");
    match bearer_token() {
        Some(token) => {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }
        None => log_warning("GITHUB_TOKEN is not set, calling the GitHub API anonymously"),
    }

    match request.call() {
        Ok(response) => {
            let release: GithubRelease = response.into_json()?;
            Ok(release)
        }
        Err(ureq::Error::Status(code, response)) => {
            let body = response.into_string().unwrap_or_default();
            Err(format!("HTTP {}: {}", code, body).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// The job's API token, if the workflow exported one
fn bearer_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())
}

/// Find an asset by exact name match.
pub fn find_asset<'a>(release: &'a GithubRelease, name: &str) -> Option<&'a GithubAsset> {
    release.assets.iter().find(|a| a.name == name)
}
