//! Shared utility functions used across the action

use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Download a file from URL to the specified path
///
/// Streams the response body straight to disk. No retry and no cleanup of
/// a partially written file on failure.
pub fn download_file(url: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let response = match ureq::get(url).set("User-Agent", "github-action").call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            return Err(format!("Failed to get '{}' ({})", url, code).into());
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = response.into_reader();
    let mut file = fs::File::create(path)?;
    std::io::copy(&mut reader, &mut file)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_writes_body_bytes() {
        let mut server = mockito::Server::new();
        let body: &[u8] = b"7z\xbc\xaf\x27\x1c payload bytes";
        let _m = server
            .mock("GET", "/release/llvm-stripped.7z")
            .with_status(200)
            .with_body(body)
            .create();

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("llvm-stripped.7z");
        let url = format!("{}/release/llvm-stripped.7z", server.url());
        download_file(&url, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), body);
    }

    #[test]
    fn test_download_creates_parent_dirs() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/file")
            .with_status(200)
            .with_body("data")
            .create();

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("a/b/file.bin");
        download_file(&format!("{}/file", server.url()), &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "data");
    }

    #[test]
    fn test_download_error_names_url_and_status() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/missing").with_status(404).create();

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out");
        let url = format!("{}/missing", server.url());
        let err = download_file(&url, &dest).unwrap_err().to_string();
        assert!(err.contains(&url), "missing url: {}", err);
        assert!(err.contains("404"), "missing status: {}", err);
    }
}
