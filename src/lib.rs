//! install-llvm - GitHub Action that installs a stripped LLVM build
//!
//! Fetches the pinned release asset from GitHub, downloads it to the runner
//! temp directory, and extracts it into the workspace with 7z.

pub mod action;
pub mod config;
pub mod extract;
pub mod github;
pub mod logging;
pub mod utils;
