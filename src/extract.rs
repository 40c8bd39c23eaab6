//! Archive extraction via the external 7z tool

use std::error::Error;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Arguments for `7z`: extract with full paths into the output directory,
/// overwriting without prompting.
fn sevenzip_args(archive: &Path, output_dir: &Path) -> Vec<OsString> {
    let mut out_flag = OsString::from("-o");
    out_flag.push(output_dir);
    vec![OsString::from("x"), archive.into(), out_flag, OsString::from("-y")]
}

/// Extract `archive` into `output_dir` with `7z x <archive> -o<dir> -y`.
///
/// 7z's own output goes to the action's standard streams so it shows up in
/// the job log. The archive is left in place afterwards; the runner clears
/// its temp directory between jobs.
pub fn extract_archive(archive: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let status = Command::new("7z")
        .args(sevenzip_args(archive, output_dir))
        .status()
        .map_err(|e| format!("Failed to run 7z: {}", e))?;

    if !status.success() {
        return Err(format!(
            "7z exited with {} while extracting {:?}",
            status, archive
        )
        .into());
    }
    Ok(())
}
