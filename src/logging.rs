//! Action logging
//!
//! Timestamped, leveled log lines on stdout (captured by the job log) and
//! mirrored to a file under the runner's temp directory, with a run-context
//! header. Also emits the `::error::` workflow command on failure.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

static LOGGER: OnceLock<Arc<Mutex<ActionLogger>>> = OnceLock::new();

// ============================================================================
// Run Context Detection
// ============================================================================

#[derive(Debug, Clone)]
pub struct RunContext {
    pub action_version: String,
    pub runner_os: String,
    pub runner_arch: String,
    pub workflow: String,
    pub job: String,
    pub repository: String,
}

impl RunContext {
    pub fn detect() -> Self {
        Self {
            action_version: env!("CARGO_PKG_VERSION").to_string(),
            runner_os: env_or_unknown("RUNNER_OS"),
            runner_arch: env_or_unknown("RUNNER_ARCH"),
            workflow: env_or_unknown("GITHUB_WORKFLOW"),
            job: env_or_unknown("GITHUB_JOB"),
            repository: env_or_unknown("GITHUB_REPOSITORY"),
        }
    }

    pub fn to_log_header(&self) -> String {
        format!(
            r#"================================================================================
install-llvm log - {}
================================================================================
Action:        install-llvm v{}
Run Context:
  Runner:      {} {}
  Workflow:    {}
  Job:         {}
  Repository:  {}
================================================================================
"#,
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.action_version,
            self.runner_os,
            self.runner_arch,
            self.workflow,
            self.job,
            self.repository
        )
    }
}

fn env_or_unknown(var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| "Unknown".to_string())
}

// ============================================================================
// Log Levels
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Info,
    Download,
    Extract,
    Warning,
    Error,
}

impl LogLevel {
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO]",
            LogLevel::Download => "[DOWNLOAD]",
            LogLevel::Extract => "[EXTRACT]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Error => "[ERROR]",
        }
    }
}

// ============================================================================
// Action Logger
// ============================================================================

pub struct ActionLogger {
    log_file: Option<File>,
}

impl ActionLogger {
    pub fn new() -> Self {
        // Mirror the log to a file under the runner temp dir when available
        let log_file = std::env::var("RUNNER_TEMP").ok().and_then(|temp| {
            let log_path = PathBuf::from(temp).join("install-llvm.log");
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .ok()
        });

        let mut logger = Self { log_file };

        let header = RunContext::detect().to_log_header();
        logger.write_raw(&header);

        logger
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.log_file {
            let _ = writeln!(file, "{}", msg);
            let _ = file.flush();
        }

        println!("{}", msg);
    }

    pub fn log(&mut self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        let formatted = format!("[{}] {} {}", timestamp, level.prefix(), message);
        self.write_raw(&formatted);
    }
}

impl Default for ActionLogger {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Global Logger Access
// ============================================================================

/// Initialize the global logger (call once at startup)
pub fn init_logger() {
    LOGGER.get_or_init(|| Arc::new(Mutex::new(ActionLogger::new())));
}

/// Get the global logger instance
fn logger() -> Arc<Mutex<ActionLogger>> {
    LOGGER
        .get_or_init(|| Arc::new(Mutex::new(ActionLogger::new())))
        .clone()
}

// ============================================================================
// Convenience Logging Functions
// ============================================================================

pub fn log_info(message: &str) {
    if let Ok(mut log) = logger().lock() {
        log.log(LogLevel::Info, message);
    }
}

pub fn log_download(message: &str) {
    if let Ok(mut log) = logger().lock() {
        log.log(LogLevel::Download, message);
    }
}

pub fn log_extract(message: &str) {
    if let Ok(mut log) = logger().lock() {
        log.log(LogLevel::Extract, message);
    }
}

pub fn log_warning(message: &str) {
    if let Ok(mut log) = logger().lock() {
        log.log(LogLevel::Warning, message);
    }
}

pub fn log_error(message: &str) {
    if let Ok(mut log) = logger().lock() {
        log.log(LogLevel::Error, message);
    }
}

// ============================================================================
// Workflow Commands
// ============================================================================

/// Escape message data for a workflow command line
fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Report a failed run to the workflow.
///
/// The runner turns the `::error::` command into a job annotation; the
/// caller still has to exit non-zero to fail the step.
pub fn set_failed(message: &str) {
    log_error(message);
    println!("::error::{}", escape_command_data(message));
}
