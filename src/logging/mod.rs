//! Command audit logging to disk.
//!
//! When enabled, appends one line per handled command to a daily log file
//! named `commands_<date>.log` in the configured log directory (default:
//! `~/.local/share/namebot/logs/`).

use crate::config::LoggingConfig;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Writes handled commands to daily log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a log file cannot be created.
pub struct CommandLogger {
    enabled: bool,
    log_dir: String,
    file_handles: HashMap<String, fs::File>,
}

impl CommandLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            file_handles: HashMap::new(),
        }
    }

    /// Record one handled command. No-op if logging is disabled.
    pub fn log_command(&mut self, sender: &str, target: &str, command: &str) {
        if !self.enabled {
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let line = format!("[{}] <{}> {} -> {}", timestamp, sender, command, target);

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("commands_{}.log", date);

        // Expand ~ in log_dir
        let log_dir = if self.log_dir.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                home.join(&self.log_dir[2..])
            } else {
                PathBuf::from(&self.log_dir)
            }
        } else {
            PathBuf::from(&self.log_dir)
        };

        let filepath = log_dir.join(&filename);

        let handle = self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a file that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}
