//! File-based logger with size-based rotation.
//!
//! Logs are written to `~/.config/decor/logs/decor.log`. When the file
//! exceeds the configured max size, it is rotated to `decor.log.1`
//! (one backup kept).

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};
use std::thread::{self, ThreadId};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "decor.log";
const BACKUP_SUFFIX: &str = ".1";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

impl LogConfig {
    /// Minimum level that reaches the file. Unknown names mean `Info`.
    pub fn min_level(&self) -> Level {
        self.level.parse().unwrap_or(Level::Info)
    }

    /// Rotation threshold in bytes; zero disables rotation.
    pub fn max_bytes(&self) -> u64 {
        self.max_file_mb.saturating_mul(1024 * 1024)
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

/// An append-only log file that rolls over to a single backup.
struct RotatingFile {
    file: File,
    path: PathBuf,
    max_bytes: u64,
    written: u64,
}

impl RotatingFile {
    fn open(path: PathBuf, max_bytes: u64) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            file,
            path,
            max_bytes,
            written,
        })
    }

    /// Appends one line, rotating once the size threshold is crossed.
    fn append(&mut self, line: &str) -> io::Result<()> {
        self.file.write_all(line.as_bytes())?;
        self.written += line.len() as u64;
        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate()?;
        }
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        let backup = backup_path(&self.path);
        let _ = fs::remove_file(&backup);
        fs::rename(&self.path, &backup)?;
        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

struct Logger {
    sink: RotatingFile,
    min_level: Level,
}

/// Starts file logging.
///
/// Does nothing if `config.enabled` is `false` or logging already started;
/// every UI thread's frame manager calls this on creation.
pub fn init(config: &LogConfig) {
    if !config.enabled || LOGGER.get().is_some() {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let log_dir = dir.join("logs");
    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(sink) = RotatingFile::open(log_dir.join(LOG_FILE_NAME), config.max_bytes()) else {
        return;
    };
    let _ = LOGGER.set(Mutex::new(Logger {
        sink,
        min_level: config.min_level(),
    }));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format_line(clock_time(), level, thread::current().id(), args);
    let _ = logger.sink.append(&line);
}

/// `HH:MM:SS [LEVEL] (thread) message`. Frame managers are per UI thread,
/// so the thread tells interleaved windows apart.
fn format_line(time: String, level: Level, thread: ThreadId, args: fmt::Arguments<'_>) -> String {
    format!("{time} [{}] ({thread:?}) {args}\n", level.label())
}

fn backup_path(path: &Path) -> PathBuf {
    let mut backup = path.as_os_str().to_owned();
    backup.push(BACKUP_SUFFIX);
    PathBuf::from(backup)
}

/// UTC wall-clock time of day.
fn clock_time() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600 % 24, secs / 60 % 60, secs % 60)
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("decor-log-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        // Arrange
        let config = LogConfig {
            level: "verbose".into(),
            ..LogConfig::default()
        };

        // Act / Assert
        assert_eq!(config.min_level(), Level::Info);
        assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warn));
        assert!(Level::Debug < Level::Error);
    }

    #[test]
    fn line_carries_level_and_thread() {
        // Act
        let line = format_line(
            "12:00:00".into(),
            Level::Warn,
            thread::current().id(),
            format_args!("hook removed"),
        );

        // Assert
        assert!(line.starts_with("12:00:00 [WARN] (ThreadId("));
        assert!(line.ends_with(") hook removed\n"));
    }

    #[test]
    fn crossing_the_threshold_rotates_to_backup() {
        // Arrange
        let dir = scratch_dir("rotate");
        let path = dir.join(LOG_FILE_NAME);
        let mut sink = RotatingFile::open(path.clone(), 16).unwrap();

        // Act
        sink.append("0123456789\n").unwrap();
        sink.append("abcdefghij\n").unwrap();
        sink.append("after\n").unwrap();

        // Assert
        let backup = fs::read_to_string(backup_path(&path)).unwrap();
        assert_eq!(backup, "0123456789\nabcdefghij\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "after\n");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn zero_threshold_never_rotates() {
        // Arrange
        let dir = scratch_dir("unbounded");
        let path = dir.join(LOG_FILE_NAME);
        let config = LogConfig {
            max_file_mb: 0,
            ..LogConfig::default()
        };
        let mut sink = RotatingFile::open(path.clone(), config.max_bytes()).unwrap();

        // Act
        for _ in 0..64 {
            sink.append("line\n").unwrap();
        }

        // Assert
        assert!(!backup_path(&path).exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
