//! Rolling Logger
//!
//! File logger with size-based rotation. Every line written to the log file
//! is also kept in a bounded in-memory ring so the app can show recent
//! activity without reading the file back.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use once_cell::sync::{Lazy, OnceCell};

/// Rotate once the active file would grow past this size
pub const MAX_FILE_BYTES: u64 = 1024 * 1024;
/// Number of rotated files kept next to the active one (`.1` is newest)
pub const MAX_ROTATED_FILES: usize = 3;
/// Lines kept in the in-memory ring
pub const RING_CAPACITY: usize = 500;

static RECENT: Lazy<Mutex<VecDeque<String>>> =
    Lazy::new(|| Mutex::new(VecDeque::with_capacity(RING_CAPACITY)));

static STATE: OnceCell<LoggerState> = OnceCell::new();

struct LoggerState {
    log_file: Option<PathBuf>,
}

// ========================
// Rolling file writer
// ========================

/// Append-only log file that rotates itself when it grows past `max_bytes`.
pub struct RollingFile {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
}

impl RollingFile {
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            file,
            written,
            max_bytes,
            max_files,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files > 0 {
            let _ = fs::remove_file(rotated_path(&self.path, self.max_files));
            for idx in (1..self.max_files).rev() {
                let from = rotated_path(&self.path, idx);
                if from.exists() {
                    fs::rename(&from, rotated_path(&self.path, idx + 1))?;
                }
            }
            fs::rename(&self.path, rotated_path(&self.path, 1))?;
        }

        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        remember(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// `app.log` -> `app.log.1`
fn rotated_path(path: &Path, idx: usize) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}", idx));
    PathBuf::from(name)
}

// ========================
// Recent lines ring
// ========================

fn remember(bytes: &[u8]) {
    let text = String::from_utf8_lossy(bytes);
    let Ok(mut ring) = RECENT.lock() else {
        return;
    };
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        if ring.len() == RING_CAPACITY {
            ring.pop_front();
        }
        ring.push_back(line.to_string());
    }
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    RECENT
        .lock()
        .map(|ring| ring.iter().cloned().collect())
        .unwrap_or_default()
}

// ========================
// Initialization
// ========================

#[cfg(not(target_os = "android"))]
struct LocalTime;

#[cfg(not(target_os = "android"))]
impl tracing_subscriber::fmt::time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global logger writing to `<log_dir>/<app_name>.log`.
///
/// `log` records from library code are bridged into the same subscriber.
/// Fails if a global logger is already installed.
#[cfg(not(target_os = "android"))]
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    let path = log_dir.as_ref().join(format!("{}.log", app_name));
    let file = RollingFile::open(&path, MAX_FILE_BYTES, MAX_ROTATED_FILES)
        .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?;

    tracing_subscriber::fmt()
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    STATE
        .set(LoggerState { log_file: Some(path) })
        .map_err(|_| "Logger already initialized".to_string())?;

    tracing::info!(app = app_name, "logger initialized");
    Ok(())
}

/// Android logs go to logcat, tagged with the app name.
#[cfg(target_os = "android")]
pub fn init_logger(_log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(app_name),
    );

    STATE
        .set(LoggerState { log_file: None })
        .map_err(|_| "Logger already initialized".to_string())
}

/// Path of the active log file, once initialized
pub fn log_file() -> Option<&'static Path> {
    STATE.get().and_then(|state| state.log_file.as_deref())
}

fn ensure_initialized() -> Result<(), String> {
    STATE
        .get()
        .map(|_| ())
        .ok_or_else(|| "Logger not initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    log::info!(target: "rolling_logger", "{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    log::warn!(target: "rolling_logger", "{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    log::error!(target: "rolling_logger", "{}", msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rotates_when_size_exceeded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let mut file = RollingFile::open(&path, 16, 2).unwrap();

        file.write_all(b"first line 0001\n").unwrap();
        file.write_all(b"second line 002\n").unwrap();
        file.flush().unwrap();

        let active = fs::read_to_string(&path).unwrap();
        let rotated = fs::read_to_string(rotated_path(&path, 1)).unwrap();
        assert_eq!(active, "second line 002\n");
        assert_eq!(rotated, "first line 0001\n");
    }

    #[test]
    fn test_keeps_at_most_max_rotated_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let mut file = RollingFile::open(&path, 4, 2).unwrap();

        for line in ["aaaa\n", "bbbb\n", "cccc\n", "dddd\n"] {
            file.write_all(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "dddd\n");
        assert_eq!(fs::read_to_string(rotated_path(&path, 1)).unwrap(), "cccc\n");
        assert_eq!(fs::read_to_string(rotated_path(&path, 2)).unwrap(), "bbbb\n");
        assert!(!rotated_path(&path, 3).exists());
    }

    #[test]
    fn test_reopen_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("app.log");

        RollingFile::open(&path, 1024, 1).unwrap().write_all(b"one\n").unwrap();
        RollingFile::open(&path, 1024, 1).unwrap().write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_written_lines_are_remembered() {
        let dir = TempDir::new().unwrap();
        let mut file = RollingFile::open(dir.path().join("ring.log"), 1024, 1).unwrap();

        file.write_all(b"ring marker 7f3a\n\n").unwrap();

        let recent = recent_lines();
        assert!(recent.iter().any(|line| line == "ring marker 7f3a"));
        assert!(recent.len() <= RING_CAPACITY);
    }

    #[test]
    fn test_init_logger_writes_to_file() {
        let dir = TempDir::new().unwrap();
        init_logger(dir.path(), "LoggerTest").expect("init");

        info("hello from test").unwrap();
        error("something broke").unwrap();

        let path = log_file().expect("log file set");
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("hello from test"));
        assert!(content.contains("something broke"));
        assert!(init_logger(dir.path(), "LoggerTest").is_err());
    }
}
