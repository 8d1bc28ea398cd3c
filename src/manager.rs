use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    sync::LazyLock,
};

use chrono::{NaiveDateTime, Utc};
use log::{debug, warn};
use regex::Regex;

use crate::{
    config::LOGKEEP_CONFIG,
    error::{Error, Result},
    handle::LogHandle,
};

/// Timestamp layout embedded in log filenames, millisecond precision.
const FILE_DATE_LAYOUT: &str = "%Y-%m-%dT%H-%M-%S%.3f";

/// Discovery pattern for log filenames: `<name>-<timestamp>.log`.
///
/// The name capture is greedy so names may embed hyphens and dots. The
/// separator before the millisecond digits is a wildcard rather than a
/// literal dot; a file matched through a stray separator still lists, but
/// carries a timestamp parse error and an epoch time.
static FILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)-(\d{4}-\d{2}-\d{2}T\d{2}-\d{2}-\d{2}.\d{3})\.log$").unwrap()
});

/// Creates log files with automatic GC of the old ones.
///
/// A `Manager` is plain configuration, not a long-lived stateful object;
/// it can be rebuilt at every call site. All file metadata (name, creation
/// time) lives in the filename itself, there is no index file.
#[derive(Clone, Debug, Default)]
pub struct Manager {
    /// Target directory containing the log files. Empty means `.`.
    pub path: PathBuf,

    /// Maximum number of log files in the directory.
    /// If 0, won't automatically GC based on this criteria.
    pub max_files: usize,
}

/// A discovered log file with metadata parsed from its filename.
#[derive(Clone, Debug)]
pub struct LogFileInfo {
    /// Full path.
    pub path: PathBuf,

    /// Size in bytes at listing time.
    pub size: u64,

    /// Name provided when the file was created.
    pub name: String,

    /// Creation time parsed from the filename; epoch when parsing failed.
    pub time: NaiveDateTime,

    /// Whether this is the most recent log file in the directory,
    /// across all names.
    pub latest: bool,

    /// Timestamp parse failure for this entry, if any.
    pub parse_error: Option<chrono::ParseError>,
}

impl std::fmt::Display for LogFileInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl Manager {
    /// Builds a manager from `LOGKEEP_PATH` and `LOGKEEP_MAX_FILES`.
    pub fn from_env() -> Self {
        Self {
            path: PathBuf::from(&LOGKEEP_CONFIG.PATH),
            max_files: LOGKEEP_CONFIG.MAX_FILES,
        }
    }

    fn dir(&self) -> &Path {
        if self.path.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.path
        }
    }

    /// Creates a new log file and performs automatic GC of the old ones
    /// if needed.
    ///
    /// The created file is named `<path>/<name>-<time>.log`. `name` is not
    /// validated: a name containing a path separator, or ending in
    /// something the discovery pattern reads as a timestamp, corrupts
    /// later listings.
    ///
    /// A GC failure aborts before anything is created.
    pub fn create(&self, name: &str) -> Result<LogHandle> {
        let start_time = Utc::now().format(FILE_DATE_LAYOUT);
        let path = self.dir().join(format!("{name}-{start_time}.log"));

        self.gc().map_err(|err| Error::Gc(Box::new(err)))?;

        let dir = self.dir();
        if !dir.is_dir() {
            create_log_dir(dir).map_err(|source| Error::DirCreate {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let file = if path.exists() {
            // Same name twice within one millisecond lands here.
            File::options()
                .append(true)
                .open(&path)
                .map_err(|source| Error::FileOpen {
                    path: path.clone(),
                    source,
                })?
        } else {
            File::create(&path).map_err(|source| Error::FileCreate {
                path: path.clone(),
                source,
            })?
        };

        Ok(LogHandle::new(file, path))
    }

    /// Returns the list of existing log files.
    ///
    /// Entries whose names do not match the discovery pattern are skipped
    /// entirely. Ordering is whatever the directory enumeration yields;
    /// callers that need a stable order must sort.
    pub fn files(&self) -> Result<Vec<LogFileInfo>> {
        let dir = self.dir();
        let entries = fs::read_dir(dir).map_err(|source| Error::Directory {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let filename = entry.file_name().to_string_lossy().to_string();
            let Some(caps) = FILE_PATTERN.captures(&filename) else {
                continue;
            };
            let Ok(metadata) = entry.metadata() else {
                // Entry vanished between readdir and stat.
                continue;
            };
            let (time, parse_error) =
                match NaiveDateTime::parse_from_str(&caps[2], FILE_DATE_LAYOUT) {
                    Ok(time) => (time, None),
                    Err(err) => (NaiveDateTime::UNIX_EPOCH, Some(err)),
                };
            files.push(LogFileInfo {
                path: dir.join(&filename),
                size: metadata.len(),
                name: caps[1].to_string(),
                time,
                latest: false,
                parse_error,
            });
        }

        // compute latest
        if let Some(max_time) = files.iter().map(|file| file.time).max() {
            for file in &mut files {
                file.latest = file.time == max_time;
            }
        }

        Ok(files)
    }

    /// Deletes the oldest log files so that, counting the file the caller
    /// is about to create, at most `max_files` remain.
    ///
    /// Files whose timestamps failed to parse carry the epoch and are
    /// evicted first. Deletion failures are collected over a full
    /// best-effort pass and reported together; there is no rollback.
    pub fn gc(&self) -> Result<()> {
        if self.max_files == 0 || !self.dir().is_dir() {
            return Ok(());
        }

        let mut files = self.files()?;
        if files.len() < self.max_files - 1 {
            return Ok(());
        }

        files.sort_by_key(|file| file.time);

        let excess = files.len() + 1 - self.max_files;
        let mut failures = Vec::new();
        for file in &files[..excess] {
            match fs::remove_file(&file.path) {
                Ok(()) => debug!("gc: removed {}", file.path.display()),
                Err(err) => {
                    warn!("gc: failed to remove {}: {err}", file.path.display());
                    failures.push((file.path.clone(), err));
                }
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::Deletion(failures))
        }
    }
}

/// One-shot convenience: creates `<dir>/<name>-<time>.log` without any GC.
pub fn create<P: Into<PathBuf>>(dir: P, name: &str) -> Result<LogHandle> {
    Manager {
        path: dir.into(),
        max_files: 0,
    }
    .create(name)
}

#[cfg(unix)]
fn create_log_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_log_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}
