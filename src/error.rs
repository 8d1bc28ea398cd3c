use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors returned by [`Manager`](crate::Manager) operations.
///
/// Timestamp parse failures are not part of this enum: they are attached
/// per entry as [`LogFileInfo::parse_error`](crate::LogFileInfo) and never
/// abort a listing.
#[derive(Error, Debug)]
pub enum Error {
    /// The log directory is missing or unreadable.
    #[error("read log dir {}: {source}", .path.display())]
    Directory { path: PathBuf, source: io::Error },

    /// The log directory could not be created.
    #[error("create log dir {}: {source}", .path.display())]
    DirCreate { path: PathBuf, source: io::Error },

    /// An existing log file could not be opened for append.
    #[error("open log file {}: {source}", .path.display())]
    FileOpen { path: PathBuf, source: io::Error },

    /// A fresh log file could not be created.
    #[error("create log file {}: {source}", .path.display())]
    FileCreate { path: PathBuf, source: io::Error },

    /// GC failed while running ahead of a file creation.
    #[error("auto GC: {0}")]
    Gc(#[source] Box<Error>),

    /// One or more old log files could not be deleted. GC attempts every
    /// deletion before reporting; the files listed here are still on disk.
    #[error("failed to delete {} old log file(s)", .0.len())]
    Deletion(Vec<(PathBuf, io::Error)>),
}

pub type Result<T> = std::result::Result<T, Error>;
