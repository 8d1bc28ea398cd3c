//! # logkeep
//! Log file manager with timestamped filenames and automatic count-based GC.
//!
//! Log files are created as `<dir>/<name>-<time>.log`, e.g.
//! `kind-1-2021-05-25T21-12-02.650.log`. All metadata (name, creation time)
//! lives in the filename itself; there is no index file, so any directory
//! following the naming convention can be managed as-is.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! logkeep = "0.1.0"
//! ```
//!
//! ```rust
//! use std::io::Write;
//!
//! use logkeep::Manager;
//!
//! let manager = Manager {
//!     path: "/tmp/logkeep_doc".into(),
//!     max_files: 10,
//! };
//!
//! let mut handle = manager.create("my-app").unwrap();
//! writeln!(handle, "hello world!").unwrap();
//! handle.close();
//! ```
//!
//! ## Listing log files
//! Every listing is recomputed from the directory; the file with the most
//! recent timestamp across all names carries the `latest` flag.
//!
//! ```rust
//! # use logkeep::Manager;
//! # let manager = Manager { path: "/tmp/logkeep_doc".into(), max_files: 10 };
//! # manager.create("my-app").unwrap().close();
//! for file in manager.files().unwrap() {
//!     println!("{file} name={} latest={}", file.name, file.latest);
//! }
//! ```
//!
//! ## Automatic GC
//! With `max_files` set, every [`Manager::create`] first deletes the oldest
//! log files so that the directory ends up holding at most `max_files`
//! files once the new one is added. Files not matching the naming
//! convention are never counted and never deleted.
//!
//! There is no coordination between processes sharing a directory; two
//! concurrent writers can race on eviction and creation.

mod config;
mod error;
mod handle;
mod manager;

pub use config::{LOGKEEP_CONFIG, LogkeepConfig};
pub use error::{Error, Result};
pub use handle::LogHandle;
pub use manager::{LogFileInfo, Manager, create};
