//! Target discovery.
//!
//! Resolves the on-disk location of `bwameth.py`: the fixed install location
//! wins outright, otherwise the directories of the `PATH` variable are walked
//! in order and the first directory holding the filename wins. Existence is
//! the only criterion; the target itself is responsible for being runnable.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// Install location checked before any search.
pub const PREFERRED_TARGET_PATH: &str = "/usr/local/bin/bwameth.py";

/// Filename joined onto each search directory.
pub const TARGET_FILENAME: &str = "bwameth.py";

/// Environment variable the search directories come from.
pub const SEARCH_PATH_VAR: &str = "PATH";

/// Errors from target resolution.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Neither the preferred location nor any search directory has the target.
    #[error("cannot find {filename} in {} or on {search_var}", .preferred.display())]
    NotFound {
        filename: String,
        preferred: PathBuf,
        search_var: &'static str,
    },
}

/// Ordered directories consulted when the preferred location is absent.
///
/// Read once per run; the order is the caller's and is never re-sorted.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Build the search path from the process environment.
    ///
    /// An unset variable yields an empty search path, not an error.
    pub fn from_env() -> Self {
        match env::var_os(SEARCH_PATH_VAR) {
            Some(raw) => Self {
                dirs: env::split_paths(&raw).collect(),
            },
            None => Self::default(),
        }
    }

    /// Build a search path from explicit directories.
    pub fn from_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// The directories in consultation order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

/// Where to look for the target: a preferred absolute path plus the filename
/// used for the fallback search.
#[derive(Debug, Clone)]
pub struct TargetSpec {
    pub preferred: PathBuf,
    pub filename: OsString,
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            preferred: PathBuf::from(PREFERRED_TARGET_PATH),
            filename: OsString::from(TARGET_FILENAME),
        }
    }
}

impl TargetSpec {
    /// Resolve the target's path.
    ///
    /// The preferred location short-circuits the search entirely; otherwise
    /// the first search directory containing the filename wins and later
    /// directories are never consulted.
    pub fn locate(&self, search: &SearchPath) -> Result<PathBuf, LocateError> {
        if self.preferred.exists() {
            debug!("using target at preferred location {}", self.preferred.display());
            return Ok(self.preferred.clone());
        }

        for dir in search.dirs() {
            let candidate = dir.join(&self.filename);
            if candidate.exists() {
                debug!("found target on search path at {}", candidate.display());
                return Ok(candidate);
            }
        }

        Err(LocateError::NotFound {
            filename: self.filename.to_string_lossy().into_owned(),
            preferred: self.preferred.clone(),
            search_var: SEARCH_PATH_VAR,
        })
    }
}

/// Resolve the default target against a search path.
///
/// Convenience for the common case; see [`TargetSpec::locate`].
pub fn locate_target(search: &SearchPath) -> Result<PathBuf, LocateError> {
    TargetSpec::default().locate(search)
}
