//! Control transfer to the resolved target.
//!
//! Runs the target as a child process with inherited standard streams and
//! adopts its exit status as the launcher's own. The caller's arguments are
//! appended verbatim as `OsString`s and the child's argv[0] is pinned to the
//! resolved path, so the target sees exactly the invocation it would have
//! seen had it been run directly.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

use crate::hook::PreStartHook;

/// Errors from starting the target.
///
/// Failures inside the target are not errors here: the child owns its stdio
/// and its exit status, and the launcher only relays that status.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The child process could not be started at all.
    #[error("failed to run {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Run the target to completion and return the exit code to relay.
///
/// If a pre-start hook is present it runs first; a failing hook is logged at
/// debug level and never blocks the launch. Arguments pass through untouched
/// in their original order. The returned code is the child's own exit code,
/// or `128 + signal` when the child died to a signal (Unix convention).
///
/// # Errors
///
/// Returns [`DispatchError::Spawn`] only when the child never started;
/// everything after a successful start belongs to the target.
pub fn dispatch<S: AsRef<OsStr>>(
    target: &Path,
    args: &[S],
    hook: Option<PreStartHook>,
) -> Result<i32, DispatchError> {
    if let Some(hook) = hook {
        if let Err(e) = hook() {
            debug!("pre-start hook failed: {e}");
        }
    }

    let mut cmd = Command::new(target);
    cmd.args(args);

    // The target may inspect its own invocation name; make sure it sees the
    // path it was resolved to, not the launcher's.
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.arg0(target);
    }

    debug!("dispatching to {}", target.display());
    let status = cmd.status().map_err(|source| DispatchError::Spawn {
        path: target.to_path_buf(),
        source,
    })?;

    debug!("target exited with {status}");
    Ok(relay_code(status))
}

/// Map the child's exit status to the code the launcher should exit with.
fn relay_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
