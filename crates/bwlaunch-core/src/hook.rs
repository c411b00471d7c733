//! Pre-start hook resolution.
//!
//! `bwameth.py` delegates its subprocess handling to a helper library that
//! optionally calls a pre-start hook before launching aligners. Some builds of
//! that helper ship without one, so the launcher guarantees a hook is in place
//! before the target runs: callers that bring their own keep it untouched, and
//! callers that bring none get a safe default that moves the process into its
//! own process group.

use thiserror::Error;
use tracing::debug;

/// A hook run immediately before the target starts.
///
/// The contract is best-effort: a failing hook must never abort the launch.
/// The dispatcher logs failures at debug level and carries on.
pub type PreStartHook = Box<dyn Fn() -> Result<(), HookError> + Send + Sync>;

/// Errors from loading or running a pre-start hook.
#[derive(Debug, Error)]
pub enum HookError {
    /// The hook provider could not be loaded at all.
    #[error("hook source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// Moving into a new process group failed.
    #[error("failed to move into a new process group: {reason}")]
    DetachFailed { reason: String },

    /// The platform has no process-group primitive.
    #[error("process groups are not supported on this platform")]
    Unsupported,
}

/// An optionally-loadable provider of the pre-start hook.
///
/// Embedders implement this to supply their own hook. Loading is allowed to
/// fail; the launcher treats a failed load as "no provider" and proceeds
/// without a hook, leaving it to the target to complain if it needed one.
pub trait HookSource {
    /// Load the provider and return its hook, if it defines one.
    fn load(&self) -> Result<Option<PreStartHook>, HookError>;
}

/// Source for callers that bring no hook of their own.
///
/// Loads successfully and provides nothing, so [`ensure_hook`] installs the
/// default.
pub struct NoHookSource;

impl HookSource for NoHookSource {
    fn load(&self) -> Result<Option<PreStartHook>, HookError> {
        Ok(None)
    }
}

/// Resolve the hook the dispatcher should run.
///
/// Three outcomes:
/// - the source fails to load: logged at debug level, no hook; the run
///   proceeds and the target raises its own error later if it truly needed
///   one;
/// - the source provides a hook: used as-is, never replaced;
/// - the source provides none: the default detach hook is installed.
pub fn ensure_hook(source: &dyn HookSource) -> Option<PreStartHook> {
    match source.load() {
        Ok(Some(hook)) => Some(hook),
        Ok(None) => Some(default_hook()),
        Err(e) => {
            debug!("pre-start hook source unavailable, continuing without: {e}");
            None
        }
    }
}

/// The default pre-start hook: detach into a new process group, best-effort.
pub fn default_hook() -> PreStartHook {
    Box::new(detach_process_group)
}

/// Move the calling process into its own process group.
///
/// Failure is harmless for the launcher; callers decide whether to report it.
#[cfg(unix)]
pub fn detach_process_group() -> Result<(), HookError> {
    use nix::unistd::{Pid, setpgid};

    setpgid(Pid::from_raw(0), Pid::from_raw(0)).map_err(|e| HookError::DetachFailed {
        reason: e.to_string(),
    })
}

/// Move the calling process into its own process group.
///
/// No such primitive exists here; the error is swallowed by callers.
#[cfg(not(unix))]
pub fn detach_process_group() -> Result<(), HookError> {
    Err(HookError::Unsupported)
}
