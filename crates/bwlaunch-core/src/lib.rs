#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod dispatch;
pub mod hook;
pub mod locate;

// Re-export the launch pipeline for composition roots
pub use dispatch::{DispatchError, dispatch};
pub use hook::{
    HookError, HookSource, NoHookSource, PreStartHook, default_hook, detach_process_group,
    ensure_hook,
};
pub use locate::{
    LocateError, PREFERRED_TARGET_PATH, SEARCH_PATH_VAR, SearchPath, TARGET_FILENAME, TargetSpec,
    locate_target,
};
