//! Command-line surface of the launcher.
//!
//! The launcher stands in for `bwameth.py`, so the parser must be invisible:
//! it defines no flags of its own, disables help and version interception,
//! and collects every token (hyphenated or not) as an `OsString` to forward
//! untouched.

use std::ffi::OsString;

use clap::Parser;

/// Launcher shim for `bwameth.py`.
///
/// Everything after the program name belongs to the target; the launcher
/// performs no interpretation of its own.
#[derive(Parser, Debug)]
#[command(name = "bwlaunch")]
#[command(about = "Run bwameth.py with a guaranteed pre-start hook")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments forwarded verbatim to bwameth.py
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARG")]
    pub args: Vec<OsString>,
}
