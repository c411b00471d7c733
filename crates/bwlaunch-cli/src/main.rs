//! CLI entry point - the composition root.
//!
//! Wires the launch steps together in order: resolve the pre-start hook
//! (best-effort), locate the target, dispatch to it and relay its exit
//! status. Failures before dispatch are this binary's to report; failures
//! after it belong entirely to the target.

use std::io;
use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use tracing::debug;

use bwlaunch_cli::Cli;
use bwlaunch_core::dispatch::{DispatchError, dispatch};
use bwlaunch_core::hook::{NoHookSource, ensure_hook};
use bwlaunch_core::locate::{SearchPath, TargetSpec};

/// Exit code when the target cannot be located anywhere.
const EXIT_TARGET_NOT_FOUND: u8 = 2;

fn main() -> ExitCode {
    // Diagnostics go to stderr and stay silent unless RUST_LOG opts in, so
    // the target's own streams pass through undisturbed.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let hook = ensure_hook(&NoHookSource);

    let search = SearchPath::from_env();
    let target = match TargetSpec::default().locate(&search) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(ExitCode::from(EXIT_TARGET_NOT_FOUND));
        }
    };

    debug!(
        "launching {} with {} argument(s)",
        target.display(),
        cli.args.len()
    );
    let code = dispatch(&target, &cli.args, hook).map_err(spawn_error)?;
    Ok(relayed(code))
}

/// Attach a remediation hint when the target exists but cannot be started.
fn spawn_error(err: DispatchError) -> anyhow::Error {
    let hint = match &err {
        DispatchError::Spawn { path, source }
            if source.kind() == io::ErrorKind::PermissionDenied =>
        {
            Some(format!(
                " (is it executable? try: chmod +x \"{}\")",
                path.display()
            ))
        }
        DispatchError::Spawn { .. } => None,
    };

    match hint {
        Some(hint) => anyhow!("{err}{hint}"),
        None => anyhow::Error::new(err),
    }
}

/// Clamp the relayed status into the process exit-code range.
fn relayed(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
