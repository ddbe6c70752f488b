//! Small helpers shared across CLI tests.
//!
//! The CLI tests write edge-list files and replay scripted console sessions.
//! These helpers keep the cases concise and consistent.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, ExecutionSummary, RunCommand, run_cli};

pub(super) const SQUARE_EDGE_LIST: &str = "4\n0 1 4\n0 2 1\n2 3 2\n1 3 6\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_edge_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn cli_for(command: RunCommand) -> Cli {
    Cli {
        command: Command::Run(command),
    }
}

/// Runs `command` against a scripted console and returns the result with
/// everything written to the screen.
pub(super) fn run_scripted(
    command: RunCommand,
    script: &str,
) -> (Result<ExecutionSummary, CliError>, String) {
    let mut screen = Vec::new();
    let result = run_cli(cli_for(command), script.as_bytes(), &mut screen);
    (result, String::from_utf8_lossy(&screen).into_owned())
}

pub(super) fn run_cli_expecting_error(command: RunCommand, script: &str, panic_msg: &str) -> CliError {
    match run_scripted(command, script).0 {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
