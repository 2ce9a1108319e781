use crate::error::{Result, StemError};
use std::{
    ffi::OsStr,
    process::{Command, ExitStatus, Stdio},
};
use tracing::{debug, error, info};

#[cfg(target_os = "windows")]
use std::os::windows::process::CommandExt;

#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Creates a `Command` that does not pop up a console window on Windows.
#[cfg(target_os = "windows")]
pub fn hidden_command(program: &str) -> Command {
    let mut cmd = Command::new(program);
    cmd.creation_flags(CREATE_NO_WINDOW);
    cmd
}

#[cfg(not(target_os = "windows"))]
pub fn hidden_command(program: &str) -> Command {
    Command::new(program)
}

/// Finished child process with both streams captured as text.
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Logs both streams at error level, prefixed with `tool`.
    pub fn report_failure(&self, tool: &str) {
        error!("{tool} Error (stdout):\n{}", self.stdout);
        error!("{tool} Error (stderr):\n{}", self.stderr);
    }
}

/// Space-joined rendering of the full command line, for logs.
pub fn render(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(OsStr::to_string_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `cmd` to completion with stdin closed, buffering stdout and stderr.
///
/// There is no timeout: a child that never exits blocks the caller.
pub fn run_captured(tool: &str, cmd: &mut Command) -> Result<CapturedOutput> {
    info!("Running {tool} command: {}", render(cmd));

    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|source| StemError::Launch {
            program: cmd.get_program().to_string_lossy().into_owned(),
            source,
        })?;

    let captured = CapturedOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    if captured.success() {
        debug!(stdout = %captured.stdout, stderr = %captured.stderr, "{tool} finished");
    }

    Ok(captured)
}
