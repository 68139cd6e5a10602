//! Bounded execution of external commands.
//!
//! Media inspection tools occasionally hang on damaged files, so every
//! invocation goes through [`run_command_with_timeout`], which kills the child
//! once the deadline passes.

use std::io::Read;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error};

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Renders a command as a single line for logs.
pub fn describe_command(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Runs `cmd` to completion, killing it if it outlives `timeout`.
///
/// stdout and stderr are drained on helper threads so a chatty child cannot
/// block on a full pipe while we wait on it. A non-zero exit is an error.
pub fn run_command_with_timeout(cmd: &mut Command, timeout: Duration) -> CoreResult<Output> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    debug!("Running command: {}", describe_command(cmd));

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| command_start_error(program.as_str(), e))?;

    let stdout_handle = child.stdout.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });
    let stderr_handle = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });

    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if start.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                error!("Command '{}' timed out after {:?}", program, timeout);
                return Err(CoreError::CommandTimeout(program, timeout));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                return Err(CoreError::Io(e));
            }
        }
    };

    let stdout = stdout_handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default();
    let stderr = stderr_handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default();

    if !status.success() {
        let stderr = String::from_utf8_lossy(&stderr).into_owned();
        debug!(
            "Command '{}' exited with {}: {}",
            program,
            status,
            stderr.trim()
        );
        return Err(command_failed_error(program, status, stderr));
    }

    Ok(Output {
        status,
        stdout,
        stderr,
    })
}
