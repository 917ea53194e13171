use std::{io, process::Stdio};

use tokio::{
    io::{AsyncBufReadExt as _, AsyncRead, AsyncWriteExt as _, BufReader},
    process::{ChildStdin, Command},
    task::{JoinError, JoinHandle},
};

use super::{command::RunCommand, result::ProcessOutput};
use crate::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StdStream {
    Stdin,
    Stdout,
    Stderr,
}

/// Failure to start or talk to a child process.
/// A child exiting with non-zero status is NOT an error; see [`ProcessOutput::status`].
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to spawn '{0}': {1}")]
    Spawn(String, #[source] io::Error),

    #[error("Failed to wait for '{0}': {1}")]
    Wait(String, #[source] io::Error),

    #[error("Failed to communicate with '{0}' via {1}: {2}")]
    Pipe(String, StdStream, #[source] io::Error),

    #[error("Reader of {0} stopped unexpectedly: {1}")]
    Join(StdStream, #[source] JoinError),
}

/// Runs `cmd` with `input` as its whole stdin and captures stdout and stderr.
///
/// Both output streams are drained by their own task while the child runs, so a child
/// writing a lot never blocks on a full pipe. If `verbose`, every line is echoed as it
/// arrives. There is no time limit: a child that never exits blocks this forever.
pub async fn run_process(
    cmd: &RunCommand,
    input: &str,
    verbose: bool,
) -> Result<ProcessOutput, ProcessError> {
    log::debug!("Spawning '{}'", cmd);

    let mut proc = Command::new(&cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ProcessError::Spawn(cmd.to_string(), e))?;

    let missing_pipe = |stream| {
        ProcessError::Pipe(
            cmd.to_string(),
            stream,
            io::Error::new(io::ErrorKind::BrokenPipe, "pipe is not open"),
        )
    };
    let stdin = proc.stdin.take().ok_or_else(|| missing_pipe(StdStream::Stdin))?;
    let stdout = proc.stdout.take().ok_or_else(|| missing_pipe(StdStream::Stdout))?;
    let stderr = proc.stderr.take().ok_or_else(|| missing_pipe(StdStream::Stderr))?;

    let stdout_task = tokio::spawn(drain(stdout, verbose.then_some(StdStream::Stdout)));
    let stderr_task = tokio::spawn(drain(stderr, verbose.then_some(StdStream::Stderr)));

    let (fed, exit_status) = tokio::join!(feed(stdin, input.as_bytes()), proc.wait());
    let exit_status = exit_status.map_err(|e| ProcessError::Wait(cmd.to_string(), e))?;

    // The child has exited, but its output may still be in flight.
    let stdout = join_drain(stdout_task, StdStream::Stdout, cmd).await?;
    let stderr = join_drain(stderr_task, StdStream::Stderr, cmd).await?;
    fed.map_err(|e| ProcessError::Pipe(cmd.to_string(), StdStream::Stdin, e))?;

    let status = exit_status.code();
    if status.is_none() {
        log_abnormal_termination(cmd, &exit_status);
    }

    Ok(ProcessOutput {
        status,
        stdout: String::from_utf8_lossy(&stdout).into(),
        stderr: String::from_utf8_lossy(&stderr).into(),
    })
}

async fn feed(mut stdin: ChildStdin, input: &[u8]) -> io::Result<()> {
    match stdin.write_all(input).await {
        // The child quit without reading everything.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Child closed stdin before reading all input");
            Ok(())
        }
        res => res,
    }
    // `stdin` is dropped here and the child sees EOF
}

async fn drain<R>(reader: R, echo: Option<StdStream>) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        if let Some(stream) = echo {
            style::print_echo_line(stream, &String::from_utf8_lossy(strip_eol(&line)));
        }
        buf.extend_from_slice(&line);
    }
    Ok(buf)
}

async fn join_drain(
    task: JoinHandle<io::Result<Vec<u8>>>,
    stream: StdStream,
    cmd: &RunCommand,
) -> Result<Vec<u8>, ProcessError> {
    task.await
        .map_err(|e| ProcessError::Join(stream, e))?
        .map_err(|e| ProcessError::Pipe(cmd.to_string(), stream, e))
}

fn strip_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(unix)]
fn log_abnormal_termination(cmd: &RunCommand, exit_status: &std::process::ExitStatus) {
    use std::os::unix::process::ExitStatusExt as _;
    match exit_status.signal() {
        Some(sig) => log::warn!("'{}' was terminated by signal {}", cmd, sig),
        None => log::warn!("'{}' terminated without exit code", cmd),
    }
}

#[cfg(not(unix))]
fn log_abnormal_termination(cmd: &RunCommand, _exit_status: &std::process::ExitStatus) {
    log::warn!("'{}' terminated without exit code", cmd);
}
