use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::ExecError;

use super::types::{chomp, Command, CommandOutput, Program};
use super::ExecutionStrategy;

/// Spawns the command with piped stdout/stderr, reads both to the end and
/// waits for the exit status.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureStrategy;

impl CaptureStrategy {
    pub fn new() -> Self {
        Self
    }
}

fn build(command: &Command) -> Result<tokio::process::Command, ExecError> {
    let mut cmd = match command.program() {
        Program::Shell(line) => shell_command(line),
        Program::Argv(args) => {
            let (program, rest) = args.split_first().ok_or(ExecError::EmptyCommand)?;
            let mut cmd = tokio::process::Command::new(program);
            cmd.args(rest);
            cmd
        }
    };
    cmd.envs(command.envs());
    if let Some(dir) = command.dir() {
        cmd.current_dir(dir);
    }
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    Ok(cmd)
}

#[cfg(unix)]
fn shell_command(line: &str) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

#[cfg(windows)]
fn shell_command(line: &str) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}

async fn read_all<R>(rd: Option<R>, label: &'static str) -> Result<String, ExecError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(mut rd) = rd {
        rd.read_to_end(&mut buf)
            .await
            .map_err(|source| ExecError::StreamIo {
                stream: label,
                source,
            })?;
    }
    Ok(chomp(String::from_utf8_lossy(&buf).into_owned()))
}

#[async_trait]
impl ExecutionStrategy for CaptureStrategy {
    fn name(&self) -> &str {
        "capture"
    }

    async fn run_command(&self, command: &Command) -> Result<CommandOutput, ExecError> {
        let shown = command.to_string();
        let mut child = build(command)?
            .spawn()
            .map_err(|source| ExecError::Spawn {
                command: shown.clone(),
                source,
            })?;
        tracing::debug!(command = %shown, pid = ?child.id(), "spawned");

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (stdout, stderr) =
            tokio::try_join!(read_all(stdout, "stdout"), read_all(stderr, "stderr"))?;
        let status = child.wait().await.map_err(|source| ExecError::Wait {
            command: shown.clone(),
            source,
        })?;

        tracing::debug!(command = %shown, exit_code = ?status.code(), "exited");
        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code: status.code(),
        })
    }
}
