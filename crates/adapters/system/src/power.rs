//! OS shutdown primitives driven through the platform `shutdown` command.

use std::fmt;
use std::future::Future;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use powerctl_app::ports::PowerControl;
use powerctl_app::ports::power::SHUTDOWN_DELAY;
use powerctl_domain::error::HostError;

use crate::error::SystemError;

/// Default limit for a single command invocation.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// A program and its arguments, executed without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// [`PowerControl`] backed by the host's `shutdown` command.
#[derive(Debug, Clone)]
pub struct SystemPowerControl {
    shutdown: CommandLine,
    cancel: CommandLine,
    timeout: Duration,
}

impl Default for SystemPowerControl {
    fn default() -> Self {
        let (shutdown, cancel) = platform_commands();
        Self::with_commands(shutdown, cancel)
    }
}

impl SystemPowerControl {
    /// Use the platform's `shutdown` command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom commands for scheduling and cancelling.
    #[must_use]
    pub fn with_commands(shutdown: CommandLine, cancel: CommandLine) -> Self {
        Self {
            shutdown,
            cancel,
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run(&self, command: &CommandLine) -> Result<(), SystemError> {
        tracing::debug!(
            command = %command,
            timeout_ms = self.timeout.as_millis(),
            "executing power command"
        );

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| SystemError::TimedOut {
                command: command.to_string(),
                timeout_ms: self.timeout.as_millis(),
            })?
            .map_err(|source| SystemError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if output.status.success() {
            tracing::debug!(command = %command, "power command succeeded");
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let detail = if !stderr.is_empty() {
            stderr
        } else if !stdout.is_empty() {
            stdout
        } else {
            output.status.to_string()
        };

        let exit_code = output.status.code();
        tracing::warn!(
            command = %command,
            exit_code = ?exit_code,
            detail = %detail,
            "power command failed"
        );

        Err(SystemError::Failed {
            command: command.to_string(),
            exit_code,
            detail,
        })
    }
}

impl PowerControl for SystemPowerControl {
    fn schedule_shutdown(&self) -> impl Future<Output = Result<(), HostError>> + Send {
        async move { self.run(&self.shutdown).await.map_err(Into::into) }
    }

    fn cancel_shutdown(&self) -> impl Future<Output = Result<(), HostError>> + Send {
        async move { self.run(&self.cancel).await.map_err(Into::into) }
    }
}

fn platform_commands() -> (CommandLine, CommandLine) {
    let seconds = SHUTDOWN_DELAY.as_secs();
    if cfg!(windows) {
        (
            CommandLine::new(
                "shutdown",
                ["/s".to_string(), "/t".to_string(), seconds.to_string()],
            ),
            CommandLine::new("shutdown", ["/a"]),
        )
    } else {
        (
            CommandLine::new("shutdown", ["-h".to_string(), format!("+{}", seconds / 60)]),
            CommandLine::new("shutdown", ["-c"]),
        )
    }
}
