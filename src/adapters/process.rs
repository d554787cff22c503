use crate::domain::model::ChildStatus;
use crate::domain::ports::ScriptRunner;
use crate::utils::error::{LauncherError, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Runs `interpreter <filename>` inside the script's directory.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    interpreter: String,
}

impl ProcessRunner {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    fn command(&self, script: &Path) -> Command {
        let mut command = Command::new(&self.interpreter);
        match (script.parent(), script.file_name()) {
            (Some(dir), Some(name)) if !dir.as_os_str().is_empty() => {
                command.current_dir(dir).arg(name);
            }
            _ => {
                command.arg(script);
            }
        }
        command
    }
}

#[async_trait]
impl ScriptRunner for ProcessRunner {
    async fn run(&self, script: &Path) -> Result<ChildStatus> {
        let mut child = self
            .command(script)
            .spawn()
            .map_err(|source| LauncherError::SpawnError {
                program: self.interpreter.clone(),
                source,
            })?;

        tracing::debug!(pid = ?child.id(), "script started");

        // Ctrl-C 也會送到同一前景群組的子程序；啟動器繼續等待它結束
        let status = loop {
            tokio::select! {
                status = child.wait() => break status?,
                signal = tokio::signal::ctrl_c() => {
                    if signal.is_ok() {
                        tracing::warn!("interrupt received, waiting for the script to exit");
                    } else {
                        break child.wait().await?;
                    }
                }
            }
        };

        Ok(ChildStatus::from(status))
    }
}
