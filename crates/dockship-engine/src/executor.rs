use crate::engine::ExecError;

/// Abstraction over container engine CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait EngineExecutor: Send + Sync {
    /// Execute an engine command and capture stdout.
    async fn exec(&self, args: &[String]) -> Result<String, ExecError>;
}

/// Runs the engine binary directly with an argument vector. No shell is
/// involved, so argument values are never reinterpreted.
pub struct RealExecutor {
    binary: String,
}

impl RealExecutor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl EngineExecutor for RealExecutor {
    async fn exec(&self, args: &[String]) -> Result<String, ExecError> {
        use std::process::Stdio;

        tracing::debug!(binary = %self.binary, ?args, "running container engine");

        let output = tokio::process::Command::new(&self.binary)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ExecError::NotFound {
                binary: self.binary.clone(),
                source: e,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::debug!(status = %output.status, "container engine command failed");
            Err(ExecError::CommandFailed {
                args: args.to_vec(),
                stderr,
            })
        }
    }
}
