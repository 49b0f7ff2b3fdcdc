use dockship_core::CONTAINER_PORT;

use crate::engine::ExecError;
use crate::executor::{EngineExecutor, RealExecutor};

/// Container engine operations, parameterized over the executor for testability.
pub struct EngineClient<E: EngineExecutor = RealExecutor> {
    executor: E,
}

impl EngineClient<RealExecutor> {
    /// Client for the given engine binary, e.g. `docker` or `podman`.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            executor: RealExecutor::new(binary),
        }
    }
}

impl<E: EngineExecutor> EngineClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run one engine command. On failure the error carries `failure_message`
    /// together with whatever the engine wrote to stderr.
    pub async fn run(
        &self,
        args: &[String],
        failure_message: &str,
    ) -> Result<String, EngineError> {
        self.executor
            .exec(args)
            .await
            .map_err(|e| EngineError::from_exec(failure_message, e))
    }

    // ── Image Build ──

    /// Build an image from `app_dir` tagged `image_name`. Returns engine stdout.
    pub async fn build_image(
        &self,
        app_dir: &str,
        image_name: &str,
    ) -> Result<String, EngineError> {
        let stdout = self
            .run(
                &args(["build", "-t", image_name, app_dir]),
                &format!("Failed to build Docker image {image_name}"),
            )
            .await?;
        tracing::info!(image = image_name, context = app_dir, "image built");
        Ok(stdout)
    }

    // ── Container Run ──

    /// Start a detached container named `container_name` from `image_name`,
    /// publishing `host_port` on the host to the app port in the container.
    pub async fn run_container(
        &self,
        image_name: &str,
        container_name: &str,
        host_port: &str,
    ) -> Result<String, EngineError> {
        let mapping = format!("{host_port}:{CONTAINER_PORT}");
        let stdout = self
            .run(
                &args([
                    "run",
                    "-d",
                    "--name",
                    container_name,
                    "-p",
                    &mapping,
                    image_name,
                ]),
                &format!("Failed to run container {container_name}"),
            )
            .await?;
        tracing::info!(container = container_name, ports = %mapping, "container started");
        Ok(stdout)
    }
}

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("{message}\n{stderr}")]
    CommandFailed { message: String, stderr: String },

    #[error("{message}")]
    Spawn { message: String, source: ExecError },
}

impl EngineError {
    fn from_exec(message: &str, err: ExecError) -> Self {
        match err {
            ExecError::CommandFailed { stderr, .. } => Self::CommandFailed {
                message: message.to_owned(),
                stderr,
            },
            other => Self::Spawn {
                message: message.to_owned(),
                source: other,
            },
        }
    }
}
