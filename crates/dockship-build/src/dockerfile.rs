use dockship_core::CONTAINER_PORT;

use crate::app::ENTRY_POINT_FILE;

/// File name of the generated build descriptor.
pub const DOCKERFILE: &str = "Dockerfile";

/// Generates a single-stage Dockerfile for the Flask app.
pub struct DockerfileGenerator {
    base_image: &'static str,
    dependency: &'static str,
    port: u16,
}

impl Default for DockerfileGenerator {
    fn default() -> Self {
        Self {
            base_image: "python:3.9-slim",
            dependency: "flask",
            port: CONTAINER_PORT,
        }
    }
}

impl DockerfileGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        format!(
            r#"
FROM {base}

WORKDIR /app
COPY . /app
RUN pip install {dependency}
EXPOSE {port}
CMD ["python", "{entry_point}"]
"#,
            base = self.base_image,
            dependency = self.dependency,
            port = self.port,
            entry_point = ENTRY_POINT_FILE,
        )
    }
}
