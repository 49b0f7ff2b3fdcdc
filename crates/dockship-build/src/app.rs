use dockship_core::CONTAINER_PORT;

/// File name of the generated entry point.
pub const ENTRY_POINT_FILE: &str = "app.py";

/// Generates a single-route Flask application.
pub struct FlaskAppGenerator {
    greeting: &'static str,
    port: u16,
}

impl Default for FlaskAppGenerator {
    fn default() -> Self {
        Self {
            greeting: "Hello, World from Docker!",
            port: CONTAINER_PORT,
        }
    }
}

impl FlaskAppGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        format!(
            r#"
from flask import Flask
app = Flask(__name__)

@app.route('/')
def hello():
    return '{greeting}'

if __name__ == '__main__':
    app.run(host='0.0.0.0', port={port})
"#,
            greeting = self.greeting,
            port = self.port,
        )
    }
}
