#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("container engine `{binary}` could not be started; is it installed and on PATH?")]
    NotFound {
        binary: String,
        source: std::io::Error,
    },

    #[error("container engine command failed: {args:?}\n{stderr}")]
    CommandFailed { args: Vec<String>, stderr: String },
}
