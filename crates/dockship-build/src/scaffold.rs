use std::path::{Path, PathBuf};

use crate::app::{ENTRY_POINT_FILE, FlaskAppGenerator};
use crate::dockerfile::{DOCKERFILE, DockerfileGenerator};

/// Paths written by [`scaffold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub entry_point: PathBuf,
    pub dockerfile: PathBuf,
}

/// Write the Flask entry point into `app_dir`, creating the directory
/// (and any parents) if needed. Existing content is replaced.
pub fn write_entry_point(app_dir: &Path) -> Result<PathBuf, ScaffoldError> {
    ensure_named(app_dir)?;
    std::fs::create_dir_all(app_dir).map_err(|e| ScaffoldError::CreateDir {
        path: app_dir.to_path_buf(),
        source: e,
    })?;

    let path = app_dir.join(ENTRY_POINT_FILE);
    write_file(&path, &FlaskAppGenerator::new().render())?;
    Ok(path)
}

/// Write the Dockerfile into `app_dir`. The directory must already exist.
pub fn write_build_descriptor(app_dir: &Path) -> Result<PathBuf, ScaffoldError> {
    ensure_named(app_dir)?;
    let path = app_dir.join(DOCKERFILE);
    write_file(&path, &DockerfileGenerator::new().render())?;
    Ok(path)
}

/// Write both files in order: entry point, then Dockerfile.
pub fn scaffold(app_dir: &Path) -> Result<Scaffolded, ScaffoldError> {
    let entry_point = write_entry_point(app_dir)?;
    let dockerfile = write_build_descriptor(app_dir)?;
    Ok(Scaffolded {
        entry_point,
        dockerfile,
    })
}

// An empty path would resolve to the working directory.
fn ensure_named(app_dir: &Path) -> Result<(), ScaffoldError> {
    if app_dir.as_os_str().is_empty() {
        return Err(ScaffoldError::EmptyAppDir);
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    std::fs::write(path, content).map_err(|e| ScaffoldError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote scaffold file");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("app directory name must not be empty")]
    EmptyAppDir,
    #[error("failed to create app directory {path}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
