use std::path::Path;

use serde::{Deserialize, Serialize};

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "dockship.toml";

/// Port the scaffolded app listens on inside the container.
pub const CONTAINER_PORT: u16 = 5000;

/// dockship.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockshipConfig {
    #[serde(default)]
    pub deploy: DeployConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Settings for a single deployment run.
///
/// Values are passed to the container engine verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Directory the app is scaffolded into
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Tag given to the built image
    #[serde(default = "default_image_name")]
    pub image_name: String,
    /// Name given to the launched container
    #[serde(default = "default_container_name")]
    pub container_name: String,
    /// Host port mapped to the container port
    #[serde(default = "default_port")]
    pub port: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Container engine executable, resolved through PATH
    #[serde(default = "default_engine_binary")]
    pub binary: String,
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub app_name: Option<String>,
    pub image_name: Option<String>,
    pub container_name: Option<String>,
    pub port: Option<String>,
    pub engine: Option<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            image_name: default_image_name(),
            container_name: default_container_name(),
            port: default_port(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary: default_engine_binary(),
        }
    }
}

impl DeployConfig {
    /// URL the deployed app is reachable at from the host.
    pub fn access_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

impl DockshipConfig {
    /// Load from dockship.toml in the given directory, or return defaults if not found.
    pub fn load(dir: &Path) -> crate::Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_file(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Err(crate::Error::ConfigMissing(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| crate::Error::ConfigLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply command-line values on top of the loaded config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        let ConfigOverrides {
            app_name,
            image_name,
            container_name,
            port,
            engine,
        } = overrides;

        if let Some(v) = app_name {
            self.deploy.app_name = v;
        }
        if let Some(v) = image_name {
            self.deploy.image_name = v;
        }
        if let Some(v) = container_name {
            self.deploy.container_name = v;
        }
        if let Some(v) = port {
            self.deploy.port = v;
        }
        if let Some(v) = engine {
            self.engine.binary = v;
        }
        self
    }
}

fn default_app_name() -> String {
    "myapp".to_owned()
}

fn default_image_name() -> String {
    "myapp-image".to_owned()
}

fn default_container_name() -> String {
    "myapp-container".to_owned()
}

fn default_port() -> String {
    CONTAINER_PORT.to_string()
}

fn default_engine_binary() -> String {
    "docker".to_owned()
}
