mod commands;

use std::path::PathBuf;

use clap::Parser;
use dockship_core::ConfigOverrides;

#[derive(Parser)]
#[command(name = "dockship", about = "Automate Dockerized Flask app deployment")]
#[command(version)]
struct Cli {
    /// Name of the app directory [default: myapp]
    #[arg(long)]
    app_name: Option<String>,
    /// Name of the Docker image [default: myapp-image]
    #[arg(long)]
    image_name: Option<String>,
    /// Name of the Docker container [default: myapp-container]
    #[arg(long)]
    container_name: Option<String>,
    /// Host port mapped to the app [default: 5000]
    #[arg(long)]
    port: Option<String>,
    /// Container engine executable [default: docker]
    #[arg(long)]
    engine: Option<String>,
    /// Config file to read instead of ./dockship.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        app_name: cli.app_name,
        image_name: cli.image_name,
        container_name: cli.container_name,
        port: cli.port,
        engine: cli.engine,
    };

    commands::deploy(cli.config.as_deref(), overrides).await?;

    Ok(())
}
