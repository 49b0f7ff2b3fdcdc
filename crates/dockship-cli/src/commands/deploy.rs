use dockship_build::scaffold;
use dockship_core::{ConfigOverrides, DockshipConfig};
use dockship_engine::{EngineClient, EngineExecutor};
use std::path::Path;

/// Execute the full pipeline: scaffold, build, run.
pub async fn deploy(config_path: Option<&Path>, overrides: ConfigOverrides) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => DockshipConfig::load_file(path)?,
        None => DockshipConfig::load(Path::new("."))?,
    }
    .with_overrides(overrides);

    tracing::debug!(?config, "resolved configuration");

    let client = EngineClient::new(config.engine.binary.clone());
    run_pipeline(&client, &config).await
}

async fn run_pipeline<E: EngineExecutor>(
    client: &EngineClient<E>,
    config: &DockshipConfig,
) -> anyhow::Result<()> {
    let deploy = &config.deploy;
    let app_dir = Path::new(&deploy.app_name);

    println!("Starting deployment automation...");

    let written = scaffold(app_dir)?;
    println!("Flask app created in {}", written.entry_point.display());
    println!("Dockerfile created for {}", deploy.app_name);

    let stdout = client.build_image(&deploy.app_name, &deploy.image_name).await?;
    println!("{stdout}");

    let stdout = client
        .run_container(&deploy.image_name, &deploy.container_name, &deploy.port)
        .await?;
    println!("{stdout}");

    println!("Deployment complete! Access at {}", deploy.access_url());

    Ok(())
}
