use anyhow::Context;
use summarize_service::config::Config;
use summarize_service::observability::init_tracing;
use summarize_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    init_tracing(&config.log_level, config.log_format);

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
