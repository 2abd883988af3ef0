use anyhow::Context;
use portfolio::configuration::get_configuration;
use portfolio::startup::Application;
use portfolio::telemetry;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = telemetry::get_subscriber("portfolio".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration")?;
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
