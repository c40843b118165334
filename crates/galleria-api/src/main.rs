use galleria_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    galleria_api::telemetry::init_telemetry();

    let state = galleria_api::setup::build_state(&config)?;
    let router = galleria_api::setup::build_router(&config, state);

    galleria_api::setup::start_server(&config, router).await?;

    Ok(())
}
