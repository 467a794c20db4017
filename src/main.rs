use linkpreview::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    tracing::info!("Starting link preview bot");

    bot::start::start_bot(&config).await
}
