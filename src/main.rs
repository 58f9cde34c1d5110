use genstudio::{logger, server, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    logger::init_with_config(logger::LoggerConfig::development())?;

    let config = Config::from_env();
    let port = config.port.unwrap_or(8080);

    logger::log_startup_info("GenStudio", env!("CARGO_PKG_VERSION"), port);
    logger::log_config_info(&config);

    match &config.api_key {
        Some(key) => {
            log::info!("✅ Gemini API key found in environment");
            log::debug!("API key starts with: {}...", &key[..5.min(key.len())]);
        }
        None => {
            log::warn!("⚠️  No GEMINI_API_KEY or API_KEY set");
            log::warn!("💡 The server will start, but generation requests will be refused");
        }
    }

    server::run(config).await?;

    Ok(())
}
