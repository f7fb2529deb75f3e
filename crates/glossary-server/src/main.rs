use glossary_server::config::ServerConfig;
use anyhow::{Result, Context};

#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging first so configuration warnings are not lost
    glossary_server::init_logging(&ServerConfig::log_level_from_env());

    // Load configuration from environment variables
    let config = ServerConfig::load()
        .context("Failed to load configuration")?;

    // Run the server using the library's run function
    glossary_server::run(config).await
        .context("Server error")?;

    Ok(())
}
