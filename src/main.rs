//! NLP Suite Server - demonstration HTTP backend binary.

use server::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading configuration
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    server::start_server(config).await?;

    Ok(())
}
