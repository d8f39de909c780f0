use cafe_server::{Server, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, configuration, logging
    let config = setup_environment()?;

    tracing::info!(
        environment = %config.environment,
        debug = config.debug,
        "Cafe server starting..."
    );

    // 2. Open the database and serve until Ctrl-C
    if let Err(e) = Server::new(config).run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
