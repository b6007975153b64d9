use anyhow::Context;
use timeless_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("invalid configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());

    print_banner();
    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "Timeless server starting"
    );

    let state = ServerState::initialize(&config)
        .await
        .context("failed to initialize server state")?;

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}
