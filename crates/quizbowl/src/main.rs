use clap::Parser;
use quizbowl::{QuizError, QuizServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), QuizError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::parse();
    let server = QuizServer::from_config(&config).build().await?;

    tracing::info!(
        addr = %server.local_addr()?,
        static_dir = %config.static_dir.display(),
        "listening"
    );

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        })
        .await
}
