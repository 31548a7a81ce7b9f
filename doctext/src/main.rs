use clap::Parser;

use doctext::api::{create_router, AppState};
use doctext::config::Config;
use doctext::telemetry;

#[derive(Parser)]
#[command(name = "doctext")]
#[command(about = "Extract plain text from uploaded PDF, DOCX, TXT and ZIP files")]
struct Args {
    /// Address to bind (overrides DOCTEXT_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides DOCTEXT_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    telemetry::init(config.logging.format);

    let addr = config.bind_address();
    tracing::info!(
        max_upload_bytes = config.limits.max_upload_bytes,
        max_entry_bytes = config.limits.max_entry_bytes,
        "Starting doctext"
    );

    let app = create_router(AppState::new(config));

    tracing::info!("doctext listening on http://{}", addr);
    tracing::info!("  Upload:   POST http://{}/upload", addr);
    tracing::info!("  API docs: http://{}/docs", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests...");
}
