//! acadmin web shell.
//!
//! Run with: cargo run -p acadmin-web

use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use acadmin_client::RecordsClient;
use acadmin_config::Config;
use acadmin_web::router::build_router;
use acadmin_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load()?;
    info!(api = %config.api.base_url, "starting acadmin web shell");

    let api = RecordsClient::new(&config.api)?;
    let app = build_router(AppState::new(api));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
