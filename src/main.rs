mod config;

use crate::config::Config;
use clap::Parser;
use eyre::{Report, WrapErr as _, eyre};
use patreon_webhooks::routes::{self, AppState, Delivery};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast::{self, Receiver, Sender, error::RecvError};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(about = "Receives and verifies Patreon webhooks")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Webhook secret; overrides `patreon.secret` from the config file
    #[arg(long, env = "PATREON_WEBHOOK_SECRET", hide_env_values = true)]
    secret: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(sentry::integrations::tracing::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "info,{}=trace,axum_serve=debug",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    let _sentry = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 1.0,
                ..Default::default()
            },
        ))
    });

    let secret = args
        .secret
        .or_else(|| config.patreon.secret.clone())
        .filter(|secret| !secret.is_empty())
        .ok_or_else(|| eyre!("no webhook secret: set patreon.secret or PATREON_WEBHOOK_SECRET"))?;

    let (tx, rx): (Sender<Delivery>, Receiver<Delivery>) = broadcast::channel(8);
    let app_state = Arc::new(AppState::new(secret).with_deliveries(tx));
    let subscriber = tokio::spawn(log_deliveries(rx));

    let listener = tokio::net::TcpListener::bind(&config.server.to_socket_addrs())
        .await
        .wrap_err("Failed to bind listener")?;
    info!("listening on {}", listener.local_addr()?);

    let app = routes::router().with_state(app_state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_err() {
                warn!("failed to install CTRL+C handler");
                std::future::pending::<()>().await;
            }
            info!("received CTRL+C, shutting down");
        })
        .await
        .wrap_err("Server error")?;

    subscriber.abort();
    Ok(())
}

async fn log_deliveries(mut rx: Receiver<Delivery>) {
    loop {
        match rx.recv().await {
            Ok(delivery) => {
                let tiers: Vec<&str> = delivery
                    .webhook
                    .data
                    .relationships
                    .currently_entitled_tiers
                    .ids()
                    .map(|id| id.as_str())
                    .collect();
                info!(
                    event = %delivery.event,
                    member = %delivery.webhook.data.id,
                    patron_status = ?delivery.webhook.data.attributes.patron_status,
                    entitled_tiers = ?tiers,
                    "delivery processed"
                );
            }
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "delivery log lagged"),
            Err(RecvError::Closed) => return,
        }
    }
}
