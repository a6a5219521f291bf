use std::sync::Arc;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tokio::sync::broadcast::Sender;

pub mod patreon;

pub use patreon::Delivery;

pub type SharedAppState = Arc<AppState>;

pub struct AppState {
    secret: String,
    tx: Option<Sender<Delivery>>,
}

impl AppState {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            tx: None,
        }
    }

    /// Publishes every accepted delivery on `tx`.
    pub fn with_deliveries(mut self, tx: Sender<Delivery>) -> Self {
        self.tx = Some(tx);
        self
    }
}

pub fn router() -> Router<SharedAppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/webhook", post(patreon::handler))
}

pub async fn home_handler() -> impl IntoResponse {
    "OK"
}
