//! Live order board demo
//!
//! Polls the hosted backend for one restaurant and logs every new pending
//! order. Stop with Ctrl+C.
//!
//! ```bash
//! cargo run --example order_board -- rest_123
//! ```

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use zipp_client::{BackendApi, ClientConfig, OrderBoard, PollWorker, TracingNotifier, urgency_for};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let restaurant_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rest_123".to_string());

    let config = ClientConfig::default().with_poll_interval(Duration::from_secs(30));
    let api = Arc::new(BackendApi::new(&config));

    let mut board = OrderBoard::new(api, Arc::new(TracingNotifier), &restaurant_id);
    board.refresh(false).await?;

    for order in board.orders() {
        tracing::info!(
            id = order.id,
            status = order.status.as_str(),
            urgency = ?urgency_for(order),
            total = %order.total_amount,
            "order"
        );
    }

    let board = Arc::new(Mutex::new(board));
    let shutdown = CancellationToken::new();
    let worker = PollWorker::new(board.clone(), config.poll_interval, shutdown.clone()).spawn();

    tokio::signal::ctrl_c().await?;
    shutdown.cancel();
    worker.await?;

    let board = board.lock().await;
    tracing::info!(
        pending = board.pending_orders().count(),
        confirmed = board.confirmed_orders().count(),
        "final board state"
    );
    Ok(())
}
