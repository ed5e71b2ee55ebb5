//! PollWorker - background polling loop for the order board
//!
//! Fires a background refresh on a fixed interval until cancelled. Each
//! tick awaits its refresh before the loop can observe the next one, so
//! in-flight requests never overlap even when the backend is slower than
//! the interval.

use super::OrderBoard;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

pub struct PollWorker {
    board: Arc<Mutex<OrderBoard>>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl PollWorker {
    pub fn new(
        board: Arc<Mutex<OrderBoard>>,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            board,
            interval,
            shutdown,
        }
    }

    /// Run the polling loop
    ///
    /// The initial load is the caller's manual refresh; the first interval
    /// tick is skipped so the worker does not duplicate it. Poll failures
    /// are swallowed inside `refresh(true)` and never stop the loop.
    pub async fn run(self) {
        tracing::info!(interval_secs = self.interval.as_secs(), "PollWorker started");

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        interval.tick().await; // skip immediate tick

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    tracing::info!("PollWorker shutting down");
                    break;
                }

                _ = interval.tick() => {
                    let mut board = self.board.lock().await;
                    if let Err(e) = board.refresh(true).await {
                        // refresh(true) swallows poll failures; anything else
                        // is unexpected enough to log at error level
                        tracing::error!("Background refresh failed: {e}");
                    }
                }
            }
        }

        tracing::info!("PollWorker stopped");
    }

    /// Spawn the worker onto the current runtime
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientResult, NewOrderAlert, Notifier, OrderApi};
    use async_trait::async_trait;
    use shared::models::{Order, OrderStatus};
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingApi {
        fetches: AtomicU32,
    }

    #[async_trait]
    impl OrderApi for CountingApi {
        async fn fetch_orders(&self, _restaurant_id: &str) -> ClientResult<Vec<Order>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn update_order_status(&self, _id: i64, _status: OrderStatus) -> ClientResult<()> {
            Ok(())
        }

        async fn send_sms(&self, _to: &str, _text: &str) -> ClientResult<()> {
            Ok(())
        }
    }

    struct SilentNotifier;

    impl Notifier for SilentNotifier {
        fn play_sound(&self) {}
        fn show_notification(&self, _alert: &NewOrderAlert) {}
    }

    #[tokio::test(start_paused = true)]
    async fn polls_on_the_interval_until_cancelled() {
        let api = Arc::new(CountingApi {
            fetches: AtomicU32::new(0),
        });
        let board = Arc::new(Mutex::new(OrderBoard::new(
            api.clone(),
            Arc::new(SilentNotifier),
            "rest_123",
        )));

        let shutdown = CancellationToken::new();
        let handle = PollWorker::new(board, Duration::from_secs(30), shutdown.clone()).spawn();

        // No immediate poll on startup
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(api.fetches.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(api.fetches.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(api.fetches.load(Ordering::SeqCst), 3);

        shutdown.cancel();
        handle.await.unwrap();
        let count = api.fetches.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(api.fetches.load(Ordering::SeqCst), count);
    }
}
