//! Notification seam for the live order board
//!
//! The board announces each batch of newly arrived pending orders exactly
//! once: one sound, one notification. The actual audio element and the
//! browser Notification API live on the other side of the [`Notifier`]
//! trait; this crate only decides *when* to fire and with what text.

/// Summary of one batch of newly arrived pending orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderAlert {
    /// Ids of the orders that appeared since the previous poll
    pub order_ids: Vec<i64>,
}

impl NewOrderAlert {
    pub fn new(mut order_ids: Vec<i64>) -> Self {
        order_ids.sort_unstable();
        Self { order_ids }
    }

    pub fn count(&self) -> usize {
        self.order_ids.len()
    }

    pub fn title(&self) -> String {
        if self.count() == 1 {
            "New order received".to_string()
        } else {
            format!("{} new orders received", self.count())
        }
    }

    pub fn body(&self) -> String {
        if self.count() == 1 {
            format!("Order #{} is waiting for confirmation", self.order_ids[0])
        } else {
            format!("{} orders are waiting for confirmation", self.count())
        }
    }
}

/// Sink for the board's audio/visual announcements
///
/// Implementations are best-effort: a failed sound or a denied notification
/// permission must never disturb the board itself.
pub trait Notifier: Send + Sync {
    /// Play the local notification sound once
    fn play_sound(&self);

    /// Raise a single notification summarizing the batch
    fn show_notification(&self, alert: &NewOrderAlert);
}

/// Default sink that logs instead of making noise
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn play_sound(&self) {
        tracing::info!("notification sound");
    }

    fn show_notification(&self, alert: &NewOrderAlert) {
        tracing::info!(title = %alert.title(), body = %alert.body(), "notification");
    }
}
