//! Live order board - the staff-side materialized view of backend orders
//!
//! The backend exposes no push channel, so the board polls the full order
//! list on a fixed interval and detects newcomers by set difference against
//! the ids seen on the previous tick. Each non-empty batch of new pending
//! orders fires exactly one sound and one notification, and marks the ids
//! "new" for a fixed highlight window.

mod worker;

pub use worker::PollWorker;

use crate::{ClientResult, NewOrderAlert, Notifier, OrderApi};
use shared::models::{Order, OrderStatus};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a newly arrived order keeps its highlight
pub const HIGHLIGHT_WINDOW: Duration = Duration::from_secs(30);

/// Elapsed-time bucket for the kitchen display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    /// Waiting longer than 15 minutes
    Warning,
    /// Waiting longer than 30 minutes
    Critical,
}

/// Urgency bucket for an order's creation timestamp.
///
/// Unparseable timestamps count as `Normal`; the kitchen card just loses
/// its age accent.
pub fn urgency_for(order: &Order) -> Urgency {
    match shared::util::minutes_since(&order.order_date) {
        Some(m) if m > 30 => Urgency::Critical,
        Some(m) if m > 15 => Urgency::Warning,
        _ => Urgency::Normal,
    }
}

/// Staff-side order board state
pub struct OrderBoard {
    api: Arc<dyn OrderApi>,
    notifier: Arc<dyn Notifier>,
    restaurant_id: String,
    orders: Vec<Order>,
    /// Ids present as of the last completed poll
    seen_ids: HashSet<i64>,
    /// Newly arrived ids and when they were marked
    new_marks: HashMap<i64, Instant>,
    highlight_window: Duration,
}

impl OrderBoard {
    pub fn new(
        api: Arc<dyn OrderApi>,
        notifier: Arc<dyn Notifier>,
        restaurant_id: impl Into<String>,
    ) -> Self {
        Self {
            api,
            notifier,
            restaurant_id: restaurant_id.into(),
            orders: Vec::new(),
            seen_ids: HashSet::new(),
            new_marks: HashMap::new(),
            highlight_window: HIGHLIGHT_WINDOW,
        }
    }

    /// Override the highlight window (tests)
    pub fn with_highlight_window(mut self, window: Duration) -> Self {
        self.highlight_window = window;
        self
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn pending_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
    }

    /// Kitchen view: orders confirmed and not yet ready
    pub fn confirmed_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Confirmed)
    }

    /// Whether an order is still inside its new-order highlight window
    pub fn is_new(&self, order_id: i64) -> bool {
        self.new_marks
            .get(&order_id)
            .is_some_and(|marked| marked.elapsed() < self.highlight_window)
    }

    /// Fetch the current order list and update the board.
    ///
    /// Manual loads (`background == false`) replace state silently and
    /// propagate failures to the caller. Background polls additionally run
    /// new-order detection, and swallow failures into a log line so a
    /// transient backend hiccup never interrupts staff; the previous list
    /// stays on display until the next successful poll.
    pub async fn refresh(&mut self, background: bool) -> ClientResult<()> {
        let orders = match self.api.fetch_orders(&self.restaurant_id).await {
            Ok(orders) => orders,
            Err(e) if background => {
                tracing::warn!("Background order poll failed: {e}");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let current_ids: HashSet<i64> = orders.iter().map(|o| o.id).collect();

        if background {
            let delta: Vec<i64> = orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending && !self.seen_ids.contains(&o.id))
                .map(|o| o.id)
                .collect();

            if !delta.is_empty() {
                let now = Instant::now();
                for id in &delta {
                    self.new_marks.insert(*id, now);
                }
                let alert = NewOrderAlert::new(delta);
                tracing::info!(count = alert.count(), "New pending orders");
                self.notifier.play_sound();
                self.notifier.show_notification(&alert);
            }
        }

        // Seen set tracks the fetched ids whether or not anything was new
        self.seen_ids = current_ids;
        self.orders = orders;
        self.prune_expired_marks();
        Ok(())
    }

    fn prune_expired_marks(&mut self) {
        let window = self.highlight_window;
        self.new_marks
            .retain(|_, marked| marked.elapsed() < window);
    }

    /// Confirm a pending order, notify the customer, re-fetch.
    ///
    /// The SMS is best-effort: its failure is logged and does not roll back
    /// the status change. Status update and SMS are not transactional.
    pub async fn confirm(&mut self, order_id: i64, phone: &str) -> ClientResult<()> {
        self.api
            .update_order_status(order_id, OrderStatus::Confirmed)
            .await?;
        let text = format!("Your order #{order_id} has been confirmed! ✅");
        if let Err(e) = self.api.send_sms(phone, &text).await {
            tracing::error!("SMS sending failed: {e}");
        }
        self.refresh(false).await
    }

    /// Reject a pending order with an optional free-text reason
    pub async fn reject(
        &mut self,
        order_id: i64,
        phone: &str,
        reason: Option<&str>,
    ) -> ClientResult<()> {
        self.api
            .update_order_status(order_id, OrderStatus::Rejected)
            .await?;
        let text = match reason {
            Some(reason) if !reason.trim().is_empty() => {
                format!("Unfortunately, your order has been rejected. Reason: {reason} ❌")
            }
            _ => "Unfortunately, your order has been rejected. ❌".to_string(),
        };
        if let Err(e) = self.api.send_sms(phone, &text).await {
            tracing::error!("SMS sending failed: {e}");
        }
        self.refresh(false).await
    }

    /// Kitchen view: mark a confirmed order ready for pickup
    pub async fn ready(&mut self, order_id: i64, phone: &str) -> ClientResult<()> {
        self.api
            .update_order_status(order_id, OrderStatus::Ready)
            .await?;
        let text = format!("Your order #{order_id} is ready for pickup! 🍽️");
        if let Err(e) = self.api.send_sms(phone, &text).await {
            tracing::error!("SMS sending failed: {e}");
        }
        self.refresh(false).await
    }
}
