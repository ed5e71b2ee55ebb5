//! Order Models
//!
//! Orders are backend-owned. The client creates them once at checkout and
//! afterwards only requests status transitions; line items are snapshots
//! taken at submission time, not live references into the menu.

use crate::types::Location;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status
///
/// Transitions driven from the UI: pending -> confirmed and
/// pending -> rejected (admin board), confirmed -> ready (kitchen).
/// The backend is the authority on legality; the client only disables
/// action buttons once an order is ready.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Ready,
    Completed,
    Rejected,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// Whether the staff action buttons (confirm / reject) are still enabled
    pub fn is_actionable(&self) -> bool {
        !matches!(self, OrderStatus::Ready)
    }
}

/// Ordered line item snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub name: String,
    /// Unit price at submission time, JSON number on the wire
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    /// RFC 3339 creation timestamp
    pub order_date: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Create order payload (POST /orders/create)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub restaurant_id: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub order_items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub special_instructions: String,
    pub location: Location,
    pub table: String,
}

/// Update status payload (POST /orders/update-status)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub id: i64,
    pub status: OrderStatus,
}

/// SMS send payload (POST /sms/send-sms)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsSend {
    pub to: String,
    pub text: String,
}
