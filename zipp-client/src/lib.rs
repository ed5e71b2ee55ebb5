//! Zipp Client - client core for the hosted ordering backend
//!
//! Two cooperating subsystems:
//!
//! - [`cart`] / [`checkout`] — the customer-facing draft order: line merge,
//!   quantity edits, totals, single-shot submission.
//! - [`board`] — the staff-facing live order board: periodic polling,
//!   new-order delta detection, notification dispatch, confirm/reject.
//!
//! Everything talks to the backend through [`api::BackendApi`], a typed
//! wrapper over the REST endpoints.

pub mod api;
pub mod board;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod notify;
pub mod route;
pub mod upload;

pub use api::{BackendApi, OrderApi};
pub use board::{OrderBoard, PollWorker, Urgency, urgency_for};
pub use cart::{Cart, CartLine};
pub use checkout::{CheckoutFlow, CheckoutState, CustomerInfo};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use notify::{NewOrderAlert, Notifier, TracingNotifier};
pub use route::TableRoute;
pub use upload::ImageUpload;

// Re-export shared types for convenience
pub use shared::models::{MenuCategory, MenuItem, Order, OrderStatus};
pub use shared::types::{Location, Plan};
pub use shared::{ApiResponse, from_code, to_code};
