//! Shared types for the zipp client core
//!
//! Wire-format models, the backend response envelope, and the restaurant
//! code codec used by both the customer ordering flow and the staff board.

pub mod code;
pub mod models;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use code::{CodeError, from_code, to_code};
pub use response::ApiResponse;
