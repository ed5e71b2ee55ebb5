//! Common enumerations shared between the ordering flow and the back office

use serde::{Deserialize, Serialize};

/// Fulfillment location for a draft order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    #[serde(rename = "Dine-in")]
    DineIn,
    #[serde(rename = "Takeaway")]
    Takeaway,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::DineIn => "Dine-in",
            Location::Takeaway => "Takeaway",
        }
    }
}

/// Subscription plan from the identity provider's public metadata.
///
/// Standard-plan accounts get the QR-only admin view; everything else sees
/// the full order board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Standard,
    #[default]
    #[serde(other)]
    Full,
}

impl Plan {
    pub fn is_qr_only(&self) -> bool {
        matches!(self, Plan::Standard)
    }
}
