//! Menu Models
//!
//! The menu is owned and mutated by the backend; the customer page only
//! reads it. Prices travel as decimal strings on the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price, decimal string on the wire (e.g. "12.50")
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
}

/// Menu category with nested items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display position, persisted by the drag-reorder feature
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategoryCreate {
    pub restaurant_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub category_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON number on the wire, unlike the entity's decimal string
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
}

/// Update item payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        with = "rust_decimal::serde::float_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
}
