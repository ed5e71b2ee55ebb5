//! Typed wrappers over the hosted backend's REST endpoints
//!
//! The base path is fixed by [`crate::ClientConfig`]; every method maps to
//! exactly one endpoint. The [`OrderApi`] trait is the seam the live order
//! board polls through, so tests can substitute a scripted backend.

use crate::{ClientConfig, ClientResult, HttpClient};
use async_trait::async_trait;
use shared::models::{
    AnalyticsReport, FeedbackPage, MenuCategory, MenuCategoryCreate, MenuCategoryUpdate,
    MenuItemCreate, MenuItemUpdate, Order, OrderCreate, OrderStatus, OrderStatusUpdate, SmsSend,
};

/// Order-side backend surface used by the live order board
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Fetch the full order list for a restaurant
    async fn fetch_orders(&self, restaurant_id: &str) -> ClientResult<Vec<Order>>;

    /// Request a status transition; the backend is the authority on legality
    async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<()>;

    /// Send a customer-facing SMS
    async fn send_sms(&self, to: &str, text: &str) -> ClientResult<()>;
}

/// Typed client for the hosted backend
#[derive(Debug, Clone)]
pub struct BackendApi {
    http: HttpClient,
}

impl BackendApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: config.build_http_client(),
        }
    }

    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    // ========== Menu ==========

    /// GET /menu/{restaurantId} — categories with nested items
    pub async fn fetch_menu(&self, restaurant_id: &str) -> ClientResult<Vec<MenuCategory>> {
        self.http
            .get_enveloped(&format!("menu/{restaurant_id}"))
            .await
    }

    /// POST /menu/category
    pub async fn create_category(&self, payload: &MenuCategoryCreate) -> ClientResult<()> {
        self.http.post_checked("menu/category", payload).await
    }

    /// PUT /menu/category/{id}
    pub async fn update_category(&self, id: i64, payload: &MenuCategoryUpdate) -> ClientResult<()> {
        self.http
            .put_checked(&format!("menu/category/{id}"), payload)
            .await
    }

    /// DELETE /menu/category/{id}
    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete_checked(&format!("menu/category/{id}"))
            .await
    }

    /// POST /menu/item
    pub async fn create_item(&self, payload: &MenuItemCreate) -> ClientResult<()> {
        self.http.post_checked("menu/item", payload).await
    }

    /// PUT /menu/item/{id}
    pub async fn update_item(&self, id: i64, payload: &MenuItemUpdate) -> ClientResult<()> {
        self.http
            .put_checked(&format!("menu/item/{id}"), payload)
            .await
    }

    /// DELETE /menu/item/{id}
    pub async fn delete_item(&self, id: i64) -> ClientResult<()> {
        self.http.delete_checked(&format!("menu/item/{id}")).await
    }

    // ========== Orders ==========

    /// POST /orders/create — single-shot checkout submission.
    ///
    /// Carries no idempotency key; a retry after a false-negative network
    /// error can create a duplicate backend order.
    pub async fn create_order(&self, payload: &OrderCreate) -> ClientResult<()> {
        self.http.post_checked("orders/create", payload).await
    }

    // ========== Analytics / Feedbacks ==========

    /// GET /analytics/{restaurantId}/{startDate}/{endDate}
    pub async fn fetch_analytics(
        &self,
        restaurant_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> ClientResult<AnalyticsReport> {
        self.http
            .get_enveloped(&format!("analytics/{restaurant_id}/{start_date}/{end_date}"))
            .await
    }

    /// GET /feedbacks/{restaurantId}?page&limit
    pub async fn fetch_feedbacks(
        &self,
        restaurant_id: &str,
        page: u32,
        limit: u32,
    ) -> ClientResult<FeedbackPage> {
        self.http
            .get(&format!("feedbacks/{restaurant_id}?page={page}&limit={limit}"))
            .await
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[async_trait]
impl OrderApi for BackendApi {
    /// GET /orders/{restaurantId} — full list, no server-side pagination
    async fn fetch_orders(&self, restaurant_id: &str) -> ClientResult<Vec<Order>> {
        self.http.get(&format!("orders/{restaurant_id}")).await
    }

    /// POST /orders/update-status
    async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<()> {
        self.http
            .post_status_only("orders/update-status", &OrderStatusUpdate { id, status })
            .await
    }

    /// POST /sms/send-sms
    async fn send_sms(&self, to: &str, text: &str) -> ClientResult<()> {
        self.http
            .post_status_only(
                "sms/send-sms",
                &SmsSend {
                    to: to.to_string(),
                    text: text.to_string(),
                },
            )
            .await
    }
}
