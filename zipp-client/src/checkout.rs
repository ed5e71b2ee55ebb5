//! Checkout flow - from cart review to a single submitted order
//!
//! Dialog lifecycle:
//!
//! ```text
//! Closed -> ReviewingCart -> FillingDetails -> Submitting
//!                                 ^                 |
//!                                 |   failure       v
//!                                 +----------- SuccessView
//! ```
//!
//! `SuccessView` has one exit ("order again") back to `Closed` with a fully
//! reset draft. Failures keep the cart intact so the customer can resubmit.

use crate::{BackendApi, Cart, ClientError, ClientResult, TableRoute};
use shared::models::OrderCreate;
use shared::types::Location;

/// Checkout form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerInfo {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub special_instructions: String,
    pub location: Location,
}

/// Checkout dialog state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    #[default]
    Closed,
    /// Cart dialog open, reviewing lines
    ReviewingCart,
    /// Checkout dialog open, filling customer details
    FillingDetails,
    /// Order-create request in flight
    Submitting,
    /// Order accepted; cart cleared
    SuccessView,
}

/// Customer-side order lifecycle: cart, form fields, and dialog state
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    route: TableRoute,
    cart: Cart,
    info: CustomerInfo,
    state: CheckoutState,
    last_error: Option<String>,
}

impl CheckoutFlow {
    pub fn new(route: TableRoute) -> Self {
        Self {
            route,
            cart: Cart::new(),
            info: CustomerInfo::default(),
            state: CheckoutState::Closed,
            last_error: None,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn info(&self) -> &CustomerInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut CustomerInfo {
        &mut self.info
    }

    pub fn route(&self) -> &TableRoute {
        &self.route
    }

    /// Error from the last failed submission, for the blocking alert
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Open the cart dialog
    pub fn open_cart(&mut self) {
        if self.state == CheckoutState::Closed {
            self.state = CheckoutState::ReviewingCart;
        }
    }

    /// Move from cart review to the details form
    pub fn proceed_to_checkout(&mut self) {
        if self.state == CheckoutState::ReviewingCart {
            self.state = CheckoutState::FillingDetails;
        }
    }

    /// Dismiss an open dialog; no-op while a submission is in flight
    pub fn close(&mut self) {
        if matches!(
            self.state,
            CheckoutState::ReviewingCart | CheckoutState::FillingDetails
        ) {
            self.state = CheckoutState::Closed;
        }
    }

    /// Leave the success view and start a fresh, empty draft
    pub fn order_again(&mut self) {
        if self.state == CheckoutState::SuccessView {
            self.state = CheckoutState::Closed;
            self.last_error = None;
        }
    }

    /// Validate the draft and build the order-create payload.
    ///
    /// Validation failures happen before any network call: an empty cart or
    /// a missing phone number never reaches the backend.
    pub fn build_order(&self) -> ClientResult<OrderCreate> {
        if self.cart.is_empty() {
            return Err(ClientError::Validation(
                "Add items to your cart before submitting".to_string(),
            ));
        }
        if self.info.phone_number.trim().is_empty() {
            return Err(ClientError::Validation(
                "Please fill in your phone number".to_string(),
            ));
        }

        Ok(OrderCreate {
            restaurant_id: self.route.restaurant_id.clone(),
            phone_number: self.info.phone_number.clone(),
            first_name: self.info.first_name.clone(),
            last_name: self.info.last_name.clone(),
            order_items: self.cart.to_order_items(),
            total_amount: self.cart.total_price(),
            special_instructions: self.info.special_instructions.clone(),
            location: self.info.location,
            table: self.route.table.clone(),
        })
    }

    /// Submit the draft order.
    ///
    /// Exactly one request per call; there is no client-side dedup token, so
    /// a retry after a false-negative network error can create a duplicate
    /// backend order. Failures leave the cart untouched for resubmission.
    pub async fn submit(&mut self, api: &BackendApi) -> ClientResult<()> {
        let payload = self.build_order()?;
        self.state = CheckoutState::Submitting;

        match api.create_order(&payload).await {
            Ok(()) => {
                self.finish_success();
                Ok(())
            }
            Err(e) => {
                self.fail_submission(&e);
                Err(e)
            }
        }
    }

    fn finish_success(&mut self) {
        self.cart.clear();
        self.info = CustomerInfo::default();
        self.state = CheckoutState::SuccessView;
        self.last_error = None;
    }

    fn fail_submission(&mut self, error: &ClientError) {
        self.state = CheckoutState::FillingDetails;
        self.last_error = Some(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::MenuItem;

    fn flow_with_cart() -> CheckoutFlow {
        let mut flow = CheckoutFlow::new(TableRoute::new("rest_123", "T7"));
        let item = MenuItem {
            id: 1,
            name: "Margherita".to_string(),
            description: None,
            price: "12.50".parse().unwrap(),
            image_url: None,
            is_available: true,
            ingredients: None,
        };
        flow.cart_mut().add_line(&item, "Pizza", 2, None).unwrap();
        flow
    }

    #[test]
    fn dialog_transitions() {
        let mut flow = flow_with_cart();
        assert_eq!(flow.state(), CheckoutState::Closed);
        flow.open_cart();
        assert_eq!(flow.state(), CheckoutState::ReviewingCart);
        flow.proceed_to_checkout();
        assert_eq!(flow.state(), CheckoutState::FillingDetails);
        flow.close();
        assert_eq!(flow.state(), CheckoutState::Closed);
    }

    #[test]
    fn proceed_requires_open_cart() {
        let mut flow = flow_with_cart();
        flow.proceed_to_checkout();
        assert_eq!(flow.state(), CheckoutState::Closed);
    }

    #[test]
    fn empty_cart_is_rejected_before_any_network_call() {
        let mut flow = CheckoutFlow::new(TableRoute::new("rest_123", "T7"));
        flow.info_mut().phone_number = "+34600111222".to_string();
        let err = flow.build_order().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn missing_phone_is_rejected_before_any_network_call() {
        let flow = flow_with_cart();
        let err = flow.build_order().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn order_carries_route_identity_and_snapshot() {
        let mut flow = flow_with_cart();
        flow.info_mut().phone_number = "+34600111222".to_string();
        flow.info_mut().special_instructions = "ring twice".to_string();

        let order = flow.build_order().unwrap();
        assert_eq!(order.restaurant_id, "rest_123");
        assert_eq!(order.table, "T7");
        assert_eq!(order.location, Location::DineIn);
        assert_eq!(order.order_items.len(), 1);
        assert_eq!(order.order_items[0].quantity, 2);
        assert_eq!(order.total_amount, Decimal::new(2500, 2));
        assert_eq!(order.special_instructions, "ring twice");
    }

    #[test]
    fn success_clears_cart_and_shows_success_view() {
        let mut flow = flow_with_cart();
        flow.info_mut().phone_number = "+34600111222".to_string();
        flow.open_cart();
        flow.proceed_to_checkout();

        flow.finish_success();
        assert_eq!(flow.state(), CheckoutState::SuccessView);
        assert!(flow.cart().is_empty());
        assert_eq!(flow.info(), &CustomerInfo::default());
        assert!(flow.last_error().is_none());

        flow.order_again();
        assert_eq!(flow.state(), CheckoutState::Closed);
        assert!(flow.cart().is_empty());
    }

    #[test]
    fn failure_keeps_cart_for_resubmission() {
        let mut flow = flow_with_cart();
        flow.info_mut().phone_number = "+34600111222".to_string();
        flow.open_cart();
        flow.proceed_to_checkout();

        flow.fail_submission(&ClientError::Api("Failed to submit order".to_string()));
        assert_eq!(flow.state(), CheckoutState::FillingDetails);
        assert_eq!(flow.cart().total_item_count(), 2);
        assert_eq!(flow.last_error(), Some("Failed to submit order"));
        assert!(flow.build_order().is_ok());
    }
}
