//! Wire-format models for the hosted backend

pub mod analytics;
pub mod feedback;
pub mod menu;
pub mod order;

pub use analytics::{AnalyticsReport, ItemStat, LoyalCustomer, PeakTime};
pub use feedback::{Feedback, FeedbackPage};
pub use menu::{
    MenuCategory, MenuCategoryCreate, MenuCategoryUpdate, MenuItem, MenuItemCreate, MenuItemUpdate,
};
pub use order::{Order, OrderCreate, OrderItem, OrderStatus, OrderStatusUpdate, SmsSend};
