//! Analytics Models
//!
//! The analytics endpoint packs its aggregates into a positional array:
//!
//! ```json
//! [numOfOrders, loyalCustomers, mostOrdered,
//!  [leastOrdered, averageOrderValue, peakOrderTimes]]
//! ```
//!
//! `AnalyticsReport` flattens that into named fields.

use serde::{Deserialize, Serialize};

/// Repeat customer aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoyalCustomer {
    pub phone_number: String,
    #[serde(rename = "_count")]
    pub count: CustomerCount,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCount {
    pub phone_number: u64,
}

/// Per-item order count aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemStat {
    pub item_id: String,
    pub item_name: String,
    pub order_count: u64,
    pub price: f64,
}

/// Orders-per-hour aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeakTime {
    pub hour: u8,
    pub order_count: u64,
    pub time_range: String,
}

/// Aggregated sales report for a date range
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(from = "AnalyticsWire", into = "AnalyticsWire")]
pub struct AnalyticsReport {
    pub num_of_orders: u64,
    pub loyal_customers: Vec<LoyalCustomer>,
    pub most_ordered: Vec<ItemStat>,
    pub least_ordered: Vec<ItemStat>,
    pub average_order_value: f64,
    pub peak_order_times: Vec<PeakTime>,
}

/// Positional wire shape of the analytics payload
#[derive(Serialize, Deserialize)]
struct AnalyticsWire(
    u64,
    Vec<LoyalCustomer>,
    Vec<ItemStat>,
    (Vec<ItemStat>, f64, Vec<PeakTime>),
);

impl From<AnalyticsWire> for AnalyticsReport {
    fn from(w: AnalyticsWire) -> Self {
        let AnalyticsWire(num_of_orders, loyal_customers, most_ordered, tail) = w;
        let (least_ordered, average_order_value, peak_order_times) = tail;
        Self {
            num_of_orders,
            loyal_customers,
            most_ordered,
            least_ordered,
            average_order_value,
            peak_order_times,
        }
    }
}

impl From<AnalyticsReport> for AnalyticsWire {
    fn from(r: AnalyticsReport) -> Self {
        AnalyticsWire(
            r.num_of_orders,
            r.loyal_customers,
            r.most_ordered,
            (r.least_ordered, r.average_order_value, r.peak_order_times),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_payload_deserializes() {
        let json = r#"[
            42,
            [{"phoneNumber": "+34600111222", "_count": {"phoneNumber": 5}}],
            [{"itemId": "7", "itemName": "Carbonara", "orderCount": 30, "price": 11.95}],
            [
                [{"itemId": "9", "itemName": "Tiramisu", "orderCount": 2, "price": 6.0}],
                17.4,
                [{"hour": 13, "orderCount": 11, "timeRange": "13:00 - 14:00"}]
            ]
        ]"#;
        let report: AnalyticsReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.num_of_orders, 42);
        assert_eq!(report.loyal_customers[0].count.phone_number, 5);
        assert_eq!(report.most_ordered[0].item_name, "Carbonara");
        assert_eq!(report.least_ordered[0].item_name, "Tiramisu");
        assert_eq!(report.average_order_value, 17.4);
        assert_eq!(report.peak_order_times[0].hour, 13);
    }
}
