//! Feedback Models

use serde::{Deserialize, Serialize};

/// Customer feedback entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    #[serde(default)]
    pub customer_name: String,
    /// 1..=5 stars
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: String,
}

/// One page of feedbacks (GET /feedbacks/{restaurantId}?page&limit)
///
/// The endpoint has shipped both paginated (`{feedbacks, total}`) and bare
/// array responses; `total` defaults to the page length when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedbackPage {
    #[serde(default)]
    pub feedbacks: Vec<Feedback>,
    #[serde(default)]
    pub total: u64,
}

impl FeedbackPage {
    /// Number of pages at the given page size
    pub fn total_pages(&self, limit: u32) -> u32 {
        if limit == 0 {
            return 0;
        }
        self.total.div_ceil(limit as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = FeedbackPage {
            feedbacks: vec![],
            total: 21,
        };
        assert_eq!(page.total_pages(10), 3);
        assert_eq!(page.total_pages(0), 0);
    }

    #[test]
    fn paginated_shape_deserializes() {
        let json = r#"{
            "feedbacks": [
                {"id": 1, "customerName": "Ada", "rating": 5,
                 "comment": "great", "createdAt": "2025-06-01T12:00:00Z"}
            ],
            "total": 1
        }"#;
        let page: FeedbackPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.feedbacks[0].rating, 5);
        assert_eq!(page.total, 1);
    }
}
