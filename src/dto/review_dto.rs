use serde::{Deserialize, Serialize};

use crate::model::review::Review;

/// Wire representation of a product review.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub product_id: String,
    pub user_id: String,
    pub rating: i32,
    pub comment: String,
    pub review_date: Option<String>,
}

impl ReviewDto {
    pub fn into_model(self) -> Review {
        Review {
            id: None,
            product_id: self.product_id,
            user_id: self.user_id,
            rating: self.rating,
            comment: self.comment,
            review_date: self.review_date,
        }
    }
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        ReviewDto {
            id: review.id.map(|id| id.to_hex()),
            product_id: review.product_id,
            user_id: review.user_id,
            rating: review.rating,
            comment: review.comment,
            review_date: review.review_date,
        }
    }
}
