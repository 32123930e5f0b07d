use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use tracing::{error, info};

use crate::model::review::Review;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const COLLECTION: &str = "DB_RESENAS";

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: Review) -> RepositoryResult<Review>;
    /// Derived finder: all reviews whose `producto_id` equals the given value.
    async fn find_by_product_id(&self, product_id: &str) -> RepositoryResult<Vec<Review>>;
}

pub struct MongoReviewRepository {
    collection: mongodb::Collection<Review>,
}

impl MongoReviewRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoReviewRepository {
            collection: db.collection::<Review>(COLLECTION),
        }
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    #[tracing::instrument(skip(self, review), fields(product_id = %review.product_id))]
    async fn insert(&self, mut review: Review) -> RepositoryResult<Review> {
        review.id = Some(ObjectId::new());
        if review.review_date.is_none() {
            review.review_date = Some(chrono::Local::now().to_rfc3339());
        }
        let result = self.collection.insert_one(review.clone(), None).await;
        match result {
            Ok(_) => {
                info!("Review created successfully");
                Ok(review)
            }
            Err(e) => {
                error!("Failed to insert review: {}", e);
                Err(RepositoryError::database(format!("Failed to insert review: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(product_id = %product_id))]
    async fn find_by_product_id(&self, product_id: &str) -> RepositoryResult<Vec<Review>> {
        let filter = doc! { "producto_id": product_id };
        let mut cursor = self
            .collection
            .find(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list reviews: {}", e)))?;
        let mut reviews = Vec::new();
        while let Some(review) = cursor.next().await {
            match review {
                Ok(r) => reviews.push(r),
                Err(e) => {
                    error!("Failed to deserialize review: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize review: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} reviews for product", reviews.len());
        Ok(reviews)
    }
}
