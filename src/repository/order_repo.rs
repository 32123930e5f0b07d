use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use tracing::{error, info};

use crate::model::order::Order;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const COLLECTION: &str = "DB_PEDIDOS";

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, order: Order) -> RepositoryResult<Order>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Order>>;
    /// Derived finder: all orders whose `usuario_id` equals the given value.
    async fn find_by_user_id(&self, user_id: &str) -> RepositoryResult<Vec<Order>>;
}

pub struct MongoOrderRepository {
    collection: mongodb::Collection<Order>,
}

impl MongoOrderRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoOrderRepository {
            collection: db.collection::<Order>(COLLECTION),
        }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[tracing::instrument(skip(self, order), fields(user_id = %order.user_id))]
    async fn insert(&self, mut order: Order) -> RepositoryResult<Order> {
        order.id = Some(ObjectId::new());
        if order.order_date.is_none() {
            order.order_date = Some(chrono::Local::now().to_rfc3339());
        }
        let result = self.collection.insert_one(order.clone(), None).await;
        match result {
            Ok(_) => {
                info!("Order created successfully");
                Ok(order)
            }
            Err(e) => {
                error!("Failed to insert order: {}", e);
                Err(RepositoryError::database(format!("Failed to insert order: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Order>> {
        let filter = doc! { "_id": id };
        let order = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find order by id: {}", e)))?;
        Ok(order)
    }

    #[tracing::instrument(skip(self), fields(user_id = %user_id))]
    async fn find_by_user_id(&self, user_id: &str) -> RepositoryResult<Vec<Order>> {
        let filter = doc! { "usuario_id": user_id };
        let mut cursor = self
            .collection
            .find(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list orders: {}", e)))?;
        let mut orders = Vec::new();
        while let Some(order) = cursor.next().await {
            match order {
                Ok(o) => orders.push(o),
                Err(e) => {
                    error!("Failed to deserialize order: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize order: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} orders for user", orders.len());
        Ok(orders)
    }
}
