use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use tracing::{error, info};

use crate::model::product::Product;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const COLLECTION: &str = "DB_CATALOGO";

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: Product) -> RepositoryResult<Product>;
    async fn find_all(&self) -> RepositoryResult<Vec<Product>>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Product>>;
    async fn update(&self, id: ObjectId, product: Product) -> RepositoryResult<Product>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn exists(&self, id: ObjectId) -> RepositoryResult<bool>;
}

pub struct MongoProductRepository {
    collection: mongodb::Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoProductRepository {
            collection: db.collection::<Product>(COLLECTION),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[tracing::instrument(skip(self, product), fields(code = %product.code))]
    async fn insert(&self, mut product: Product) -> RepositoryResult<Product> {
        product.id = Some(ObjectId::new());
        let result = self.collection.insert_one(product.clone(), None).await;
        match result {
            Ok(_) => {
                info!("Product created successfully");
                Ok(product)
            }
            Err(e) => {
                error!("Failed to insert product: {}", e);
                Err(RepositoryError::database(format!("Failed to insert product: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        let mut cursor = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list products: {}", e)))?;
        let mut products = Vec::new();
        while let Some(product) = cursor.next().await {
            match product {
                Ok(p) => products.push(p),
                Err(e) => {
                    error!("Failed to deserialize product: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize product: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} products", products.len());
        Ok(products)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Product>> {
        let filter = doc! { "_id": id };
        let product = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find product by id: {}", e)))?;
        Ok(product)
    }

    #[tracing::instrument(skip(self, product), fields(id = %id))]
    async fn update(&self, id: ObjectId, product: Product) -> RepositoryResult<Product> {
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&product).map_err(|e| {
            RepositoryError::serialization(format!("Failed to serialize product: {}", e))
        })?;
        doc.remove("_id");
        let update = doc! { "$set": doc };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => {
                info!("Product updated successfully");
                Ok(product)
            }
            Ok(_) => {
                error!("No product found to update for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "No product found to update for ID: {}",
                    id
                )))
            }
            Err(e) => {
                error!("Failed to update product: {}", e);
                Err(RepositoryError::database(format!("Failed to update product: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        let result = self.collection.delete_one(filter, None).await;
        match result {
            Ok(delete_result) if delete_result.deleted_count > 0 => {
                info!("Product deleted successfully");
                Ok(())
            }
            Ok(_) => {
                error!("No product found to delete for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "No product found to delete for ID: {}",
                    id
                )))
            }
            Err(e) => {
                error!("Failed to delete product: {}", e);
                Err(RepositoryError::database(format!("Failed to delete product: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn exists(&self, id: ObjectId) -> RepositoryResult<bool> {
        let filter = doc! { "_id": id };
        let count = self.collection.count_documents(filter, None).await.map_err(|e| {
            RepositoryError::database(format!("Failed to check product existence: {}", e))
        })?;
        Ok(count > 0)
    }
}
