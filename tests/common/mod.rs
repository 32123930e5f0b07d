#![allow(dead_code)]

//! In-memory repository implementations backing the handler tests, so they
//! exercise the real routers without a running MongoDB.

use async_trait::async_trait;
use bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Mutex;

use tienda_backend::model::order::Order;
use tienda_backend::model::product::Product;
use tienda_backend::model::review::Review;
use tienda_backend::model::user::User;
use tienda_backend::repository::order_repo::OrderRepository;
use tienda_backend::repository::product_repo::ProductRepository;
use tienda_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use tienda_backend::repository::review_repo::ReviewRepository;
use tienda_backend::repository::user_repo::UserRepository;

#[derive(Default)]
pub struct MemUserRepository {
    users: Mutex<HashMap<ObjectId, User>>,
}

#[async_trait]
impl UserRepository for MemUserRepository {
    async fn insert(&self, mut user: User) -> RepositoryResult<User> {
        let id = ObjectId::new();
        user.id = Some(id);
        self.users.lock().unwrap().insert(id, user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update(&self, id: ObjectId, user: User) -> RepositoryResult<User> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&id) {
            return Err(RepositoryError::not_found(format!(
                "No user found to update for ID: {}",
                id
            )));
        }
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        match self.users.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::not_found(format!(
                "No user found to delete for ID: {}",
                id
            ))),
        }
    }

    async fn exists(&self, id: ObjectId) -> RepositoryResult<bool> {
        Ok(self.users.lock().unwrap().contains_key(&id))
    }
}

#[derive(Default)]
pub struct MemProductRepository {
    products: Mutex<HashMap<ObjectId, Product>>,
}

#[async_trait]
impl ProductRepository for MemProductRepository {
    async fn insert(&self, mut product: Product) -> RepositoryResult<Product> {
        let id = ObjectId::new();
        product.id = Some(id);
        self.products.lock().unwrap().insert(id, product.clone());
        Ok(product)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Product>> {
        Ok(self.products.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: ObjectId, product: Product) -> RepositoryResult<Product> {
        let mut products = self.products.lock().unwrap();
        if !products.contains_key(&id) {
            return Err(RepositoryError::not_found(format!(
                "No product found to update for ID: {}",
                id
            )));
        }
        products.insert(id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        match self.products.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::not_found(format!(
                "No product found to delete for ID: {}",
                id
            ))),
        }
    }

    async fn exists(&self, id: ObjectId) -> RepositoryResult<bool> {
        Ok(self.products.lock().unwrap().contains_key(&id))
    }
}

#[derive(Default)]
pub struct MemOrderRepository {
    orders: Mutex<HashMap<ObjectId, Order>>,
}

#[async_trait]
impl OrderRepository for MemOrderRepository {
    async fn insert(&self, mut order: Order) -> RepositoryResult<Order> {
        let id = ObjectId::new();
        order.id = Some(id);
        if order.order_date.is_none() {
            order.order_date = Some(chrono::Local::now().to_rfc3339());
        }
        self.orders.lock().unwrap().insert(id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Order>> {
        Ok(self.orders.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> RepositoryResult<Vec<Order>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemReviewRepository {
    reviews: Mutex<HashMap<ObjectId, Review>>,
}

#[async_trait]
impl ReviewRepository for MemReviewRepository {
    async fn insert(&self, mut review: Review) -> RepositoryResult<Review> {
        let id = ObjectId::new();
        review.id = Some(id);
        if review.review_date.is_none() {
            review.review_date = Some(chrono::Local::now().to_rfc3339());
        }
        self.reviews.lock().unwrap().insert(id, review.clone());
        Ok(review)
    }

    async fn find_by_product_id(&self, product_id: &str) -> RepositoryResult<Vec<Review>> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }
}
