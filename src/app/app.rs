use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use crate::config::{AdminUserConfig, AppConfig, MongoConfig};
use crate::model::user::{User, UserRole};
use crate::repository::order_repo::{MongoOrderRepository, OrderRepository};
use crate::repository::product_repo::{MongoProductRepository, ProductRepository};
use crate::repository::review_repo::{MongoReviewRepository, ReviewRepository};
use crate::repository::user_repo::{MongoUserRepository, UserRepository};
use crate::router::order_router::order_router;
use crate::router::product_router::product_router;
use crate::router::review_router::review_router;
use crate::router::user_router::user_router;

pub struct App {
    config: AppConfig,
    router: Router,
    pub user_repo: Arc<dyn UserRepository>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");
        let db = mongo_config.connect().await.expect("Mongo connection error");

        let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&db));
        let product_repo: Arc<dyn ProductRepository> = Arc::new(MongoProductRepository::new(&db));
        let order_repo: Arc<dyn OrderRepository> = Arc::new(MongoOrderRepository::new(&db));
        let review_repo: Arc<dyn ReviewRepository> = Arc::new(MongoReviewRepository::new(&db));

        let router = Self::create_router(user_repo.clone(), product_repo, order_repo, review_repo);

        let app = App { config, router, user_repo };
        app.create_first_admin_user().await;
        app
    }

    fn create_router(
        user_repo: Arc<dyn UserRepository>,
        product_repo: Arc<dyn ProductRepository>,
        order_repo: Arc<dyn OrderRepository>,
        review_repo: Arc<dyn ReviewRepository>,
    ) -> Router {
        // No handler reads any auth header; every origin is accepted.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let api = Router::new()
            .merge(user_router(user_repo))
            .merge(product_router(product_repo))
            .merge(order_router(order_repo))
            .merge(review_router(review_repo));

        Router::new()
            .nest("/api", api)
            .route("/health", get(|| async { "OK" }))
            .layer(cors)
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }

    async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded: {e}");
                return;
            }
        };

        match self.user_repo.find_by_email(&admin_conf.email).await {
            Ok(Some(_)) => {
                info!("Admin user already exists, skipping creation.");
                return;
            }
            Ok(None) => { /* continue to create */ }
            Err(e) => {
                error!("Failed to check for existing admin user: {e}");
                return;
            }
        }

        let user = User {
            id: None,
            email: admin_conf.email.clone(),
            password: admin_conf.password.clone(),
            role: UserRole::Admin,
            name: admin_conf.name.clone(),
            address: String::new(),
            national_id: String::new(),
            phone: String::new(),
        };
        match self.user_repo.insert(user).await {
            Ok(_) => info!("First admin user created."),
            Err(e) => error!("Failed to create admin user: {e}"),
        }
    }
}
