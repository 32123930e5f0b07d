pub mod order_repo;
pub mod product_repo;
pub mod repository_error;
pub mod review_repo;
pub mod user_repo;
