pub mod order_router;
pub mod product_router;
pub mod review_router;
pub mod user_router;
