pub mod order_dto;
pub mod product_dto;
pub mod review_dto;
pub mod user_dto;
