pub mod order_handler;
pub mod product_handler;
pub mod review_handler;
pub mod user_handler;

use bson::oid::ObjectId;

use crate::util::error::HandlerError;

/// Parses a path id into an ObjectId; non-hex ids are a 400, not a lookup miss.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(id).map_err(|_| HandlerError::bad_request(format!("Invalid id: {}", id)))
}
