
pub mod schema;
pub mod timestamp;
