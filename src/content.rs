mod basic_properties;
mod body;
mod content_header;

pub use basic_properties::{BasicProperties, PROPERTY_NAMES, split_headers};
pub use body::encode_body;
pub use content_header::ContentHeader;
