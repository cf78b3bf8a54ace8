mod field_table;
mod field_value;
mod table_codec;

pub use field_table::FieldTable;
pub use field_value::FieldValue;
pub use table_codec::TableCodec;

pub(crate) use table_codec::{decode_table, encode_table_into};
