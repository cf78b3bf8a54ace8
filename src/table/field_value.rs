use chrono::{DateTime, TimeZone, Utc};

use crate::table::FieldTable;

/// A single typed value in a field table or field array.
///
/// Every variant maps to exactly one wire type tag, so a constructed value
/// is unambiguous about how it will be serialized. Numeric width selection
/// for plain host values happens only in the `From` conversions:
///
/// - `i64` input becomes `I32` when the value fits and `I64` otherwise.
/// - Floats always take the 64-bit tag.
/// - Strings and byte slices always take the long-string tag, so values are
///   never subject to the 255-byte short-string ceiling.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    F32(f32),
    F64(f64),
    /// Scaled decimal: `value / 10^scale`.
    Decimal { scale: u8, value: i32 },
    /// Arbitrary byte sequence; no encoding is assumed at this layer.
    LongString(Vec<u8>),
    /// Seconds since the UNIX epoch.
    Timestamp(u64),
    Table(FieldTable),
    /// Ordered values; homogeneity is not required.
    Array(Vec<FieldValue>),
    Void,
}

impl FieldValue {
    /// The value as an `i64`, for any of the integer variants.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            FieldValue::I8(v) => Some(v as i64),
            FieldValue::U8(v) => Some(v as i64),
            FieldValue::I16(v) => Some(v as i64),
            FieldValue::U16(v) => Some(v as i64),
            FieldValue::I32(v) => Some(v as i64),
            FieldValue::U32(v) => Some(v as i64),
            FieldValue::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::LongString(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::LongString(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&FieldTable> {
        match self {
            FieldValue::Table(table) => Some(table),
            _ => None,
        }
    }

    /// The timestamp variant as a `chrono` datetime, when representable.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match *self {
            FieldValue::Timestamp(secs) => Utc.timestamp_opt(secs as i64, 0).single(),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        match i32::try_from(v) {
            Ok(v) => FieldValue::I32(v),
            Err(_) => FieldValue::I64(v),
        }
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::I32(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::F64(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::F64(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::LongString(v.as_bytes().to_vec())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::LongString(v.into_bytes())
    }
}

impl From<&[u8]> for FieldValue {
    fn from(v: &[u8]) -> Self {
        FieldValue::LongString(v.to_vec())
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(v: Vec<u8>) -> Self {
        FieldValue::LongString(v)
    }
}

impl From<FieldTable> for FieldValue {
    fn from(v: FieldTable) -> Self {
        FieldValue::Table(v)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(v: Vec<FieldValue>) -> Self {
        FieldValue::Array(v)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(v.timestamp().max(0) as u64)
    }
}

impl From<()> for FieldValue {
    fn from(_: ()) -> Self {
        FieldValue::Void
    }
}
