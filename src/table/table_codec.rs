use crate::constants::MAX_SHORT_STRING;
use crate::error::{DecodeError, EncodeError};
use crate::table::{FieldTable, FieldValue};
use crate::wire::{Decoder, Encoder};

mod tags {
    pub const BOOLEAN: u8 = b't';
    pub const SIGNED_8: u8 = b'b';
    pub const UNSIGNED_8: u8 = b'B';
    pub const SIGNED_16: u8 = b's';
    pub const UNSIGNED_16: u8 = b'u';
    pub const SIGNED_32: u8 = b'I';
    pub const UNSIGNED_32: u8 = b'i';
    pub const SIGNED_64: u8 = b'l';
    pub const FLOAT_32: u8 = b'f';
    pub const FLOAT_64: u8 = b'd';
    pub const DECIMAL: u8 = b'D';
    pub const LONG_STRING: u8 = b'S';
    pub const BYTE_ARRAY: u8 = b'x';
    pub const TIMESTAMP: u8 = b'T';
    pub const TABLE: u8 = b'F';
    pub const ARRAY: u8 = b'A';
    pub const VOID: u8 = b'V';
}

/// Serializes and parses field tables.
///
/// A table is a 4-byte big-endian byte length (counting the entries only)
/// followed by entries of `name_len:u8 | name | tag:u8 | payload`. An empty
/// table is exactly four zero bytes.
pub struct TableCodec;

impl TableCodec {
    pub fn encode(table: &FieldTable) -> Result<Vec<u8>, EncodeError> {
        let mut encoder = Encoder::new();
        encode_table_into(table, &mut encoder)?;
        Ok(encoder.into_bytes())
    }

    /// Decodes a complete table from the start of `data`. Trailing bytes
    /// beyond the declared length are ignored; use [`TableCodec::length`] to
    /// find where the table ends inside a larger buffer.
    pub fn decode(data: &[u8]) -> Result<FieldTable, DecodeError> {
        let mut decoder = Decoder::new(data);
        decode_table(&mut decoder)
    }

    /// Reads only the 4-byte length prefix: the number of entry bytes that
    /// follow it.
    pub fn length(data: &[u8]) -> Result<u32, DecodeError> {
        Decoder::new(data).read_u32()
    }
}

pub(crate) fn encode_table_into(
    table: &FieldTable,
    encoder: &mut Encoder,
) -> Result<(), EncodeError> {
    let mut content = Encoder::new();

    for (name, value) in table.iter() {
        if name.len() > MAX_SHORT_STRING {
            return Err(EncodeError::FieldNameTooLong(name.len()));
        }
        content.write_u8(name.len() as u8);
        content.write_bytes(name.as_bytes());
        encode_field_value(value, &mut content)?;
    }

    encoder.write_u32(content.len() as u32);
    encoder.write_bytes(content.as_slice());
    Ok(())
}

fn encode_field_value(value: &FieldValue, encoder: &mut Encoder) -> Result<(), EncodeError> {
    match value {
        FieldValue::Bool(v) => {
            encoder.write_u8(tags::BOOLEAN);
            encoder.write_u8(if *v { 1 } else { 0 });
        }
        FieldValue::I8(v) => {
            encoder.write_u8(tags::SIGNED_8);
            encoder.write_i8(*v);
        }
        FieldValue::U8(v) => {
            encoder.write_u8(tags::UNSIGNED_8);
            encoder.write_u8(*v);
        }
        FieldValue::I16(v) => {
            encoder.write_u8(tags::SIGNED_16);
            encoder.write_i16(*v);
        }
        FieldValue::U16(v) => {
            encoder.write_u8(tags::UNSIGNED_16);
            encoder.write_u16(*v);
        }
        FieldValue::I32(v) => {
            encoder.write_u8(tags::SIGNED_32);
            encoder.write_i32(*v);
        }
        FieldValue::U32(v) => {
            encoder.write_u8(tags::UNSIGNED_32);
            encoder.write_u32(*v);
        }
        FieldValue::I64(v) => {
            encoder.write_u8(tags::SIGNED_64);
            encoder.write_i64(*v);
        }
        FieldValue::F32(v) => {
            encoder.write_u8(tags::FLOAT_32);
            encoder.write_f32(*v);
        }
        FieldValue::F64(v) => {
            encoder.write_u8(tags::FLOAT_64);
            encoder.write_f64(*v);
        }
        FieldValue::Decimal { scale, value } => {
            encoder.write_u8(tags::DECIMAL);
            encoder.write_u8(*scale);
            encoder.write_i32(*value);
        }
        FieldValue::LongString(bytes) => {
            encoder.write_u8(tags::LONG_STRING);
            encoder.write_long_string(bytes);
        }
        FieldValue::Timestamp(secs) => {
            encoder.write_u8(tags::TIMESTAMP);
            encoder.write_u64(*secs);
        }
        FieldValue::Table(table) => {
            encoder.write_u8(tags::TABLE);
            encode_table_into(table, encoder)?;
        }
        FieldValue::Array(values) => {
            encoder.write_u8(tags::ARRAY);
            let mut content = Encoder::new();
            for value in values {
                encode_field_value(value, &mut content)?;
            }
            encoder.write_u32(content.len() as u32);
            encoder.write_bytes(content.as_slice());
        }
        FieldValue::Void => {
            encoder.write_u8(tags::VOID);
        }
    }
    Ok(())
}

pub(crate) fn decode_table(decoder: &mut Decoder<'_>) -> Result<FieldTable, DecodeError> {
    let len = decoder.read_u32()? as usize;
    let body = decoder.read_bytes(len)?;
    let mut sub = Decoder::new(body);

    let mut table = FieldTable::new();
    while sub.remaining() > 0 {
        let (name, value) = decode_entry(&mut sub).map_err(|e| match e {
            // A sub-field's declared length ran past the table's declared
            // length; the table as a whole is inconsistent.
            DecodeError::BufferTooShort { .. } => DecodeError::TableOverrun,
            other => other,
        })?;
        table.insert(name, value);
    }

    Ok(table)
}

fn decode_entry(decoder: &mut Decoder<'_>) -> Result<(String, FieldValue), DecodeError> {
    let name = decoder.read_short_string()?.to_string();
    let tag = decoder.read_u8()?;
    let value = decode_field_value(tag, decoder)?;
    Ok((name, value))
}

fn decode_field_value(tag: u8, decoder: &mut Decoder<'_>) -> Result<FieldValue, DecodeError> {
    let value = match tag {
        tags::BOOLEAN => FieldValue::Bool(decoder.read_u8()? != 0),
        tags::SIGNED_8 => FieldValue::I8(decoder.read_i8()?),
        tags::UNSIGNED_8 => FieldValue::U8(decoder.read_u8()?),
        tags::SIGNED_16 => FieldValue::I16(decoder.read_i16()?),
        tags::UNSIGNED_16 => FieldValue::U16(decoder.read_u16()?),
        tags::SIGNED_32 => FieldValue::I32(decoder.read_i32()?),
        tags::UNSIGNED_32 => FieldValue::U32(decoder.read_u32()?),
        tags::SIGNED_64 => FieldValue::I64(decoder.read_i64()?),
        tags::FLOAT_32 => FieldValue::F32(decoder.read_f32()?),
        tags::FLOAT_64 => FieldValue::F64(decoder.read_f64()?),
        tags::DECIMAL => FieldValue::Decimal {
            scale: decoder.read_u8()?,
            value: decoder.read_i32()?,
        },
        // Some peers emit byte arrays with their own tag; both carry a
        // 4-byte length and raw bytes.
        tags::LONG_STRING | tags::BYTE_ARRAY => {
            FieldValue::LongString(decoder.read_long_string()?.to_vec())
        }
        tags::TIMESTAMP => FieldValue::Timestamp(decoder.read_u64()?),
        tags::TABLE => FieldValue::Table(decode_table(decoder)?),
        tags::ARRAY => {
            let len = decoder.read_u32()? as usize;
            let body = decoder.read_bytes(len)?;
            let mut sub = Decoder::new(body);
            let mut values = Vec::new();
            while sub.remaining() > 0 {
                let tag = sub.read_u8()?;
                values.push(decode_field_value(tag, &mut sub)?);
            }
            FieldValue::Array(values)
        }
        tags::VOID => FieldValue::Void,
        other => return Err(DecodeError::UnknownFieldType(other)),
    };
    Ok(value)
}
