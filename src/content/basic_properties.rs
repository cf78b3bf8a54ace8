use crate::error::{DecodeError, EncodeError};
use crate::table::{self, FieldTable, FieldValue};
use crate::wire::{Decoder, Encoder};

/// Names of the fixed property slots, in wire order. Everything outside
/// this set travels in the custom-headers table nested under `headers`.
pub const PROPERTY_NAMES: [&str; 14] = [
    "content_type",
    "content_encoding",
    "headers",
    "delivery_mode",
    "priority",
    "correlation_id",
    "reply_to",
    "expiration",
    "message_id",
    "timestamp",
    "type",
    "user_id",
    "app_id",
    "cluster_id",
];

// Property-flags word: content_type occupies bit 15, each following
// property the next bit down, ending with cluster_id at bit 2.
const FLAG_CONTENT_TYPE: u16 = 1 << 15;
const FLAG_CONTENT_ENCODING: u16 = 1 << 14;
const FLAG_HEADERS: u16 = 1 << 13;
const FLAG_DELIVERY_MODE: u16 = 1 << 12;
const FLAG_PRIORITY: u16 = 1 << 11;
const FLAG_CORRELATION_ID: u16 = 1 << 10;
const FLAG_REPLY_TO: u16 = 1 << 9;
const FLAG_EXPIRATION: u16 = 1 << 8;
const FLAG_MESSAGE_ID: u16 = 1 << 7;
const FLAG_TIMESTAMP: u16 = 1 << 6;
const FLAG_TYPE: u16 = 1 << 5;
const FLAG_USER_ID: u16 = 1 << 4;
const FLAG_APP_ID: u16 = 1 << 3;
const FLAG_CLUSTER_ID: u16 = 1 << 2;

/// The 14 fixed "Basic" message properties carried in a header frame,
/// selected on the wire by a bitmask so absent properties cost nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BasicProperties {
    pub content_type: Option<String>,
    pub content_encoding: Option<String>,
    pub headers: Option<FieldTable>,
    pub delivery_mode: Option<u8>,
    pub priority: Option<u8>,
    pub correlation_id: Option<String>,
    pub reply_to: Option<String>,
    pub expiration: Option<String>,
    pub message_id: Option<String>,
    /// Seconds since the UNIX epoch.
    pub timestamp: Option<u64>,
    /// The `type` property; renamed here to avoid the keyword.
    pub kind: Option<String>,
    pub user_id: Option<String>,
    pub app_id: Option<String>,
    pub cluster_id: Option<String>,
}

impl BasicProperties {
    /// Builds a typed property block from one flat mapping: recognized
    /// names fill the fixed slots, everything else lands in the nested
    /// custom-headers table.
    pub fn from_flat(flat: &FieldTable) -> Result<Self, EncodeError> {
        let (properties, custom) = split_headers(flat);

        let mut props = BasicProperties::default();
        props.content_type = take_string(&properties, "content_type")?;
        props.content_encoding = take_string(&properties, "content_encoding")?;
        props.delivery_mode = take_octet(&properties, "delivery_mode")?;
        props.priority = take_octet(&properties, "priority")?;
        props.correlation_id = take_string(&properties, "correlation_id")?;
        props.reply_to = take_string(&properties, "reply_to")?;
        props.expiration = take_string(&properties, "expiration")?;
        props.message_id = take_string(&properties, "message_id")?;
        props.timestamp = take_timestamp(&properties)?;
        props.kind = take_string(&properties, "type")?;
        props.user_id = take_string(&properties, "user_id")?;
        props.app_id = take_string(&properties, "app_id")?;
        props.cluster_id = take_string(&properties, "cluster_id")?;

        // An explicit `headers` table is the base; custom keys merge into it.
        let mut headers = match properties.get("headers") {
            Some(FieldValue::Table(table)) => table.clone(),
            Some(_) => return Err(EncodeError::PropertyType("headers")),
            None => FieldTable::new(),
        };
        for (name, value) in custom.iter() {
            headers.insert(name, value.clone());
        }
        if !headers.is_empty() {
            props.headers = Some(headers);
        }

        Ok(props)
    }

    pub(crate) fn flags(&self) -> u16 {
        let mut flags = 0;
        if self.content_type.is_some() {
            flags |= FLAG_CONTENT_TYPE;
        }
        if self.content_encoding.is_some() {
            flags |= FLAG_CONTENT_ENCODING;
        }
        if self.headers.is_some() {
            flags |= FLAG_HEADERS;
        }
        if self.delivery_mode.is_some() {
            flags |= FLAG_DELIVERY_MODE;
        }
        if self.priority.is_some() {
            flags |= FLAG_PRIORITY;
        }
        if self.correlation_id.is_some() {
            flags |= FLAG_CORRELATION_ID;
        }
        if self.reply_to.is_some() {
            flags |= FLAG_REPLY_TO;
        }
        if self.expiration.is_some() {
            flags |= FLAG_EXPIRATION;
        }
        if self.message_id.is_some() {
            flags |= FLAG_MESSAGE_ID;
        }
        if self.timestamp.is_some() {
            flags |= FLAG_TIMESTAMP;
        }
        if self.kind.is_some() {
            flags |= FLAG_TYPE;
        }
        if self.user_id.is_some() {
            flags |= FLAG_USER_ID;
        }
        if self.app_id.is_some() {
            flags |= FLAG_APP_ID;
        }
        if self.cluster_id.is_some() {
            flags |= FLAG_CLUSTER_ID;
        }
        flags
    }

    pub(crate) fn encode_into(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        encoder.write_u16(self.flags());

        if let Some(v) = &self.content_type {
            encoder.write_short_string(v)?;
        }
        if let Some(v) = &self.content_encoding {
            encoder.write_short_string(v)?;
        }
        if let Some(v) = &self.headers {
            table::encode_table_into(v, encoder)?;
        }
        if let Some(v) = self.delivery_mode {
            encoder.write_u8(v);
        }
        if let Some(v) = self.priority {
            encoder.write_u8(v);
        }
        if let Some(v) = &self.correlation_id {
            encoder.write_short_string(v)?;
        }
        if let Some(v) = &self.reply_to {
            encoder.write_short_string(v)?;
        }
        if let Some(v) = &self.expiration {
            encoder.write_short_string(v)?;
        }
        if let Some(v) = &self.message_id {
            encoder.write_short_string(v)?;
        }
        if let Some(v) = self.timestamp {
            encoder.write_u64(v);
        }
        if let Some(v) = &self.kind {
            encoder.write_short_string(v)?;
        }
        if let Some(v) = &self.user_id {
            encoder.write_short_string(v)?;
        }
        if let Some(v) = &self.app_id {
            encoder.write_short_string(v)?;
        }
        if let Some(v) = &self.cluster_id {
            encoder.write_short_string(v)?;
        }

        Ok(())
    }

    pub(crate) fn decode_from(decoder: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        let flags = decoder.read_u16()?;
        let mut props = BasicProperties::default();

        if flags & FLAG_CONTENT_TYPE != 0 {
            props.content_type = Some(decoder.read_short_string()?.to_string());
        }
        if flags & FLAG_CONTENT_ENCODING != 0 {
            props.content_encoding = Some(decoder.read_short_string()?.to_string());
        }
        if flags & FLAG_HEADERS != 0 {
            props.headers = Some(table::decode_table(decoder)?);
        }
        if flags & FLAG_DELIVERY_MODE != 0 {
            props.delivery_mode = Some(decoder.read_u8()?);
        }
        if flags & FLAG_PRIORITY != 0 {
            props.priority = Some(decoder.read_u8()?);
        }
        if flags & FLAG_CORRELATION_ID != 0 {
            props.correlation_id = Some(decoder.read_short_string()?.to_string());
        }
        if flags & FLAG_REPLY_TO != 0 {
            props.reply_to = Some(decoder.read_short_string()?.to_string());
        }
        if flags & FLAG_EXPIRATION != 0 {
            props.expiration = Some(decoder.read_short_string()?.to_string());
        }
        if flags & FLAG_MESSAGE_ID != 0 {
            props.message_id = Some(decoder.read_short_string()?.to_string());
        }
        if flags & FLAG_TIMESTAMP != 0 {
            props.timestamp = Some(decoder.read_u64()?);
        }
        if flags & FLAG_TYPE != 0 {
            props.kind = Some(decoder.read_short_string()?.to_string());
        }
        if flags & FLAG_USER_ID != 0 {
            props.user_id = Some(decoder.read_short_string()?.to_string());
        }
        if flags & FLAG_APP_ID != 0 {
            props.app_id = Some(decoder.read_short_string()?.to_string());
        }
        if flags & FLAG_CLUSTER_ID != 0 {
            props.cluster_id = Some(decoder.read_short_string()?.to_string());
        }

        Ok(props)
    }
}

/// Partitions one flat key/value mapping into the fixed property slots and
/// everything else, the latter destined for the custom-headers table.
pub fn split_headers(flat: &FieldTable) -> (FieldTable, FieldTable) {
    let mut properties = FieldTable::new();
    let mut headers = FieldTable::new();

    for (name, value) in flat.iter() {
        if PROPERTY_NAMES.contains(&name) {
            properties.insert(name, value.clone());
        } else {
            headers.insert(name, value.clone());
        }
    }

    (properties, headers)
}

fn take_string(table: &FieldTable, name: &'static str) -> Result<Option<String>, EncodeError> {
    match table.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or(EncodeError::PropertyType(name)),
    }
}

fn take_octet(table: &FieldTable, name: &'static str) -> Result<Option<u8>, EncodeError> {
    match table.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_i64()
            .and_then(|v| u8::try_from(v).ok())
            .map(Some)
            .ok_or(EncodeError::PropertyType(name)),
    }
}

fn take_timestamp(table: &FieldTable) -> Result<Option<u64>, EncodeError> {
    match table.get("timestamp") {
        None => Ok(None),
        Some(FieldValue::Timestamp(secs)) => Ok(Some(*secs)),
        Some(value) => value
            .as_i64()
            .and_then(|v| u64::try_from(v).ok())
            .map(Some)
            .ok_or(EncodeError::PropertyType("timestamp")),
    }
}
