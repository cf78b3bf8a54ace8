use crate::content::BasicProperties;
use crate::error::{DecodeError, EncodeError};
use crate::wire::{Decoder, Encoder};

/// Payload of a headers frame:
/// `class:u16 | weight:u16 (always 0) | body_size:u64 | property block`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentHeader {
    pub class_id: u16,

    /// Total byte length of the message body across all body frames.
    pub body_size: u64,

    pub properties: BasicProperties,
}

impl ContentHeader {
    pub fn new(class_id: u16, body_size: u64, properties: BasicProperties) -> Self {
        Self {
            class_id,
            body_size,
            properties,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut encoder = Encoder::with_capacity(64);
        encoder.write_u16(self.class_id);
        encoder.write_u16(0); // weight, reserved
        encoder.write_u64(self.body_size);
        self.properties.encode_into(&mut encoder)?;
        Ok(encoder.into_bytes())
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let mut decoder = Decoder::new(data);
        let class_id = decoder.read_u16()?;
        let _weight = decoder.read_u16()?;
        let body_size = decoder.read_u64()?;
        let properties = BasicProperties::decode_from(&mut decoder)?;

        Ok(Self {
            class_id,
            body_size,
            properties,
        })
    }
}
