use std::convert::TryFrom;

use crate::error::DecodeError;

/// The protocol-assigned frame type octet.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Method = 1,
    Headers = 2,
    Body = 3,
    Heartbeat = 8,
}

impl TryFrom<u8> for FrameKind {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FrameKind::Method),
            2 => Ok(FrameKind::Headers),
            3 => Ok(FrameKind::Body),
            8 => Ok(FrameKind::Heartbeat),
            other => Err(DecodeError::UnknownFrameKind(other)),
        }
    }
}
