use crate::error::EncodeError;
use crate::frame::{FrameCodec, FrameKind};
use crate::method;

/// A single protocol frame: the atomic unit handed to the transport.
///
/// The payload is opaque at this level; its interpretation depends on the
/// kind (a method's argument bytes, a content header, a body chunk, or
/// nothing at all for a heartbeat).
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub kind: FrameKind,

    /// Logical multiplexing identifier within a connection; 0 is reserved
    /// for connection-global traffic.
    pub channel: u16,

    pub payload: Vec<u8>,
}

impl Frame {
    pub fn method(channel: u16, payload: Vec<u8>) -> Self {
        Self {
            kind: FrameKind::Method,
            channel,
            payload,
        }
    }

    pub fn headers(channel: u16, payload: Vec<u8>) -> Self {
        Self {
            kind: FrameKind::Headers,
            channel,
            payload,
        }
    }

    pub fn body(channel: u16, payload: Vec<u8>) -> Self {
        Self {
            kind: FrameKind::Body,
            channel,
            payload,
        }
    }

    /// Heartbeat frames always travel on channel 0 with an empty payload.
    pub fn heartbeat() -> Self {
        Self {
            kind: FrameKind::Heartbeat,
            channel: 0,
            payload: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.payload.len()
    }

    /// Whether this frame completes a logical message on its own.
    ///
    /// Headers and body frames never do; heartbeats always do. A method
    /// frame is final unless its resolved descriptor declares content, in
    /// which case a header frame and body frames follow. A method frame
    /// whose index cannot be resolved is treated as final.
    pub fn is_final(&self) -> bool {
        match self.kind {
            FrameKind::Heartbeat => true,
            FrameKind::Headers | FrameKind::Body => false,
            FrameKind::Method => {
                if self.payload.len() < 4 {
                    return true;
                }
                let class_id = u16::from_be_bytes([self.payload[0], self.payload[1]]);
                let method_id = u16::from_be_bytes([self.payload[2], self.payload[3]]);
                match method::lookup(class_id, method_id) {
                    Some(descriptor) => !descriptor.has_content,
                    None => true,
                }
            }
        }
    }

    /// Serializes the whole frame, trailer included.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        FrameCodec::encode(self.kind, &self.payload, self.channel as u32)
    }
}
