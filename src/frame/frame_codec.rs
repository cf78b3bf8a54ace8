use crate::constants::{FRAME_END, FRAME_HEADER_SIZE, MAX_CHANNEL};
use crate::error::{DecodeError, EncodeError};
use crate::frame::{Frame, FrameKind};
use crate::wire::{Decoder, Encoder};

/// Encodes and decodes the frame envelope:
/// `type:u8 | channel:u16 BE | size:u32 BE | payload | 0xCE`.
///
/// The channel parameter is accepted as a `u32` so out-of-range input is
/// representable and rejected here rather than silently truncated at the
/// call site.
pub struct FrameCodec;

impl FrameCodec {
    pub fn encode(
        kind: FrameKind,
        payload: &[u8],
        channel: u32,
    ) -> Result<Vec<u8>, EncodeError> {
        if channel > MAX_CHANNEL as u32 {
            return Err(EncodeError::ChannelOutOfRange(channel));
        }

        let mut encoder = Encoder::with_capacity(FRAME_HEADER_SIZE + payload.len() + 1);
        encoder.write_u8(kind as u8);
        encoder.write_u16(channel as u16);
        encoder.write_u32(payload.len() as u32);
        encoder.write_bytes(payload);
        encoder.write_u8(FRAME_END);
        Ok(encoder.into_bytes())
    }

    /// Same wire bytes as [`FrameCodec::encode`] but returned as three
    /// segments, so a caller doing vectored writes never copies the payload.
    pub fn encode_to_array<'a>(
        kind: FrameKind,
        payload: &'a [u8],
        channel: u32,
    ) -> Result<([u8; FRAME_HEADER_SIZE], &'a [u8], [u8; 1]), EncodeError> {
        if channel > MAX_CHANNEL as u32 {
            return Err(EncodeError::ChannelOutOfRange(channel));
        }

        let mut header = Encoder::with_capacity(FRAME_HEADER_SIZE);
        header.write_u8(kind as u8);
        header.write_u16(channel as u16);
        header.write_u32(payload.len() as u32);

        let mut header_bytes = [0u8; FRAME_HEADER_SIZE];
        header_bytes.copy_from_slice(header.as_slice());

        Ok((header_bytes, payload, [FRAME_END]))
    }

    /// Parses the 7-byte frame header. The trailer is not examined here:
    /// the caller reads exactly `size` payload bytes plus one more octet and
    /// passes that octet to [`FrameCodec::check_frame_end`].
    pub fn decode_header(data: &[u8]) -> Result<(FrameKind, u16, u32), DecodeError> {
        let mut decoder = Decoder::new(data);
        let kind = FrameKind::try_from(decoder.read_u8()?)?;
        let channel = decoder.read_u16()?;
        let size = decoder.read_u32()?;
        Ok((kind, channel, size))
    }

    pub fn check_frame_end(octet: u8) -> Result<(), DecodeError> {
        if octet == FRAME_END {
            Ok(())
        } else {
            Err(DecodeError::BadFrameEnd(octet))
        }
    }

    /// Parses one complete frame (header, payload, and trailer) from the
    /// start of `data`. Trailing bytes beyond the frame are ignored.
    pub fn decode(data: &[u8]) -> Result<Frame, DecodeError> {
        let (kind, channel, size) = Self::decode_header(data)?;

        let mut decoder = Decoder::new(&data[FRAME_HEADER_SIZE..]);
        let payload = decoder.read_bytes(size as usize)?.to_vec();
        Self::check_frame_end(decoder.read_u8()?)?;

        Ok(Frame {
            kind,
            channel,
            payload,
        })
    }
}
