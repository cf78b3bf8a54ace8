use crate::constants::FRAME_OVERHEAD;
use crate::frame::Frame;

/// Splits a message body into body frames that fit the negotiated frame
/// size.
///
/// `frame_size` bounds the whole frame on the wire, so each payload may be
/// at most `frame_size - 8` (the fixed envelope overhead). An empty body
/// yields no frames; a body within the limit yields exactly one; anything
/// larger is cut into contiguous limit-sized chunks with the final chunk
/// possibly shorter. Concatenating the returned payloads in order always
/// reproduces `body` byte-for-byte: the split happens on raw bytes, never
/// on any text view of the payload.
///
/// # Panics
///
/// Panics if `frame_size` does not exceed the 8-byte frame overhead; the
/// protocol's negotiated minimum is far above that.
pub fn encode_body(body: &[u8], channel: u16, frame_size: usize) -> Vec<Frame> {
    assert!(
        frame_size > FRAME_OVERHEAD,
        "frame_size must exceed the {FRAME_OVERHEAD}-byte frame overhead"
    );

    if body.is_empty() {
        return Vec::new();
    }

    let limit = frame_size - FRAME_OVERHEAD;
    if body.len() < limit {
        return vec![Frame::body(channel, body.to_vec())];
    }

    body.chunks(limit)
        .map(|chunk| Frame::body(channel, chunk.to_vec()))
        .collect()
}
