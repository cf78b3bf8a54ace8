use amqwire::constants::{FRAME_END, FRAME_HEADER_SIZE};
use amqwire::error::{DecodeError, EncodeError};
use amqwire::frame::{Frame, FrameCodec, FrameKind};
use amqwire::method;

#[test]
fn encode_produces_envelope_and_trailer() {
    let payload = b"test payload";
    let encoded = FrameCodec::encode(FrameKind::Method, payload, 1).expect("encode failed");

    assert_eq!(encoded.len(), FRAME_HEADER_SIZE + payload.len() + 1);
    assert_eq!(encoded[0], 1); // method type
    assert_eq!(&encoded[1..3], &[0, 1]); // channel
    assert_eq!(&encoded[3..7], &(payload.len() as u32).to_be_bytes());
    assert_eq!(&encoded[7..7 + payload.len()], payload);
    assert_eq!(*encoded.last().unwrap(), FRAME_END);
}

#[test]
fn encode_validates_channel_range() {
    assert!(FrameCodec::encode(FrameKind::Method, b"p", 0).is_ok());
    assert!(FrameCodec::encode(FrameKind::Method, b"p", 65535).is_ok());
    assert_eq!(
        FrameCodec::encode(FrameKind::Method, b"p", 65536),
        Err(EncodeError::ChannelOutOfRange(65536))
    );
}

#[test]
fn decode_header_inverts_encode() {
    for (kind, channel, payload) in [
        (FrameKind::Method, 0u16, &b"abcd"[..]),
        (FrameKind::Headers, 17, &b""[..]),
        (FrameKind::Body, 65535, &b"some body bytes"[..]),
        (FrameKind::Heartbeat, 0, &b""[..]),
    ] {
        let encoded =
            FrameCodec::encode(kind, payload, channel as u32).expect("encode failed");
        let (decoded_kind, decoded_channel, size) =
            FrameCodec::decode_header(&encoded[..FRAME_HEADER_SIZE]).expect("decode failed");

        assert_eq!(decoded_kind, kind);
        assert_eq!(decoded_channel, channel);
        assert_eq!(size as usize, payload.len());
    }
}

#[test]
fn decode_header_rejects_short_input() {
    assert!(matches!(
        FrameCodec::decode_header(&[]),
        Err(DecodeError::BufferTooShort { .. })
    ));
    assert!(matches!(
        FrameCodec::decode_header(&[1, 0, 0]),
        Err(DecodeError::BufferTooShort { .. })
    ));
}

#[test]
fn decode_header_rejects_unknown_frame_type() {
    let mut encoded = FrameCodec::encode(FrameKind::Body, b"x", 1).expect("encode failed");
    encoded[0] = 9;
    assert_eq!(
        FrameCodec::decode_header(&encoded),
        Err(DecodeError::UnknownFrameKind(9))
    );
}

#[test]
fn whole_frame_round_trips() {
    let frame = Frame::body(42, b"payload bytes".to_vec());
    let encoded = frame.encode().expect("encode failed");
    let decoded = FrameCodec::decode(&encoded).expect("decode failed");
    assert_eq!(decoded, frame);
}

#[test]
fn tampered_trailer_is_a_framing_violation() {
    let mut encoded = FrameCodec::encode(FrameKind::Body, b"abc", 5).expect("encode failed");
    let last = encoded.len() - 1;
    encoded[last] = 0x00;

    assert_eq!(
        FrameCodec::decode(&encoded),
        Err(DecodeError::BadFrameEnd(0x00))
    );
    assert_eq!(
        FrameCodec::check_frame_end(0x00),
        Err(DecodeError::BadFrameEnd(0x00))
    );
    assert!(FrameCodec::check_frame_end(FRAME_END).is_ok());
}

#[test]
fn encode_to_array_matches_contiguous_encode() {
    let payload = b"zero copy";
    let contiguous = FrameCodec::encode(FrameKind::Body, payload, 3).expect("encode failed");
    let (header, body, trailer) =
        FrameCodec::encode_to_array(FrameKind::Body, payload, 3).expect("encode failed");

    let mut joined = header.to_vec();
    joined.extend_from_slice(body);
    joined.extend_from_slice(&trailer);
    assert_eq!(joined, contiguous);
}

#[test]
fn encode_to_array_validates_channel_range() {
    assert!(matches!(
        FrameCodec::encode_to_array(FrameKind::Body, b"p", 70_000),
        Err(EncodeError::ChannelOutOfRange(70_000))
    ));
}

#[test]
fn heartbeat_travels_on_channel_zero_with_empty_payload() {
    let frame = Frame::heartbeat();
    assert_eq!(frame.kind, FrameKind::Heartbeat);
    assert_eq!(frame.channel, 0);
    assert!(frame.payload.is_empty());
    assert!(frame.is_final());
}

#[test]
fn finality_follows_frame_kind_and_method_content() {
    // tune-ok carries no content and closes the exchange on its own.
    let tune_ok = method::lookup(10, 31).expect("registered");
    let payload = tune_ok
        .encode(&[2047u16.into(), 131_072u32.into(), 60u16.into()])
        .expect("encode failed");
    assert!(Frame::method(0, payload).is_final());

    // publish declares content, so header and body frames follow.
    let publish = method::lookup(60, 40).expect("registered");
    let payload = publish
        .encode(&["ex".into(), "rk".into(), false.into(), false.into()])
        .expect("encode failed");
    assert!(!Frame::method(1, payload).is_final());

    assert!(!Frame::headers(1, vec![]).is_final());
    assert!(!Frame::body(1, vec![1, 2, 3]).is_final());

    // An unresolvable method index is treated as final.
    let unknown = Frame::method(1, vec![0xFF, 0xFF, 0xFF, 0xFF]);
    assert!(unknown.is_final());
}
