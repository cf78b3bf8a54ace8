use amqwire::constants::FRAME_OVERHEAD;
use amqwire::content::{BasicProperties, ContentHeader, encode_body, split_headers};
use amqwire::frame::FrameKind;
use amqwire::table::{FieldTable, FieldValue};
use rand::RngCore;

#[test]
fn empty_body_yields_no_frames() {
    assert!(encode_body(b"", 1, 4096).is_empty());
}

#[test]
fn body_within_the_limit_yields_one_frame() {
    let body = b"short message";
    let frames = encode_body(body, 7, 4096);

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].kind, FrameKind::Body);
    assert_eq!(frames[0].channel, 7);
    assert_eq!(frames[0].payload, body);
}

#[test]
fn oversized_body_is_split_and_reassembles_exactly() {
    let frame_size = 128;
    let limit = frame_size - FRAME_OVERHEAD;

    let mut body = vec![0u8; 1000];
    rand::rng().fill_bytes(&mut body);

    let frames = encode_body(&body, 3, frame_size);

    assert!(frames.len() > 1);
    for frame in &frames {
        assert_eq!(frame.kind, FrameKind::Body);
        assert_eq!(frame.channel, 3);
        assert!(frame.payload.len() <= limit);
    }
    // All but the last chunk are exactly the limit.
    for frame in &frames[..frames.len() - 1] {
        assert_eq!(frame.payload.len(), limit);
    }

    let joined: Vec<u8> = frames.iter().flat_map(|f| f.payload.clone()).collect();
    assert_eq!(joined, body);
}

#[test]
fn bodies_reassemble_across_frame_sizes() {
    for frame_size in [9, 64, 256, 4096] {
        for body_len in [1, 7, 255, 256, 1024, 10_000] {
            let mut body = vec![0u8; body_len];
            rand::rng().fill_bytes(&mut body);

            let frames = encode_body(&body, 1, frame_size);
            let joined: Vec<u8> = frames.iter().flat_map(|f| f.payload.clone()).collect();
            assert_eq!(joined, body, "frame_size={frame_size} body_len={body_len}");
        }
    }
}

#[test]
fn split_headers_partitions_fixed_slots_from_custom_keys() {
    let mut flat = FieldTable::new();
    flat.insert("content_type", "x");
    flat.insert("x-custom", 1i64);

    let (properties, headers) = split_headers(&flat);

    assert_eq!(properties.len(), 1);
    assert_eq!(
        properties.get("content_type"),
        Some(&FieldValue::LongString(b"x".to_vec()))
    );
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("x-custom"), Some(&FieldValue::I32(1)));
}

#[test]
fn from_flat_fills_typed_slots_and_nests_custom_headers() {
    let mut flat = FieldTable::new();
    flat.insert("content_type", "application/json");
    flat.insert("delivery_mode", 2i64);
    flat.insert("timestamp", FieldValue::Timestamp(1_700_000_000));
    flat.insert("type", "event");
    flat.insert("x-trace-id", "abc123");

    let props = BasicProperties::from_flat(&flat).expect("from_flat failed");

    assert_eq!(props.content_type.as_deref(), Some("application/json"));
    assert_eq!(props.delivery_mode, Some(2));
    assert_eq!(props.timestamp, Some(1_700_000_000));
    assert_eq!(props.kind.as_deref(), Some("event"));

    let headers = props.headers.expect("custom headers present");
    assert_eq!(
        headers.get("x-trace-id"),
        Some(&FieldValue::LongString(b"abc123".to_vec()))
    );
}

#[test]
fn content_header_round_trips_all_properties() {
    let mut headers = FieldTable::new();
    headers.insert("x-custom", "v");

    let properties = BasicProperties {
        content_type: Some("text/plain".to_string()),
        content_encoding: Some("utf-8".to_string()),
        headers: Some(headers),
        delivery_mode: Some(2),
        priority: Some(5),
        correlation_id: Some("corr-1".to_string()),
        reply_to: Some("amq.reply".to_string()),
        expiration: Some("60000".to_string()),
        message_id: Some("msg-1".to_string()),
        timestamp: Some(1_700_000_000),
        kind: Some("event".to_string()),
        user_id: Some("guest".to_string()),
        app_id: Some("app".to_string()),
        cluster_id: Some("cluster".to_string()),
    };

    let header = ContentHeader::new(60, 12_345, properties);
    let encoded = header.encode().expect("encode failed");

    // class 60, weight always 0, then the 8-byte body size.
    assert_eq!(&encoded[..4], &[0, 60, 0, 0]);
    assert_eq!(&encoded[4..12], &12_345u64.to_be_bytes());

    let decoded = ContentHeader::decode(&encoded).expect("decode failed");
    assert_eq!(decoded, header);
}

#[test]
fn content_header_flags_cover_only_present_properties() {
    let sparse = BasicProperties {
        content_type: Some("text/plain".to_string()),
        delivery_mode: Some(1),
        ..Default::default()
    };

    let header = ContentHeader::new(60, 0, sparse.clone());
    let encoded = header.encode().expect("encode failed");

    // Flags word sits right after class, weight, and body size.
    let flags = u16::from_be_bytes([encoded[12], encoded[13]]);
    assert_eq!(flags, (1 << 15) | (1 << 12));

    let decoded = ContentHeader::decode(&encoded).expect("decode failed");
    assert_eq!(decoded.properties, sparse);
    assert_eq!(decoded.body_size, 0);
}

#[test]
fn content_header_ignores_nonzero_weight_on_decode() {
    let header = ContentHeader::new(60, 9, BasicProperties::default());
    let mut encoded = header.encode().expect("encode failed");
    encoded[3] = 1; // weight low byte

    let decoded = ContentHeader::decode(&encoded).expect("decode failed");
    assert_eq!(decoded, header);
}
