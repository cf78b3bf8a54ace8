use amqwire::error::{DecodeError, EncodeError};
use amqwire::table::{FieldTable, FieldValue, TableCodec};
use chrono::{TimeZone, Utc};

#[test]
fn empty_table_is_four_zero_bytes() {
    let encoded = TableCodec::encode(&FieldTable::new()).expect("encode failed");
    assert_eq!(encoded, vec![0, 0, 0, 0]);

    let decoded = TableCodec::decode(&encoded).expect("decode failed");
    assert!(decoded.is_empty());
}

#[test]
fn every_field_value_variant_round_trips() {
    let mut nested = FieldTable::new();
    nested.insert("inner", FieldValue::I32(-7));

    let mut table = FieldTable::new();
    table.insert("bool", FieldValue::Bool(true));
    table.insert("i8", FieldValue::I8(-100));
    table.insert("u8", FieldValue::U8(200));
    table.insert("i16", FieldValue::I16(-30_000));
    table.insert("u16", FieldValue::U16(60_000));
    table.insert("i32", FieldValue::I32(-2_000_000_000));
    table.insert("u32", FieldValue::U32(4_000_000_000));
    table.insert("i64", FieldValue::I64(-9_000_000_000_000_000_000));
    table.insert("f32", FieldValue::F32(1.25));
    table.insert("f64", FieldValue::F64(2.718281828));
    table.insert(
        "decimal",
        FieldValue::Decimal {
            scale: 2,
            value: -314,
        },
    );
    table.insert("string", FieldValue::LongString(b"hello".to_vec()));
    table.insert("timestamp", FieldValue::Timestamp(1_700_000_000));
    table.insert("table", FieldValue::Table(nested.clone()));
    table.insert(
        "array",
        FieldValue::Array(vec![
            FieldValue::I32(1),
            FieldValue::LongString(b"two".to_vec()),
            FieldValue::Bool(false),
        ]),
    );
    table.insert("void", FieldValue::Void);

    let encoded = TableCodec::encode(&table).expect("encode failed");
    let decoded = TableCodec::decode(&encoded).expect("decode failed");

    assert_eq!(decoded.len(), table.len());
    assert_eq!(decoded.get("bool"), Some(&FieldValue::Bool(true)));
    assert_eq!(decoded.get("i8"), Some(&FieldValue::I8(-100)));
    assert_eq!(decoded.get("u8"), Some(&FieldValue::U8(200)));
    assert_eq!(decoded.get("i16"), Some(&FieldValue::I16(-30_000)));
    assert_eq!(decoded.get("u16"), Some(&FieldValue::U16(60_000)));
    assert_eq!(decoded.get("i32"), Some(&FieldValue::I32(-2_000_000_000)));
    assert_eq!(decoded.get("u32"), Some(&FieldValue::U32(4_000_000_000)));
    assert_eq!(
        decoded.get("i64"),
        Some(&FieldValue::I64(-9_000_000_000_000_000_000))
    );
    assert_eq!(
        decoded.get("decimal"),
        Some(&FieldValue::Decimal {
            scale: 2,
            value: -314
        })
    );
    assert_eq!(
        decoded.get("string"),
        Some(&FieldValue::LongString(b"hello".to_vec()))
    );
    assert_eq!(
        decoded.get("timestamp"),
        Some(&FieldValue::Timestamp(1_700_000_000))
    );
    assert_eq!(decoded.get("table"), Some(&FieldValue::Table(nested)));
    assert_eq!(decoded.get("void"), Some(&FieldValue::Void));

    match decoded.get("f32") {
        Some(FieldValue::F32(v)) => assert!((v - 1.25).abs() < f32::EPSILON),
        other => panic!("expected F32, got {other:?}"),
    }
    match decoded.get("f64") {
        Some(FieldValue::F64(v)) => assert!((v - 2.718281828).abs() < 1e-9),
        other => panic!("expected F64, got {other:?}"),
    }
    match decoded.get("array") {
        Some(FieldValue::Array(values)) => {
            assert_eq!(values.len(), 3);
            assert_eq!(values[0], FieldValue::I32(1));
            assert_eq!(values[1], FieldValue::LongString(b"two".to_vec()));
            assert_eq!(values[2], FieldValue::Bool(false));
        }
        other => panic!("expected Array, got {other:?}"),
    }
}

#[test]
fn insertion_order_is_preserved_through_round_trip() {
    let mut table = FieldTable::new();
    table.insert("zebra", 1i64);
    table.insert("apple", 2i64);
    table.insert("mango", 3i64);

    let encoded = TableCodec::encode(&table).expect("encode failed");
    let decoded = TableCodec::decode(&encoded).expect("decode failed");

    let names: Vec<&str> = decoded.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["zebra", "apple", "mango"]);

    // Order preserved means the round trip is byte-identical as well.
    assert_eq!(TableCodec::encode(&decoded).expect("re-encode failed"), encoded);
}

#[test]
fn numeric_width_policy_defaults_to_32_and_promotes_to_64() {
    assert_eq!(FieldValue::from(5i64), FieldValue::I32(5));
    assert_eq!(FieldValue::from(-5i64), FieldValue::I32(-5));
    assert_eq!(
        FieldValue::from(i64::from(i32::MAX)),
        FieldValue::I32(i32::MAX)
    );
    assert_eq!(
        FieldValue::from(i64::from(i32::MAX) + 1),
        FieldValue::I64(i64::from(i32::MAX) + 1)
    );
    assert_eq!(
        FieldValue::from(i64::from(i32::MIN) - 1),
        FieldValue::I64(i64::from(i32::MIN) - 1)
    );

    // Floats always take the 64-bit tag; strings always the long-string tag.
    assert_eq!(FieldValue::from(1.5f32), FieldValue::F64(1.5));
    assert_eq!(
        FieldValue::from("x"),
        FieldValue::LongString(b"x".to_vec())
    );
}

#[test]
fn datetime_conversions_use_whole_seconds() {
    let dt = Utc.timestamp_opt(1_700_000_000, 0).single().expect("valid");
    let value = FieldValue::from(dt);
    assert_eq!(value, FieldValue::Timestamp(1_700_000_000));
    assert_eq!(value.as_datetime(), Some(dt));
}

#[test]
fn length_reads_only_the_prefix() {
    let mut table = FieldTable::new();
    table.insert("key", "value");
    let encoded = TableCodec::encode(&table).expect("encode failed");

    let length = TableCodec::length(&encoded).expect("length failed");
    assert_eq!(length as usize, encoded.len() - 4);

    // The prefix alone is enough; the entries need not be present.
    assert_eq!(TableCodec::length(&encoded[..4]).expect("length failed"), length);

    assert!(matches!(
        TableCodec::length(&[0, 0]),
        Err(DecodeError::BufferTooShort { .. })
    ));
}

#[test]
fn decode_rejects_unknown_type_tag() {
    let bytes = [0, 0, 0, 3, 1, b'a', b'Z'];
    assert_eq!(
        TableCodec::decode(&bytes),
        Err(DecodeError::UnknownFieldType(b'Z'))
    );
}

#[test]
fn decode_rejects_entry_overrunning_declared_length() {
    // Declared table length is 6 bytes, but the entry's long-string length
    // field alone would need more than that.
    let bytes = [0, 0, 0, 6, 1, b'a', b'S', 0, 0, 0, 100];
    assert_eq!(TableCodec::decode(&bytes), Err(DecodeError::TableOverrun));
}

#[test]
fn decode_rejects_truncated_buffer() {
    let mut table = FieldTable::new();
    table.insert("key", "value");
    let encoded = TableCodec::encode(&table).expect("encode failed");

    assert!(TableCodec::decode(&encoded[..encoded.len() - 1]).is_err());
}

#[test]
fn encode_rejects_overlong_field_name() {
    let mut table = FieldTable::new();
    table.insert("k".repeat(300), FieldValue::Void);

    assert_eq!(
        TableCodec::encode(&table),
        Err(EncodeError::FieldNameTooLong(300))
    );
}

#[test]
fn insert_replaces_existing_entry_in_place() {
    let mut table = FieldTable::new();
    table.insert("a", 1i64);
    table.insert("b", 2i64);
    table.insert("a", 3i64);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("a"), Some(&FieldValue::I32(3)));
    let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["a", "b"]);
}
