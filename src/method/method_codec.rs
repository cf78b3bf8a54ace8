use crate::error::{DecodeError, EncodeError};
use crate::method::{ArgType, ArgValue, MethodDescriptor, lookup_index};
use crate::table;
use crate::wire::{Decoder, Encoder};

/// Encodes `class:u16 | method:u16` followed by the declared arguments.
///
/// `args` supplies only the non-reserved slots, in declaration order.
/// Consecutive bit arguments (reserved ones included) are packed LSB-first
/// into shared octets, flushed at the first non-bit argument.
pub fn encode_method(
    descriptor: &MethodDescriptor,
    args: &[ArgValue],
) -> Result<Vec<u8>, EncodeError> {
    let expected = descriptor.args.iter().filter(|a| !a.reserved).count();
    if args.len() != expected {
        return Err(EncodeError::ArgumentCount {
            method: descriptor.name,
            expected,
            got: args.len(),
        });
    }

    let mut encoder = Encoder::with_capacity(64);
    encoder.write_u16(descriptor.class_id);
    encoder.write_u16(descriptor.method_id);

    let mut args = args.iter();
    let mut bits: u8 = 0;
    let mut bit_count: u8 = 0;

    for spec in descriptor.args {
        if spec.ty == ArgType::Bit {
            let set = if spec.reserved {
                false
            } else {
                match args.next() {
                    Some(ArgValue::Bit(v)) => *v,
                    _ => {
                        return Err(EncodeError::ArgumentType {
                            method: descriptor.name,
                            arg: spec.name,
                        });
                    }
                }
            };
            if set {
                bits |= 1 << bit_count;
            }
            bit_count += 1;
            if bit_count == 8 {
                encoder.write_u8(bits);
                bits = 0;
                bit_count = 0;
            }
            continue;
        }

        if bit_count > 0 {
            encoder.write_u8(bits);
            bits = 0;
            bit_count = 0;
        }

        if spec.reserved {
            write_reserved(spec.ty, &mut encoder)?;
            continue;
        }

        let value = args.next();
        let mismatch = || EncodeError::ArgumentType {
            method: descriptor.name,
            arg: spec.name,
        };
        match (spec.ty, value) {
            (ArgType::Octet, Some(ArgValue::Octet(v))) => encoder.write_u8(*v),
            (ArgType::Short, Some(ArgValue::Short(v))) => encoder.write_u16(*v),
            (ArgType::Long, Some(ArgValue::Long(v))) => encoder.write_u32(*v),
            (ArgType::LongLong, Some(ArgValue::LongLong(v))) => encoder.write_u64(*v),
            (ArgType::Timestamp, Some(ArgValue::Timestamp(v))) => encoder.write_u64(*v),
            (ArgType::ShortStr, Some(ArgValue::ShortStr(v))) => encoder.write_short_string(v)?,
            (ArgType::LongStr, Some(ArgValue::LongStr(v))) => encoder.write_long_string(v),
            (ArgType::Table, Some(ArgValue::Table(v))) => table::encode_table_into(v, &mut encoder)?,
            _ => return Err(mismatch()),
        }
    }

    if bit_count > 0 {
        encoder.write_u8(bits);
    }

    Ok(encoder.into_bytes())
}

/// Decodes a method frame payload into its descriptor and the caller-facing
/// argument values (reserved slots are read and discarded).
pub fn decode_method(
    payload: &[u8],
) -> Result<(&'static MethodDescriptor, Vec<ArgValue>), DecodeError> {
    let mut decoder = Decoder::new(payload);
    let class_id = decoder.read_u16()?;
    let method_id = decoder.read_u16()?;
    let index = ((class_id as u32) << 16) | method_id as u32;

    let Some(descriptor) = lookup_index(index) else {
        tracing::error!("unknown method index {index:#010x} in method frame");
        return Err(DecodeError::UnknownMethod(index));
    };

    let mut args = Vec::with_capacity(descriptor.args.len());
    let mut bits: u8 = 0;
    let mut bits_left: u8 = 0;

    for spec in descriptor.args {
        if spec.ty == ArgType::Bit {
            if bits_left == 0 {
                bits = decoder.read_u8()?;
                bits_left = 8;
            }
            let set = bits & 1 != 0;
            bits >>= 1;
            bits_left -= 1;
            if !spec.reserved {
                args.push(ArgValue::Bit(set));
            }
            continue;
        }

        bits_left = 0;

        let value = match spec.ty {
            ArgType::Octet => ArgValue::Octet(decoder.read_u8()?),
            ArgType::Short => ArgValue::Short(decoder.read_u16()?),
            ArgType::Long => ArgValue::Long(decoder.read_u32()?),
            ArgType::LongLong => ArgValue::LongLong(decoder.read_u64()?),
            ArgType::Timestamp => ArgValue::Timestamp(decoder.read_u64()?),
            ArgType::ShortStr => ArgValue::ShortStr(decoder.read_short_string()?.to_string()),
            ArgType::LongStr => ArgValue::LongStr(decoder.read_long_string()?.to_vec()),
            ArgType::Table => ArgValue::Table(table::decode_table(&mut decoder)?),
            ArgType::Bit => unreachable!("handled above"),
        };
        if !spec.reserved {
            args.push(value);
        }
    }

    Ok((descriptor, args))
}

fn write_reserved(ty: ArgType, encoder: &mut Encoder) -> Result<(), EncodeError> {
    match ty {
        ArgType::Octet => encoder.write_u8(0),
        ArgType::Short => encoder.write_u16(0),
        ArgType::Long => encoder.write_u32(0),
        ArgType::LongLong | ArgType::Timestamp => encoder.write_u64(0),
        ArgType::ShortStr => encoder.write_short_string("")?,
        ArgType::LongStr => encoder.write_long_string(&[]),
        ArgType::Table => encoder.write_u32(0),
        ArgType::Bit => unreachable!("bits are packed by the caller"),
    }
    Ok(())
}
