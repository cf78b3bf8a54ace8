use thiserror::Error;

/// Failures raised while serializing values onto the wire.
///
/// Encoding never produces a partial buffer; every error is returned before
/// any bytes are handed back to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("short string too long: {0} bytes (max 255)")]
    ShortStringTooLong(usize),

    #[error("field name too long: {0} bytes (max 255)")]
    FieldNameTooLong(usize),

    #[error("channel out of range: {0} (must be 0-65535)")]
    ChannelOutOfRange(u32),

    #[error("{method} expects {expected} arguments, got {got}")]
    ArgumentCount {
        method: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{method} argument `{arg}` has the wrong type")]
    ArgumentType {
        method: &'static str,
        arg: &'static str,
    },

    #[error("property `{0}` has the wrong shape")]
    PropertyType(&'static str),
}

/// Failures raised while parsing bytes off the wire.
///
/// Decoding is all-or-nothing: no function returns a partially populated
/// value alongside one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("buffer too short: need {needed} bytes, have {available}")]
    BufferTooShort { needed: usize, available: usize },

    #[error("unknown field-value type tag: {0:#04x}")]
    UnknownFieldType(u8),

    #[error("unknown frame type: {0}")]
    UnknownFrameKind(u8),

    #[error("unknown method index: {0:#010x}")]
    UnknownMethod(u32),

    #[error("table entry overruns the declared table length")]
    TableOverrun,

    #[error("invalid UTF-8 in short string")]
    InvalidUtf8,

    /// The octet after the declared payload was not 0xCE. Unlike the other
    /// variants this is a fatal framing violation, not a recoverable parse
    /// error; the connection layer is expected to tear the socket down.
    #[error("bad frame-end octet: {0:#04x} (expected 0xCE)")]
    BadFrameEnd(u8),
}
