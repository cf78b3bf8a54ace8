// Frame related constants
pub const FRAME_END: u8 = 0xCE;
pub const FRAME_HEADER_SIZE: usize = 7;
pub const MAX_CHANNEL: u16 = 65535;

/// Fixed per-frame overhead in bytes:
/// 1 type + 2 channel + 4 payload length + 1 trailer octet.
pub const FRAME_OVERHEAD: usize = 8;

/// Longest encodable short string or field-table name, in bytes.
/// The wire format prefixes both with a single length octet.
pub const MAX_SHORT_STRING: usize = 255;
