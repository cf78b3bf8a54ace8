use crate::table::FieldTable;

/// Wire type of a single method argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// One bit; consecutive bits in a declaration share octets.
    Bit,
    Octet,
    Short,
    Long,
    LongLong,
    ShortStr,
    LongStr,
    Table,
    Timestamp,
}

/// Declaration of one argument slot in a method descriptor.
///
/// Reserved slots exist on the wire but not in the caller-facing argument
/// list: encode writes the protocol default and decode reads and discards.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub ty: ArgType,
    pub reserved: bool,
}

impl ArgSpec {
    pub const fn new(name: &'static str, ty: ArgType) -> Self {
        Self {
            name,
            ty,
            reserved: false,
        }
    }

    pub const fn reserved(name: &'static str, ty: ArgType) -> Self {
        Self {
            name,
            ty,
            reserved: true,
        }
    }
}

/// A typed method-argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Bit(bool),
    Octet(u8),
    Short(u16),
    Long(u32),
    LongLong(u64),
    ShortStr(String),
    LongStr(Vec<u8>),
    Table(FieldTable),
    Timestamp(u64),
}

impl ArgValue {
    pub fn matches(&self, ty: ArgType) -> bool {
        matches!(
            (self, ty),
            (ArgValue::Bit(_), ArgType::Bit)
                | (ArgValue::Octet(_), ArgType::Octet)
                | (ArgValue::Short(_), ArgType::Short)
                | (ArgValue::Long(_), ArgType::Long)
                | (ArgValue::LongLong(_), ArgType::LongLong)
                | (ArgValue::ShortStr(_), ArgType::ShortStr)
                | (ArgValue::LongStr(_), ArgType::LongStr)
                | (ArgValue::Table(_), ArgType::Table)
                | (ArgValue::Timestamp(_), ArgType::Timestamp)
        )
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        ArgValue::Bit(v)
    }
}

impl From<u8> for ArgValue {
    fn from(v: u8) -> Self {
        ArgValue::Octet(v)
    }
}

impl From<u16> for ArgValue {
    fn from(v: u16) -> Self {
        ArgValue::Short(v)
    }
}

impl From<u32> for ArgValue {
    fn from(v: u32) -> Self {
        ArgValue::Long(v)
    }
}

impl From<u64> for ArgValue {
    fn from(v: u64) -> Self {
        ArgValue::LongLong(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        ArgValue::ShortStr(v.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        ArgValue::ShortStr(v)
    }
}

impl From<Vec<u8>> for ArgValue {
    fn from(v: Vec<u8>) -> Self {
        ArgValue::LongStr(v)
    }
}

impl From<FieldTable> for ArgValue {
    fn from(v: FieldTable) -> Self {
        ArgValue::Table(v)
    }
}
