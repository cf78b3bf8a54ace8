use crate::error::EncodeError;
use crate::method::{self, ArgSpec, ArgValue};

/// Static description of one protocol method: its identity, its ordered
/// argument list, and whether a content header/body sequence follows it.
///
/// Descriptors are declared once in the registry and never constructed at
/// runtime; encode and decode are driven entirely by the argument specs, so
/// there is no per-method codec code.
#[derive(Debug)]
pub struct MethodDescriptor {
    pub class_id: u16,
    pub method_id: u16,

    /// Dotted protocol name, e.g. `basic.publish`.
    pub name: &'static str,

    pub args: &'static [ArgSpec],

    /// True when a header frame and body frames carry a message payload
    /// after this method.
    pub has_content: bool,
}

impl MethodDescriptor {
    /// The registry lookup key: `(class-id << 16) | method-id`.
    pub const fn index(&self) -> u32 {
        ((self.class_id as u32) << 16) | self.method_id as u32
    }

    /// Encodes this method's frame payload from the caller-facing argument
    /// values (reserved slots are filled in automatically).
    pub fn encode(&self, args: &[ArgValue]) -> Result<Vec<u8>, EncodeError> {
        method::encode_method(self, args)
    }
}
