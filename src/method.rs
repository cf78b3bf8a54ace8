mod method_arg;
mod method_codec;
mod method_descriptor;
mod method_registry;

pub use method_arg::{ArgSpec, ArgType, ArgValue};
pub use method_codec::{decode_method, encode_method};
pub use method_descriptor::MethodDescriptor;
pub use method_registry::{DESCRIPTORS, lookup, lookup_index};
