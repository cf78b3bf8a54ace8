//! Wire-level codec for the AMQP 0-9-1 binary protocol.
//!
//! This crate covers the byte-exact encode/decode contracts the protocol's
//! connection and channel layers depend on: typed field values and field
//! tables, the frame envelope, the static method registry with per-class
//! argument codecs, and content handling (header-frame properties and body
//! segmentation).
//!
//! All operations are pure, synchronous transformations over caller-owned
//! buffers. The only process-wide state is the immutable method registry,
//! built once on first use. Socket I/O, negotiation, and the protocol state
//! machine all live in the layers that consume this crate.
pub mod constants;
pub mod content;
pub mod error;
pub mod frame;
pub mod method;
pub mod table;
pub mod wire;
