//! hla-encoding
//!
//! Composite HLA data element codecs: `HLAfixedRecord` and `HLAvariableArray`.
//! Pure Rust, synchronous, no IO.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Cursor and element contract
pub mod cursor;
pub mod element;

// Data elements
pub mod basic;
pub mod composite;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::basic::*;
    pub use crate::composite::{FixedRecord, VariableArray};
    pub use crate::cursor::{ByteWrapper, Endian, WrapperConfig};
    pub use crate::element::{ElementFactory, Encodable};
    pub use crate::types::{CursorError, DecoderError, EncoderError, IndexOutOfRange};
}
