//! cursor/mod.rs
//! Positional byte buffer used by every encoder and decoder.
//!
//! Responsibilities:
//! - Bounds-checked positional reads and writes
//! - Alignment advancement with zeroed padding
//! - Capacity checks before decoding counted content
//!
//! Non-responsibilities:
//! - Element layout (each element aligns itself)
//! - Transport or IO

pub mod types;
pub mod wrapper;

pub use types::{Endian, WrapperConfig};
pub use wrapper::ByteWrapper;
