//! element/mod.rs
//! The data element contract shared by basic and composite codecs.
//!
//! - `Encodable`: boundary, length, encode, decode.
//! - `ElementFactory`: produces default elements for growing arrays.
//! - `BoundaryCache`: lazily computed octet boundary with explicit invalidation.

pub mod boundary;
pub mod traits;

pub use boundary::BoundaryCache;
pub use traits::{AsAny, ElementFactory, Encodable};
