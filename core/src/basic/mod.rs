//! basic/mod.rs
//! Basic HLA data elements.
//!
//! Fixed-width scalars align to their own width; the ASCII string aligns to
//! its 4-byte count field. These are the leaves composite codecs nest.

pub mod numeric;
pub mod octet;
pub mod string;

pub use numeric::{
    HlaFloat32BE, HlaFloat32LE, HlaFloat64BE, HlaFloat64LE, HlaInteger16BE, HlaInteger16LE,
    HlaInteger32BE, HlaInteger32LE, HlaInteger64BE, HlaInteger64LE,
};
pub use octet::{HlaBoolean, HlaOctet};
pub use string::HlaAsciiString;
