//! basic/numeric.rs
//! Fixed-width integer and floating point elements.
//!
//! Each type is aligned to, and occupies, exactly its own width.

use byteorder::{BigEndian, LittleEndian};

use crate::cursor::ByteWrapper;
use crate::element::Encodable;
use crate::types::{DecoderError, EncoderError};

macro_rules! numeric_element {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $order:ty, $width:expr, $put:ident, $get:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            value: $ty,
        }

        impl $name {
            /// Encoded width in bytes; also the octet boundary.
            pub const WIDTH: usize = $width;

            pub fn new(value: $ty) -> Self {
                Self { value }
            }

            #[inline]
            pub fn value(&self) -> $ty {
                self.value
            }

            #[inline]
            pub fn set_value(&mut self, value: $ty) {
                self.value = value;
            }
        }

        impl From<$ty> for $name {
            fn from(value: $ty) -> Self {
                Self::new(value)
            }
        }

        impl Encodable for $name {
            #[inline]
            fn octet_boundary(&self) -> usize {
                Self::WIDTH
            }

            #[inline]
            fn encoded_length(&self) -> usize {
                Self::WIDTH
            }

            fn encode(&self, wrapper: &mut ByteWrapper) -> Result<(), EncoderError> {
                wrapper.align(Self::WIDTH)?;
                wrapper.$put::<$order>(self.value)?;
                Ok(())
            }

            fn decode(&mut self, wrapper: &mut ByteWrapper) -> Result<(), DecoderError> {
                wrapper.align(Self::WIDTH)?;
                self.value = wrapper.$get::<$order>()?;
                Ok(())
            }
        }
    };
}

numeric_element!(
    /// HLAinteger16BE
    HlaInteger16BE, i16, BigEndian, 2, put_i16, get_i16
);
numeric_element!(
    /// HLAinteger16LE
    HlaInteger16LE, i16, LittleEndian, 2, put_i16, get_i16
);
numeric_element!(
    /// HLAinteger32BE
    HlaInteger32BE, i32, BigEndian, 4, put_i32, get_i32
);
numeric_element!(
    /// HLAinteger32LE
    HlaInteger32LE, i32, LittleEndian, 4, put_i32, get_i32
);
numeric_element!(
    /// HLAinteger64BE
    HlaInteger64BE, i64, BigEndian, 8, put_i64, get_i64
);
numeric_element!(
    /// HLAinteger64LE
    HlaInteger64LE, i64, LittleEndian, 8, put_i64, get_i64
);
numeric_element!(
    /// HLAfloat32BE
    HlaFloat32BE, f32, BigEndian, 4, put_f32, get_f32
);
numeric_element!(
    /// HLAfloat32LE
    HlaFloat32LE, f32, LittleEndian, 4, put_f32, get_f32
);
numeric_element!(
    /// HLAfloat64BE
    HlaFloat64BE, f64, BigEndian, 8, put_f64, get_f64
);
numeric_element!(
    /// HLAfloat64LE
    HlaFloat64LE, f64, LittleEndian, 8, put_f64, get_f64
);
