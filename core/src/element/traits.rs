//! element/traits.rs
//!
//! Contract every data element obeys:
//! - `encode` aligns the cursor to `octet_boundary()` and then writes exactly
//!   `encoded_length()` bytes.
//! - `decode` aligns the same way and reads the same number of bytes back.
//! - `encoded_length()` excludes the leading pad a container may insert.

use std::any::Any;
use std::fmt;

use crate::cursor::{ByteWrapper, WrapperConfig};
use crate::types::{DecoderError, EncoderError};

/// Downcast support for heterogeneous element collections.
///
/// Blanket implemented; call through the trait (`AsAny::as_any(item)`) on a
/// `&dyn Encodable` so the concrete element type is resolved.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A value that can be packed into and unpacked from a [`ByteWrapper`].
pub trait Encodable: AsAny + fmt::Debug {
    /// Required alignment of this value's first byte (at least 1).
    fn octet_boundary(&self) -> usize;

    /// Bytes this value occupies once encoded, including the padding of its
    /// own children.
    fn encoded_length(&self) -> usize;

    /// Align `wrapper` to `octet_boundary()` and write this value.
    fn encode(&self, wrapper: &mut ByteWrapper) -> Result<(), EncoderError>;

    /// Align `wrapper` to `octet_boundary()` and overwrite this value in place.
    fn decode(&mut self, wrapper: &mut ByteWrapper) -> Result<(), DecoderError>;

    /// Encode into a fresh buffer sized exactly to `encoded_length()`.
    fn to_bytes(&self) -> Result<Vec<u8>, EncoderError> {
        self.to_bytes_with(WrapperConfig::default())
    }

    fn to_bytes_with(&self, config: WrapperConfig) -> Result<Vec<u8>, EncoderError> {
        let mut wrapper = ByteWrapper::with_config(self.encoded_length(), config);
        self.encode(&mut wrapper)?;
        Ok(wrapper.into_inner())
    }

    /// Decode from raw bytes starting at offset 0.
    fn decode_bytes(&mut self, bytes: &[u8]) -> Result<(), DecoderError> {
        self.decode_bytes_with(bytes, WrapperConfig::default())
    }

    fn decode_bytes_with(&mut self, bytes: &[u8], config: WrapperConfig) -> Result<(), DecoderError> {
        let mut wrapper = ByteWrapper::from_vec_with(bytes.to_vec(), config);
        self.decode(&mut wrapper)
    }
}

/// Produces default-valued elements for a variable array.
///
/// Called on every growth step and when an empty array probes its boundary,
/// so each call must yield a structurally identical element.
pub trait ElementFactory<T> {
    fn create(&self) -> T;
}

impl<T, F> ElementFactory<T> for F
where
    F: Fn() -> T,
{
    fn create(&self) -> T {
        self()
    }
}
