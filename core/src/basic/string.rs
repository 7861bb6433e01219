//! basic/string.rs
//! HLAASCIIstring: a 4-byte character count followed by one octet per character.
//!
//! The count is written through the cursor's `put_int`, the same field layout a
//! variable array of octets uses.

use crate::constants::COUNT_FIELD_LEN;
use crate::cursor::ByteWrapper;
use crate::element::Encodable;
use crate::types::{DecoderError, EncoderError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HlaAsciiString {
    value: String,
}

impl HlaAsciiString {
    const NAME: &'static str = "HLAASCIIstring";

    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl From<&str> for HlaAsciiString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HlaAsciiString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Encodable for HlaAsciiString {
    fn octet_boundary(&self) -> usize {
        COUNT_FIELD_LEN
    }

    fn encoded_length(&self) -> usize {
        COUNT_FIELD_LEN + self.value.len()
    }

    fn encode(&self, wrapper: &mut ByteWrapper) -> Result<(), EncoderError> {
        if !self.value.is_ascii() {
            return Err(EncoderError::InvalidValue {
                element: Self::NAME,
                msg: "contains non-ASCII characters".into(),
            });
        }
        let count = i32::try_from(self.value.len())
            .map_err(|_| EncoderError::CountOverflow { count: self.value.len() })?;

        wrapper.align(COUNT_FIELD_LEN)?;
        wrapper.put_int(count)?;
        wrapper.put_bytes(self.value.as_bytes())?;
        Ok(())
    }

    fn decode(&mut self, wrapper: &mut ByteWrapper) -> Result<(), DecoderError> {
        wrapper.align(COUNT_FIELD_LEN)?;
        let raw = wrapper.get_int()?;
        let count = usize::try_from(raw).map_err(|_| DecoderError::InvalidCount { count: raw })?;
        wrapper.verify(count)?;

        let bytes = wrapper.get_bytes(count)?;
        if !bytes.is_ascii() {
            return Err(DecoderError::Malformed {
                element: Self::NAME,
                msg: "contains non-ASCII octets".into(),
            });
        }
        self.value = bytes.iter().map(|&b| b as char).collect();
        Ok(())
    }
}
