//! basic/octet.rs
//! Single-octet and boolean elements.

use byteorder::BigEndian;

use crate::cursor::ByteWrapper;
use crate::element::Encodable;
use crate::types::{DecoderError, EncoderError};

/// HLAoctet: one unaligned byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HlaOctet {
    value: u8,
}

impl HlaOctet {
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }
}

impl From<u8> for HlaOctet {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl Encodable for HlaOctet {
    fn octet_boundary(&self) -> usize {
        1
    }

    fn encoded_length(&self) -> usize {
        1
    }

    fn encode(&self, wrapper: &mut ByteWrapper) -> Result<(), EncoderError> {
        wrapper.put_u8(self.value)?;
        Ok(())
    }

    fn decode(&mut self, wrapper: &mut ByteWrapper) -> Result<(), DecoderError> {
        self.value = wrapper.get_u8()?;
        Ok(())
    }
}

/// HLAboolean: an HLAinteger32BE holding 1 (true) or 0 (false).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HlaBoolean {
    value: bool,
}

impl HlaBoolean {
    const WIRE_TRUE: i32 = 1;
    const WIRE_FALSE: i32 = 0;

    pub fn new(value: bool) -> Self {
        Self { value }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }
}

impl From<bool> for HlaBoolean {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl Encodable for HlaBoolean {
    fn octet_boundary(&self) -> usize {
        4
    }

    fn encoded_length(&self) -> usize {
        4
    }

    fn encode(&self, wrapper: &mut ByteWrapper) -> Result<(), EncoderError> {
        wrapper.align(4)?;
        let raw = if self.value { Self::WIRE_TRUE } else { Self::WIRE_FALSE };
        wrapper.put_i32::<BigEndian>(raw)?;
        Ok(())
    }

    fn decode(&mut self, wrapper: &mut ByteWrapper) -> Result<(), DecoderError> {
        wrapper.align(4)?;
        self.value = match wrapper.get_i32::<BigEndian>()? {
            Self::WIRE_TRUE => true,
            Self::WIRE_FALSE => false,
            other => {
                return Err(DecoderError::Malformed {
                    element: "HLAboolean",
                    msg: format!("expected 0 or 1, got {}", other),
                })
            }
        };
        Ok(())
    }
}
