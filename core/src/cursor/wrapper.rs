//! cursor/wrapper.rs
//!
//! `ByteWrapper`: an owned byte buffer with a single read/write position.
//!
//! Design notes:
//! - The buffer length is fixed at construction; writes never grow it.
//! - Every read and write is bounds-checked and advances the position.
//! - `align` zero-fills the bytes it skips, so padding is always zero on the wire.
//! - Multi-byte primitives are generic over `byteorder::ByteOrder`.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::constants::pad_to;
use crate::cursor::types::{Endian, WrapperConfig};
use crate::types::CursorError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteWrapper {
    buf: Vec<u8>,
    pos: usize,
    config: WrapperConfig,
}

impl ByteWrapper {
    /// Zeroed buffer of `len` bytes, default configuration.
    pub fn new(len: usize) -> Self {
        Self::with_config(len, WrapperConfig::default())
    }

    pub fn with_config(len: usize, config: WrapperConfig) -> Self {
        Self { buf: vec![0u8; len], pos: 0, config }
    }

    /// Wrap existing bytes for decoding, position at 0.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::from_vec_with(bytes, WrapperConfig::default())
    }

    pub fn from_vec_with(bytes: Vec<u8>, config: WrapperConfig) -> Self {
        Self { buf: bytes, pos: 0, config }
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }

    #[inline]
    pub fn config(&self) -> WrapperConfig {
        self.config
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Rewind to position 0. Contents are kept.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Whole underlying buffer, independent of the position.
    pub fn array(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    // -------------------------------------------------------------------------
    // Alignment and capacity
    // -------------------------------------------------------------------------

    /// Advance to the next multiple of `boundary`, writing zeros over the gap.
    pub fn align(&mut self, boundary: usize) -> Result<(), CursorError> {
        if boundary == 0 {
            return Err(CursorError::InvalidBoundary { boundary });
        }
        let gap = pad_to(self.pos, boundary) - self.pos;
        if gap > 0 {
            self.claim_write(gap)?.fill(0);
        }
        Ok(())
    }

    /// Fail unless at least `n` more bytes can be read.
    pub fn verify(&self, n: usize) -> Result<(), CursorError> {
        let have = self.remaining();
        if n > have {
            return Err(CursorError::Underflow { position: self.pos, need: n, have });
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Count fields (configured byte order)
    // -------------------------------------------------------------------------

    pub fn put_int(&mut self, v: i32) -> Result<(), CursorError> {
        match self.config.endian {
            Endian::Big => self.put_i32::<BigEndian>(v),
            Endian::Little => self.put_i32::<LittleEndian>(v),
        }
    }

    pub fn get_int(&mut self) -> Result<i32, CursorError> {
        match self.config.endian {
            Endian::Big => self.get_i32::<BigEndian>(),
            Endian::Little => self.get_i32::<LittleEndian>(),
        }
    }

    // -------------------------------------------------------------------------
    // Typed primitives
    // -------------------------------------------------------------------------

    pub fn put_u8(&mut self, v: u8) -> Result<(), CursorError> {
        self.claim_write(1)?[0] = v;
        Ok(())
    }

    pub fn get_u8(&mut self) -> Result<u8, CursorError> {
        Ok(self.claim_read(1)?[0])
    }

    pub fn put_i16<B: ByteOrder>(&mut self, v: i16) -> Result<(), CursorError> {
        B::write_i16(self.claim_write(2)?, v);
        Ok(())
    }

    pub fn get_i16<B: ByteOrder>(&mut self) -> Result<i16, CursorError> {
        Ok(B::read_i16(self.claim_read(2)?))
    }

    pub fn put_i32<B: ByteOrder>(&mut self, v: i32) -> Result<(), CursorError> {
        B::write_i32(self.claim_write(4)?, v);
        Ok(())
    }

    pub fn get_i32<B: ByteOrder>(&mut self) -> Result<i32, CursorError> {
        Ok(B::read_i32(self.claim_read(4)?))
    }

    pub fn put_i64<B: ByteOrder>(&mut self, v: i64) -> Result<(), CursorError> {
        B::write_i64(self.claim_write(8)?, v);
        Ok(())
    }

    pub fn get_i64<B: ByteOrder>(&mut self) -> Result<i64, CursorError> {
        Ok(B::read_i64(self.claim_read(8)?))
    }

    pub fn put_f32<B: ByteOrder>(&mut self, v: f32) -> Result<(), CursorError> {
        B::write_f32(self.claim_write(4)?, v);
        Ok(())
    }

    pub fn get_f32<B: ByteOrder>(&mut self) -> Result<f32, CursorError> {
        Ok(B::read_f32(self.claim_read(4)?))
    }

    pub fn put_f64<B: ByteOrder>(&mut self, v: f64) -> Result<(), CursorError> {
        B::write_f64(self.claim_write(8)?, v);
        Ok(())
    }

    pub fn get_f64<B: ByteOrder>(&mut self) -> Result<f64, CursorError> {
        Ok(B::read_f64(self.claim_read(8)?))
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<(), CursorError> {
        self.claim_write(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    pub fn get_bytes(&mut self, n: usize) -> Result<&[u8], CursorError> {
        self.claim_read(n)
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    fn claim_write(&mut self, n: usize) -> Result<&mut [u8], CursorError> {
        let have = self.remaining();
        if n > have {
            return Err(CursorError::Overflow { position: self.pos, need: n, have });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&mut self.buf[start..start + n])
    }

    fn claim_read(&mut self, n: usize) -> Result<&[u8], CursorError> {
        let have = self.remaining();
        if n > have {
            return Err(CursorError::Underflow { position: self.pos, need: n, have });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..start + n])
    }
}

impl From<Vec<u8>> for ByteWrapper {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl From<&[u8]> for ByteWrapper {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}
