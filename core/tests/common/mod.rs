//! Shared test elements: a call-counting probe and an always-failing element.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use byteorder::BigEndian;
use hla_encoding::cursor::ByteWrapper;
use hla_encoding::element::Encodable;
use hla_encoding::types::{DecoderError, EncoderError};

/// Call counters shared between a probe and the test that inspects it.
#[derive(Debug, Clone, Default)]
pub struct ProbeCounters {
    pub boundary: Rc<Cell<usize>>,
    pub encode: Rc<Cell<usize>>,
    pub decode: Rc<Cell<usize>>,
}

impl ProbeCounters {
    pub fn boundary_calls(&self) -> usize {
        self.boundary.get()
    }

    pub fn encode_calls(&self) -> usize {
        self.encode.get()
    }

    pub fn decode_calls(&self) -> usize {
        self.decode.get()
    }
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

/// A 2-byte big-endian integer that counts how often it is queried.
#[derive(Debug, Clone)]
pub struct ProbeElement {
    pub value: i16,
    pub counters: ProbeCounters,
}

impl ProbeElement {
    pub fn new(value: i16, counters: &ProbeCounters) -> Self {
        Self { value, counters: counters.clone() }
    }
}

impl Encodable for ProbeElement {
    fn octet_boundary(&self) -> usize {
        bump(&self.counters.boundary);
        2
    }

    fn encoded_length(&self) -> usize {
        2
    }

    fn encode(&self, wrapper: &mut ByteWrapper) -> Result<(), EncoderError> {
        bump(&self.counters.encode);
        wrapper.align(2)?;
        wrapper.put_i16::<BigEndian>(self.value)?;
        Ok(())
    }

    fn decode(&mut self, wrapper: &mut ByteWrapper) -> Result<(), DecoderError> {
        bump(&self.counters.decode);
        wrapper.align(2)?;
        self.value = wrapper.get_i16::<BigEndian>()?;
        Ok(())
    }
}

/// Element whose encode and decode always fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingElement;

impl Encodable for FailingElement {
    fn octet_boundary(&self) -> usize {
        1
    }

    fn encoded_length(&self) -> usize {
        0
    }

    fn encode(&self, _wrapper: &mut ByteWrapper) -> Result<(), EncoderError> {
        Err(EncoderError::InvalidValue { element: "FailingElement", msg: "always fails".into() })
    }

    fn decode(&mut self, _wrapper: &mut ByteWrapper) -> Result<(), DecoderError> {
        Err(DecoderError::Malformed { element: "FailingElement", msg: "always fails".into() })
    }
}
