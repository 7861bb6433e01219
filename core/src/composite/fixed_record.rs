//! composite/fixed_record.rs
//!
//! `FixedRecord`: an ordered, heterogeneous sequence of data elements packed
//! back to back with no count or type prefix.
//!
//! Design notes:
//! - Items are append-only; a record's shape is fixed once built.
//! - `decode` never creates items. The caller must shape the record with
//!   placeholder values first; decode only overwrites them in place.
//! - The octet boundary is cached and invalidated on every mutable access.
//! - Read-only iteration leaves the cache untouched. Decode invalidates it,
//!   since a nested array may have changed length and with it its boundary.

use std::slice;

use tracing::Level;

use crate::constants::{component_names::FIXED_RECORD, pad_to, MIN_RECORD_BOUNDARY};
use crate::cursor::ByteWrapper;
use crate::element::{AsAny, BoundaryCache, Encodable};
use crate::types::{DecoderError, EncoderError, IndexOutOfRange};

#[derive(Debug, Default)]
pub struct FixedRecord {
    items: Vec<Box<dyn Encodable>>,
    boundary: BoundaryCache,
}

impl FixedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already boxed item.
    pub fn add(&mut self, item: Box<dyn Encodable>) {
        self.items.push(item);
        self.boundary.invalidate();
    }

    pub fn push<E: Encodable>(&mut self, item: E) {
        self.add(Box::new(item));
    }

    /// Builder form of [`push`](Self::push), handy for shaping nested records.
    pub fn with<E: Encodable>(mut self, item: E) -> Self {
        self.push(item);
        self
    }

    /// Number of items (the record's `size`).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&dyn Encodable, IndexOutOfRange> {
        match self.items.get(index) {
            Some(item) => Ok(&**item),
            None => Err(IndexOutOfRange { index, len: self.items.len() }),
        }
    }

    /// Mutable access to an item. Invalidates the cached boundary.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut dyn Encodable, IndexOutOfRange> {
        self.boundary.invalidate();
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(item) => Ok(&mut **item),
            None => Err(IndexOutOfRange { index, len }),
        }
    }

    /// Item at `index` as its concrete type, `None` if absent or of another type.
    pub fn get_as<E: Encodable>(&self, index: usize) -> Option<&E> {
        let item = self.items.get(index)?;
        AsAny::as_any(&**item).downcast_ref::<E>()
    }

    pub fn get_as_mut<E: Encodable>(&mut self, index: usize) -> Option<&mut E> {
        self.boundary.invalidate();
        let item = self.items.get_mut(index)?;
        AsAny::as_any_mut(&mut **item).downcast_mut::<E>()
    }

    /// Items in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.items.iter() }
    }

    fn compute_boundary(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.octet_boundary())
            .fold(MIN_RECORD_BOUNDARY, usize::max)
    }

    fn encode_items(&self, wrapper: &mut ByteWrapper) -> Result<(), EncoderError> {
        wrapper.align(self.octet_boundary())?;
        for item in &self.items {
            item.encode(wrapper)?;
        }
        Ok(())
    }

    fn decode_items(&mut self, wrapper: &mut ByteWrapper) -> Result<(), DecoderError> {
        wrapper.align(self.octet_boundary())?;
        for item in &mut self.items {
            item.decode(wrapper)?;
        }
        Ok(())
    }
}

impl Encodable for FixedRecord {
    fn octet_boundary(&self) -> usize {
        self.boundary.get_or_compute(|| self.compute_boundary())
    }

    /// Packed size of the items; the leading pad a container adds is excluded.
    fn encoded_length(&self) -> usize {
        self.items
            .iter()
            .fold(0, |offset, item| pad_to(offset, item.octet_boundary()) + item.encoded_length())
    }

    fn encode(&self, wrapper: &mut ByteWrapper) -> Result<(), EncoderError> {
        self.encode_items(wrapper).map_err(|err| {
            if tracing::enabled!(Level::DEBUG) {
                tracing::debug!(
                    component = FIXED_RECORD,
                    items = self.items.len(),
                    position = wrapper.position(),
                    error = %err,
                    "encode failed"
                );
            }
            EncoderError::component(FIXED_RECORD, err)
        })
    }

    fn decode(&mut self, wrapper: &mut ByteWrapper) -> Result<(), DecoderError> {
        let result = self.decode_items(wrapper);
        // nested arrays may have resized
        self.boundary.invalidate();
        result.map_err(|err| {
            if tracing::enabled!(Level::DEBUG) {
                tracing::debug!(
                    component = FIXED_RECORD,
                    items = self.items.len(),
                    position = wrapper.position(),
                    error = %err,
                    "decode failed"
                );
            }
            DecoderError::component(FIXED_RECORD, err)
        })
    }
}

/// Iterator over the items of a [`FixedRecord`].
pub struct Iter<'a> {
    inner: slice::Iter<'a, Box<dyn Encodable>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a dyn Encodable;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| &**item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FixedRecord {
    type Item = &'a dyn Encodable;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
