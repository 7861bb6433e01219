//! composite/variable_array.rs
//!
//! `VariableArray<T>`: an ordered, homogeneous, resizable sequence of data
//! elements, prefixed on the wire with its element count.
//!
//! Design notes:
//! - Growth (via `resize` or `decode`) uses the factory supplied at construction.
//! - An empty array probes one factory element for its boundary and drops it.
//! - `decode` checks the declared count against the remaining bytes before it
//!   touches any element, so truncated or hostile input fails without mutation.

use std::fmt;
use std::slice;
use std::sync::Arc;

use tracing::Level;

use crate::constants::{component_names::VARIABLE_ARRAY, pad_to, COUNT_FIELD_LEN, MIN_ARRAY_BOUNDARY};
use crate::cursor::ByteWrapper;
use crate::element::{BoundaryCache, ElementFactory, Encodable};
use crate::types::{DecoderError, EncoderError, IndexOutOfRange};

pub struct VariableArray<T> {
    items: Vec<T>,
    factory: Arc<dyn ElementFactory<T>>,
    boundary: BoundaryCache,
}

impl<T: Encodable> VariableArray<T> {
    /// Empty array; `factory` produces the default element used for growth.
    pub fn new<F>(factory: F) -> Self
    where
        F: ElementFactory<T> + 'static,
    {
        Self::with_shared_factory(Arc::new(factory))
    }

    /// Array pre-seeded with `items`.
    pub fn with_elements<F, I>(factory: F, items: I) -> Self
    where
        F: ElementFactory<T> + 'static,
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::new(factory);
        array.items.extend(items);
        array
    }

    /// Empty array sharing a factory with other arrays.
    pub fn with_shared_factory(factory: Arc<dyn ElementFactory<T>>) -> Self {
        Self { items: Vec::new(), factory, boundary: BoundaryCache::new() }
    }

    pub fn factory(&self) -> &Arc<dyn ElementFactory<T>> {
        &self.factory
    }

    pub fn add_element(&mut self, item: T) {
        self.items.push(item);
        self.boundary.invalidate();
    }

    /// Number of elements (the array's `size`).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.items
            .get(index)
            .ok_or(IndexOutOfRange { index, len: self.items.len() })
    }

    /// Mutable access to an element. Invalidates the cached boundary.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        self.boundary.invalidate();
        let len = self.items.len();
        self.items.get_mut(index).ok_or(IndexOutOfRange { index, len })
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Invalidates the cached boundary.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.boundary.invalidate();
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Truncate from the tail or append factory defaults until `len() == new_size`.
    ///
    /// The first `min(len(), new_size)` elements are left untouched.
    pub fn resize(&mut self, new_size: usize) {
        if new_size == self.items.len() {
            return;
        }
        let factory = &self.factory;
        self.items.resize_with(new_size, || factory.create());
        self.boundary.invalidate();
    }

    fn compute_boundary(&self) -> usize {
        if self.items.is_empty() {
            return MIN_ARRAY_BOUNDARY.max(self.factory.create().octet_boundary());
        }
        self.items
            .iter()
            .map(Encodable::octet_boundary)
            .fold(MIN_ARRAY_BOUNDARY, usize::max)
    }

    /// Reject counts whose elements cannot fit in the bytes left.
    ///
    /// Every element is assumed to take at least one byte. That never
    /// overstates a real element, so valid input always passes, and it bounds
    /// the growth a hostile count can force. Elements that encode to zero bytes
    /// (an empty `FixedRecord`) are rejected for any non-zero count.
    fn verify_capacity(&self, wrapper: &ByteWrapper, count: usize) -> Result<(), DecoderError> {
        if wrapper.verify(count).is_ok() {
            return Ok(());
        }

        let available = wrapper.remaining();
        if tracing::enabled!(Level::WARN) {
            tracing::warn!(
                component = VARIABLE_ARRAY,
                count,
                available,
                position = wrapper.position(),
                "declared element count exceeds remaining data"
            );
        }
        Err(DecoderError::CountExceedsData { count, need: count, available })
    }

    fn encode_items(&self, wrapper: &mut ByteWrapper) -> Result<(), EncoderError> {
        let count = i32::try_from(self.items.len())
            .map_err(|_| EncoderError::CountOverflow { count: self.items.len() })?;

        wrapper.align(self.octet_boundary())?;
        wrapper.put_int(count)?;
        for item in &self.items {
            item.encode(wrapper)?;
        }
        Ok(())
    }

    fn decode_items(&mut self, wrapper: &mut ByteWrapper) -> Result<(), DecoderError> {
        wrapper.align(self.octet_boundary())?;
        let raw = wrapper.get_int()?;
        let count = usize::try_from(raw).map_err(|_| DecoderError::InvalidCount { count: raw })?;
        self.verify_capacity(wrapper, count)?;

        self.resize(count);
        for item in &mut self.items {
            item.decode(wrapper)?;
        }
        Ok(())
    }
}

impl<T: Encodable> Encodable for VariableArray<T> {
    fn octet_boundary(&self) -> usize {
        self.boundary.get_or_compute(|| self.compute_boundary())
    }

    fn encoded_length(&self) -> usize {
        self.items
            .iter()
            .fold(COUNT_FIELD_LEN, |size, item| pad_to(size, item.octet_boundary()) + item.encoded_length())
    }

    fn encode(&self, wrapper: &mut ByteWrapper) -> Result<(), EncoderError> {
        self.encode_items(wrapper).map_err(|err| {
            if tracing::enabled!(Level::DEBUG) {
                tracing::debug!(
                    component = VARIABLE_ARRAY,
                    elements = self.items.len(),
                    position = wrapper.position(),
                    error = %err,
                    "encode failed"
                );
            }
            EncoderError::component(VARIABLE_ARRAY, err)
        })
    }

    fn decode(&mut self, wrapper: &mut ByteWrapper) -> Result<(), DecoderError> {
        let result = self.decode_items(wrapper);
        // nested arrays may have resized
        self.boundary.invalidate();
        result.map_err(|err| {
            if tracing::enabled!(Level::DEBUG) {
                tracing::debug!(
                    component = VARIABLE_ARRAY,
                    elements = self.items.len(),
                    position = wrapper.position(),
                    error = %err,
                    "decode failed"
                );
            }
            DecoderError::component(VARIABLE_ARRAY, err)
        })
    }
}

impl<T: Clone> Clone for VariableArray<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            factory: Arc::clone(&self.factory),
            boundary: self.boundary.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for VariableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableArray")
            .field("items", &self.items)
            .field("boundary", &self.boundary.cached())
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> PartialEq for VariableArray<T> {
    /// Element-wise comparison; factories are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a, T> IntoIterator for &'a VariableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
