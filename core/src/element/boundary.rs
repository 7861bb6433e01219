//! element/boundary.rs
//! Lazily computed octet boundary for composite elements.

use std::cell::Cell;

/// Cached boundary with an explicit dirty state.
///
/// `None` means dirty. Every mutation path of the owning container must call
/// `invalidate`; reads go through `get_or_compute`.
#[derive(Debug, Clone, Default)]
pub struct BoundaryCache {
    cached: Cell<Option<usize>>,
}

impl BoundaryCache {
    pub const fn new() -> Self {
        Self { cached: Cell::new(None) }
    }

    /// Return the cached boundary, computing and storing it when dirty.
    #[inline]
    pub fn get_or_compute<F>(&self, compute: F) -> usize
    where
        F: FnOnce() -> usize,
    {
        if let Some(boundary) = self.cached.get() {
            return boundary;
        }
        let boundary = compute();
        self.cached.set(Some(boundary));
        boundary
    }

    #[inline]
    pub fn invalidate(&self) {
        self.cached.set(None);
    }

    /// Current cached value without computing.
    #[inline]
    pub fn cached(&self) -> Option<usize> {
        self.cached.get()
    }
}
