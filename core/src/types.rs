//! types.rs
//! Error types for the cursor, the encoders and the decoders.
//!
//! - Cursor errors are raw bounds/alignment failures of the byte buffer.
//! - Encoder/decoder errors wrap cursor errors and element-level failures.
//! - Composite codecs wrap every nested failure in a `Component` variant so the
//!   full path to the failing element is visible through the `source()` chain.
//! - `IndexOutOfRange` is a caller programming error and is never wrapped.

use thiserror::Error;

/// Bounds and alignment failures of a [`ByteWrapper`](crate::cursor::ByteWrapper).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("invalid octet boundary: {boundary}")]
    InvalidBoundary { boundary: usize },

    #[error("buffer overflow at position {position}: need {need} bytes, {have} available")]
    Overflow { position: usize, need: usize, have: usize },

    #[error("buffer underflow at position {position}: need {need} bytes, {have} remain")]
    Underflow { position: usize, need: usize, have: usize },
}

/// Failure while encoding a data element.
#[derive(Debug, Error)]
pub enum EncoderError {
    #[error(transparent)]
    Cursor(#[from] CursorError),

    /// The in-memory value cannot be represented on the wire.
    #[error("invalid value for {element}: {msg}")]
    InvalidValue { element: &'static str, msg: String },

    /// Element count does not fit the 4-byte count field.
    #[error("element count {count} does not fit the count field")]
    CountOverflow { count: usize },

    /// A nested element failed while a composite was encoding it.
    #[error("{component}::encode failed: {source}")]
    Component {
        component: &'static str,
        #[source]
        source: Box<EncoderError>,
    },
}

impl EncoderError {
    /// Wrap `source` with the name of the composite that was encoding.
    pub fn component(component: &'static str, source: EncoderError) -> Self {
        EncoderError::Component { component, source: Box::new(source) }
    }

    /// Innermost error, skipping every `Component` wrapper.
    pub fn root_cause(&self) -> &EncoderError {
        match self {
            EncoderError::Component { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Failure while decoding a data element.
#[derive(Debug, Error)]
pub enum DecoderError {
    #[error(transparent)]
    Cursor(#[from] CursorError),

    /// Bytes were read but do not form a valid value.
    #[error("malformed {element}: {msg}")]
    Malformed { element: &'static str, msg: String },

    /// The element count read from the wire is negative.
    #[error("invalid element count: {count}")]
    InvalidCount { count: i32 },

    /// The element count read from the wire needs more bytes than remain.
    #[error("declared count {count} needs at least {need} bytes, {available} remain")]
    CountExceedsData { count: usize, need: usize, available: usize },

    /// A nested element failed while a composite was decoding it.
    #[error("{component}::decode failed: {source}")]
    Component {
        component: &'static str,
        #[source]
        source: Box<DecoderError>,
    },
}

impl DecoderError {
    /// Wrap `source` with the name of the composite that was decoding.
    pub fn component(component: &'static str, source: DecoderError) -> Self {
        DecoderError::Component { component, source: Box::new(source) }
    }

    /// Innermost error, skipping every `Component` wrapper.
    pub fn root_cause(&self) -> &DecoderError {
        match self {
            DecoderError::Component { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Index passed to `get` is past the end of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for length {len}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}
