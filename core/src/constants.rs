//! constants.rs
//! Wire constants shared by the composite codecs and the cursor.

/// Width in bytes of the element count that prefixes a variable array.
pub const COUNT_FIELD_LEN: usize = 4;

/// Smallest octet boundary a fixed record reports (an empty record is byte aligned).
pub const MIN_RECORD_BOUNDARY: usize = 1;

/// Smallest octet boundary a variable array reports; the count field is a 4-byte integer.
pub const MIN_ARRAY_BOUNDARY: usize = COUNT_FIELD_LEN;

/// Component names carried in wrapped encode/decode failures.
pub mod component_names {
    pub const FIXED_RECORD: &str = "HLAfixedRecord";
    pub const VARIABLE_ARRAY: &str = "HLAvariableArray";
}

/// Round `offset` up to the next multiple of `boundary`.
///
/// A boundary of 0 is treated as 1 so callers never divide by zero.
#[inline]
pub const fn pad_to(offset: usize, boundary: usize) -> usize {
    let b = if boundary == 0 { 1 } else { boundary };
    let rem = offset % b;
    if rem == 0 {
        offset
    } else {
        offset + (b - rem)
    }
}
