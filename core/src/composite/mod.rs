//! composite/mod.rs
//! Composite data elements built from other `Encodable` values.
//!
//! Wire layout:
//!
//! ```text
//! fixed record    [pad][item 0][pad][item 1]...            aligned to max(1, item boundaries)
//! variable array  [pad][count:4][pad][elem 0][pad][elem 1]... aligned to max(4, elem boundaries)
//! ```
//!
//! Pads are zero bytes up to the next multiple of the following value's boundary.
//! Records and arrays nest freely through the `Encodable` contract.

pub mod fixed_record;
pub mod variable_array;

pub use fixed_record::FixedRecord;
pub use variable_array::VariableArray;
