//! cursor/types.rs
//! Cursor configuration.

/// Byte order the cursor uses for its own count fields (`put_int` / `get_int`).
///
/// Typed element encoders pick their byte order explicitly; this only governs
/// the integers written on behalf of containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Big,
    Little,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapperConfig {
    /// Byte order of container count fields.
    /// - `Endian::Big` (default) matches the HLA standard encoding.
    pub endian: Endian,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self { endian: Endian::Big }
    }
}

impl WrapperConfig {
    pub fn new(endian: Endian) -> Self {
        Self { endian }
    }
}
