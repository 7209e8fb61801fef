//! Fixed-capacity `Copy` text buffer used as the word underlying a
//! [`crate::ParamCell`].

/// Maximum length of a stored parameter value, in bytes. Comfortably
/// covers any decimal fixed-point literal or the longest `MODE` name
/// (`synchronous`, 12 bytes).
pub const PARAM_TEXT_CAPACITY: usize = 32;

/// A `Copy`, fixed-capacity byte buffer holding one parameter's textual
/// value. Longer input is truncated rather than rejected — a
/// misconfigured write degrades to a shorter string, never panics or
/// allocates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamText {
    bytes: [u8; PARAM_TEXT_CAPACITY],
    len: u8,
}

impl ParamText {
    /// Build a `ParamText` from a string slice, truncating to
    /// [`PARAM_TEXT_CAPACITY`] bytes if necessary.
    #[must_use]
    pub fn new(value: &str) -> Self {
        let mut bytes = [0u8; PARAM_TEXT_CAPACITY];
        let mut len = 0u8;
        for (slot, byte) in bytes.iter_mut().zip(value.as_bytes()) {
            *slot = *byte;
            len += 1;
        }
        Self { bytes, len }
    }

    /// The stored text. Always valid UTF-8: construction only ever
    /// truncates at a byte boundary that happens to coincide with the
    /// ASCII decimal grammar's characters, and every write path in this
    /// crate only ever stores ASCII.
    #[must_use]
    pub fn as_str(&self) -> &str {
        let slice = self.bytes.get(..usize::from(self.len)).unwrap_or(&[]);
        core::str::from_utf8(slice).unwrap_or_default()
    }
}

impl Default for ParamText {
    fn default() -> Self {
        Self::new("")
    }
}
