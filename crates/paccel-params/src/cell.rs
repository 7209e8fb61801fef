//! Lock-free single-writer/many-reader storage for one [`ParamText`].

use crossbeam::atomic::AtomicCell;

use crate::text::ParamText;

/// Holds one parameter's text value behind [`crossbeam::atomic::AtomicCell`]
/// — the workspace's existing "RT-safe primitive" dependency for exactly
/// this concern (see `SPEC_FULL.md` §4.9). Per `spec.md` §5, "the core
/// tolerates a torn read by producing one slightly-wrong event, never by
/// crashing": `ParamText`'s 33 bytes exceed any native atomic word, so a
/// concurrent `load`/`store` pair is serialized internally rather than
/// genuinely lock-free, but never blocks for longer than copying 33 bytes
/// and never panics or deadlocks.
pub struct ParamCell {
    inner: AtomicCell<ParamText>,
}

impl ParamCell {
    /// A cell pre-populated with `initial`.
    #[must_use]
    pub fn new(initial: ParamText) -> Self {
        Self { inner: AtomicCell::new(initial) }
    }

    /// Publish a new value.
    pub fn store(&self, value: ParamText) {
        self.inner.store(value);
    }

    /// Read the current value.
    #[must_use]
    pub fn load(&self) -> ParamText {
        self.inner.load()
    }
}

impl core::fmt::Debug for ParamCell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParamCell").field("value", &self.load().as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_load_round_trips() {
        let cell = ParamCell::new(ParamText::new("1"));
        assert_eq!(cell.load().as_str(), "1");
        cell.store(ParamText::new("2.75"));
        assert_eq!(cell.load().as_str(), "2.75");
    }

    #[test]
    fn new_seeds_the_initial_value() {
        let cell = ParamCell::new(ParamText::new("0.1"));
        assert_eq!(cell.load().as_str(), "0.1");
    }
}
