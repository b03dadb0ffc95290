//! Per-panel persisted horizontal offsets.

/// A read-only snapshot of one panel, handed to navigation callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    /// Position in the original sequence.
    pub index: usize,
    /// Current horizontal displacement from the panel's natural slot.
    pub offset: f32,
}

/// Mapping from panel index to persisted horizontal offset.
///
/// This is the sole source of truth the transition drivers read when
/// composing an additional delta: every settle (non-live) render keeps the
/// cache consistent with what is visually shown. Out-of-range indices,
/// including negative ones, are absent panels and every operation on them
/// is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionCache {
    offsets: Vec<f32>,
}

impl PositionCache {
    /// Create an empty cache. Seeded by the first layout run.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offsets: Vec::new(),
        }
    }

    /// Reallocate for `count` panels, zeroing every offset.
    pub(crate) fn reset(&mut self, count: usize) {
        self.offsets = vec![0.0; count];
    }

    /// Number of tracked panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the cache has been seeded at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Persisted offset of `panel`, or `None` for an absent panel.
    #[must_use]
    pub fn offset(&self, panel: isize) -> Option<f32> {
        usize::try_from(panel)
            .ok()
            .and_then(|i| self.offsets.get(i).copied())
    }

    /// Overwrite the offset of `panel`.
    pub(crate) fn set(&mut self, panel: isize, offset: f32) {
        if let Ok(i) = usize::try_from(panel) {
            if let Some(slot) = self.offsets.get_mut(i) {
                *slot = offset;
            }
        }
    }

    /// Add `delta` to the offset of `panel`.
    pub(crate) fn add(&mut self, panel: isize, delta: f32) {
        if let Ok(i) = usize::try_from(panel) {
            if let Some(slot) = self.offsets.get_mut(i) {
                *slot += delta;
            }
        }
    }

    /// Snapshot of `panel` for callbacks, or `None` when out of range.
    #[must_use]
    pub fn panel(&self, index: usize) -> Option<Panel> {
        self.offsets.get(index).map(|&offset| Panel { index, offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_reallocates_and_zeroes() {
        let mut cache = PositionCache::new();
        cache.reset(3);
        cache.set(1, 42.0);
        cache.reset(5);
        assert_eq!(cache.len(), 5);
        assert_eq!(cache.offset(1), Some(0.0));
    }

    #[test]
    fn out_of_range_is_absent() {
        let mut cache = PositionCache::new();
        cache.reset(2);
        assert_eq!(cache.offset(-1), None);
        assert_eq!(cache.offset(2), None);

        // Mutation of absent panels is a no-op
        cache.set(-1, 9.0);
        cache.add(5, 9.0);
        assert_eq!(cache.offset(0), Some(0.0));
        assert_eq!(cache.offset(1), Some(0.0));
    }

    #[test]
    fn set_and_add_compose() {
        let mut cache = PositionCache::new();
        cache.reset(2);
        cache.set(0, -320.0);
        cache.add(0, 320.0);
        assert_eq!(cache.offset(0), Some(0.0));
    }

    #[test]
    fn panel_snapshot() {
        let mut cache = PositionCache::new();
        cache.reset(2);
        cache.set(1, 320.0);
        assert_eq!(
            cache.panel(1),
            Some(Panel {
                index: 1,
                offset: 320.0
            })
        );
        assert_eq!(cache.panel(2), None);
    }
}
