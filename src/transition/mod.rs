//! Dual-implementation transition engine.
//!
//! Both drivers expose one operation: move a set of panels to an offset
//! over a duration, with cache semantics chosen by [`RenderMode`]. The
//! [`DeclarativeDriver`] hands the motion to the host's native transition
//! machinery; the [`SteppedDriver`] interpolates positions itself from a
//! recurring host tick. The variant is selected once at startup from the
//! injected [`HostCapabilities`], not branched per call site.

mod declarative;
mod stepped;

pub use declarative::DeclarativeDriver;
pub use stepped::{SteppedDriver, TICK_INTERVAL};

use web_time::{Duration, Instant};

use crate::capabilities::HostCapabilities;
use crate::position::PositionCache;
use crate::surface::Surface;

/// How a render composes with and settles into the position cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// New cache offset := delta. Used by layout stacking.
    Absolute,
    /// New cache offset := old offset + delta. Used for settle moves.
    Accumulate,
    /// Rendered position := delta + old offset; the cache is untouched.
    /// Used for reversible 1:1 drag following.
    Live,
}

/// Moves panels and keeps the position cache consistent.
pub trait TransitionDriver {
    /// Move every panel in `panels` by `delta` over `duration`.
    ///
    /// Out-of-range indices are absent panels and are skipped. Cache
    /// semantics follow `mode`; rendering goes through `surface`.
    fn render_delta(
        &mut self,
        panels: &[isize],
        delta: f32,
        duration: Duration,
        mode: RenderMode,
        cache: &mut PositionCache,
        surface: &mut dyn Surface,
    );

    /// Advance manual interpolation, returning the panels whose runs
    /// finished this tick. Declarative transitions complete through the
    /// host's notification instead and return nothing here.
    fn tick(&mut self, now: Instant, surface: &mut dyn Surface) -> Vec<usize>;
}

/// Select the driver variant for the host's capabilities.
#[must_use]
pub fn driver_for(
    capabilities: HostCapabilities,
) -> Box<dyn TransitionDriver> {
    if capabilities.transitions {
        Box::new(DeclarativeDriver::new())
    } else {
        Box::new(SteppedDriver::new())
    }
}

/// Rendered target position for one panel under `mode`.
pub(crate) fn compose_target(mode: RenderMode, offset: f32, delta: f32) -> f32 {
    match mode {
        RenderMode::Absolute => delta,
        RenderMode::Accumulate | RenderMode::Live => offset + delta,
    }
}

/// Cache update applied once the render is dispatched.
pub(crate) fn settle_cache(
    mode: RenderMode,
    cache: &mut PositionCache,
    panel: isize,
    delta: f32,
) {
    match mode {
        RenderMode::Absolute => cache.set(panel, delta),
        RenderMode::Accumulate => cache.add(panel, delta),
        RenderMode::Live => {}
    }
}
