//! Native declarative transition driver.

use web_time::{Duration, Instant};

use super::{compose_target, settle_cache, RenderMode, TransitionDriver};
use crate::position::PositionCache;
use crate::surface::Surface;

/// Hands each move to the host's native transition machinery.
///
/// The driver itself is stateless: it composes the target position,
/// forwards it with the duration, and settles the cache. Completion is
/// signaled asynchronously by the host and routed through
/// [`Carousel::transition_ended`](crate::Carousel::transition_ended), which
/// filters to the active panel.
#[derive(Debug, Default)]
pub struct DeclarativeDriver;

impl DeclarativeDriver {
    /// Create the driver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TransitionDriver for DeclarativeDriver {
    fn render_delta(
        &mut self,
        panels: &[isize],
        delta: f32,
        duration: Duration,
        mode: RenderMode,
        cache: &mut PositionCache,
        surface: &mut dyn Surface,
    ) {
        for &panel in panels {
            let Some(offset) = cache.offset(panel) else {
                continue;
            };
            let target = compose_target(mode, offset, delta);
            // offset() returned Some, so the sign cast cannot wrap
            surface.transform_panel(panel as usize, target, duration);
            settle_cache(mode, cache, panel, delta);
        }
    }

    fn tick(
        &mut self,
        _now: Instant,
        _surface: &mut dyn Surface,
    ) -> Vec<usize> {
        Vec::new()
    }
}
