//! Panel measurement and stacking.
//!
//! Stacking partitions panel indices into three disjoint groups relative
//! to the current index and places them one viewport width apart: *before*
//! at `-width`, *current* at `0`, *after* at `+width`. Placements are
//! absolute, so running the layout twice with the same inputs yields the
//! same cache contents.

use web_time::Duration;

use crate::error::LayoutError;
use crate::position::PositionCache;
use crate::surface::Surface;
use crate::transition::{RenderMode, TransitionDriver};

/// Measured geometry of a successful layout run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Layout {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) count: usize,
}

/// Measure the container and stack every panel around `index`.
///
/// Fails before touching any host-visible state: fewer than two panels or
/// a zero-width viewport leave the surface untouched and the carousel
/// inert.
pub(crate) fn stack(
    surface: &mut dyn Surface,
    driver: &mut dyn TransitionDriver,
    cache: &mut PositionCache,
    index: usize,
) -> Result<Layout, LayoutError> {
    let count = surface.panel_count();
    if count < 2 {
        return Err(LayoutError::NotEnoughPanels { count });
    }
    let width = surface.viewport_width();
    if width <= 0.0 {
        return Err(LayoutError::ZeroWidth);
    }

    cache.reset(count);

    let explicit = surface.explicit_height();
    let mut tallest = 0.0_f32;
    for panel in 0..count {
        surface.set_panel_width(panel, width);
        if explicit.is_none() {
            tallest = tallest.max(surface.panel_height(panel));
        }
    }
    let height = match explicit {
        Some(h) => h,
        None => {
            // Absolute stacking keeps the container from sizing itself
            surface.set_container_height(tallest);
            tallest
        }
    };

    let before: Vec<isize> = (0..index).map(|i| i as isize).collect();
    let after: Vec<isize> =
        (index + 1..count).map(|i| i as isize).collect();

    driver.render_delta(
        &before,
        -width,
        Duration::ZERO,
        RenderMode::Absolute,
        cache,
        surface,
    );
    driver.render_delta(
        &[index as isize],
        0.0,
        Duration::ZERO,
        RenderMode::Absolute,
        cache,
        surface,
    );
    driver.render_delta(
        &after,
        width,
        Duration::ZERO,
        RenderMode::Absolute,
        cache,
        surface,
    );

    log::debug!(
        "stacked {count} panels of width {width} around index {index}"
    );
    Ok(Layout {
        width,
        height,
        count,
    })
}
