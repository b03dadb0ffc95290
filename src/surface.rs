//! The host boundary.
//!
//! Everything platform-specific sits behind [`Surface`]: element
//! measurement, panel placement, and the auto-advance timer primitive. The
//! core decides *when* to move panels and arm timers; the host owns *how*.

use web_time::Duration;

/// Host-side rendering and scheduling operations.
///
/// Implementations wrap whatever the embedding environment provides (DOM
/// elements, a canvas scene graph, a test recorder). Panels are addressed
/// by their index in the original sequence.
pub trait Surface {
    /// Number of panels currently in the container.
    fn panel_count(&self) -> usize;

    /// Viewport width in pixels. Zero means measurement failed.
    fn viewport_width(&self) -> f32;

    /// Height imposed by the surrounding layout, if any. When `None`, the
    /// container height is derived from the tallest panel.
    fn explicit_height(&self) -> Option<f32>;

    /// Measured height of one panel.
    fn panel_height(&self, panel: usize) -> f32;

    /// Size a panel to the viewport width.
    fn set_panel_width(&mut self, panel: usize, width: f32);

    /// Apply a derived container height. Panels are stacked with absolute
    /// positioning, so the container cannot self-report one.
    fn set_container_height(&mut self, height: f32);

    /// Move `panel` to horizontal position `x` with a native transition
    /// lasting `duration`.
    ///
    /// A zero-duration transform must take effect before any subsequent
    /// call on this surface; the two-phase settle (stack instantly, then
    /// animate) depends on it. DOM hosts typically need to flush style
    /// between the two applications.
    fn transform_panel(&mut self, panel: usize, x: f32, duration: Duration);

    /// Place `panel` at horizontal position `x` immediately. Used by the
    /// manual interpolation driver.
    fn place_panel(&mut self, panel: usize, x: f32);

    /// Schedule a single-shot auto-advance after `delay`, replacing any
    /// pending one. The host reports expiry through
    /// [`Carousel::auto_advance_elapsed`](crate::Carousel::auto_advance_elapsed).
    fn arm_auto_advance(&mut self, delay: Duration);

    /// Cancel any pending auto-advance.
    fn cancel_auto_advance(&mut self);
}
