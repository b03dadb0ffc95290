//! Gesture interpretation: turns raw touch samples into carousel motion.
//!
//! [`GestureInterpreter`] is a finite-state machine over one drag at a
//! time: idle until touch-start, dragging while samples arrive, and back
//! to idle at touch-end (or implicitly at the next touch-start). It owns
//! the scroll-vs-swipe decision, the boundary resistance arithmetic, and
//! the commit decision; the controller executes the resulting
//! [`GestureAction`]s through the transition driver.
//!
//! # State machine
//!
//! - **touch-start** resets the session and yields
//!   [`GestureAction::Started`] so the controller can disarm auto-advance.
//! - **touch-move** computes the live horizontal delta. The very first
//!   move sample decides whether the user is scrolling vertically; that
//!   decision is frozen for the rest of the session. Non-scroll moves
//!   yield [`GestureAction::Drag`] with edge resistance applied.
//! - **touch-end** consumes the session and yields either
//!   [`GestureAction::Commit`] or [`GestureAction::SnapBack`].
//!
//! Multi-touch and pinch samples are dropped without corrupting the
//! session; the next valid sample resumes normally.

use glam::Vec2;
use web_time::{Duration, Instant};

use crate::input::event::TouchSample;

/// A swipe must finish inside this window to count as a flick.
const FLICK_WINDOW: Duration = Duration::from_millis(250);

/// Minimum travel for a flick, in pixels.
const FLICK_DISTANCE: f32 = 20.0;

/// Geometry snapshot the interpreter needs to damp and judge a drag.
#[derive(Debug, Clone, Copy)]
pub struct DragContext {
    /// Current panel index.
    pub index: usize,
    /// Total panel count.
    pub len: usize,
    /// Viewport width in pixels.
    pub width: f32,
}

/// What the controller should do with a processed sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// A touch landed; pending auto-advance must be disarmed.
    Started,
    /// Live 1:1 delta for the neighbor window; native scrolling must be
    /// suppressed for this sample.
    Drag {
        /// Horizontal displacement, already damped near the boundaries.
        delta: f32,
    },
    /// The finished drag crossed the commit thresholds.
    Commit {
        /// `true` advances toward a higher index, `false` retreats.
        advance: bool,
    },
    /// The finished drag returns the neighbor window to rest.
    SnapBack,
    /// Sample dropped: pinch, extra touches, vertical scrolling, or no
    /// active session.
    Ignored,
}

/// Live drag state between touch-start and touch-end.
#[derive(Debug, Clone, Copy)]
struct Session {
    start: Vec2,
    start_time: Instant,
    delta_x: f32,
    /// Decided on the first move sample, then frozen.
    scrolling: Option<bool>,
}

/// Finite-state interpreter over one drag at a time.
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    session: Option<Session>,
}

impl GestureInterpreter {
    /// Create an idle interpreter.
    #[must_use]
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Begin a session from the first touch point.
    ///
    /// Any prior session is discarded, which is also how an aborted drag
    /// recovers: the next touch-start starts clean.
    pub fn touch_start(&mut self, sample: &TouchSample) -> GestureAction {
        let Some(point) = sample.primary() else {
            return GestureAction::Ignored;
        };
        self.session = Some(Session {
            start: point,
            start_time: sample.timestamp,
            delta_x: 0.0,
            scrolling: None,
        });
        GestureAction::Started
    }

    /// Process a move sample against the current geometry.
    pub fn touch_move(
        &mut self,
        sample: &TouchSample,
        ctx: DragContext,
    ) -> GestureAction {
        let Some(session) = self.session.as_mut() else {
            return GestureAction::Ignored;
        };
        // One finger only; a pinch is not a swipe
        if sample.touches.len() > 1 || sample.is_pinch() {
            return GestureAction::Ignored;
        }
        let Some(point) = sample.primary() else {
            return GestureAction::Ignored;
        };

        session.delta_x = point.x - session.start.x;
        let delta_y = point.y - session.start.y;

        if session.scrolling.is_none() {
            session.scrolling =
                Some(session.delta_x.abs() < delta_y.abs());
        }
        if session.scrolling == Some(true) {
            return GestureAction::Ignored;
        }

        session.delta_x = resist(session.delta_x, ctx);
        GestureAction::Drag {
            delta: session.delta_x,
        }
    }

    /// Consume the session and decide the drag's outcome.
    pub fn touch_end(
        &mut self,
        sample: &TouchSample,
        ctx: DragContext,
    ) -> GestureAction {
        let Some(session) = self.session.take() else {
            return GestureAction::Ignored;
        };
        if session.scrolling == Some(true) {
            return GestureAction::Ignored;
        }

        let elapsed = sample.timestamp.duration_since(session.start_time);
        let delta = session.delta_x;

        let valid_slide = (elapsed < FLICK_WINDOW
            && delta.abs() > FLICK_DISTANCE)
            || delta.abs() > ctx.width / 2.0;
        let past_bounds = (ctx.index == 0 && delta > 0.0)
            || (ctx.index + 1 == ctx.len && delta < 0.0);

        if valid_slide && !past_bounds {
            let advance = delta < 0.0;
            log::debug!(
                "commit: delta {delta:.1}px in {}ms, advance {advance}",
                elapsed.as_millis()
            );
            GestureAction::Commit { advance }
        } else {
            GestureAction::SnapBack
        }
    }
}

/// Hyperbolic damping past either end of the sequence.
///
/// The rendered travel approaches but never reaches a full panel width,
/// producing the rubber-band feel. Off the boundaries the delta passes
/// through unchanged.
fn resist(delta: f32, ctx: DragContext) -> f32 {
    let past_first = ctx.index == 0 && delta > 0.0;
    let past_last = ctx.index + 1 == ctx.len && delta < 0.0;
    if past_first || past_last {
        delta / (delta.abs() / ctx.width + 1.0)
    } else {
        delta
    }
}
