//! Platform-agnostic touch samples.
//!
//! Hosts normalize their native events (DOM `TouchEvent`, winit touches,
//! a test harness) into [`TouchSample`]s before feeding them to the
//! carousel. Timestamps are captured by the host at event time; the core
//! never reads a clock of its own.

use glam::Vec2;
use web_time::Instant;

/// One normalized touch event.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchSample {
    /// All active touch points, in screen pixels.
    pub touches: Vec<Vec2>,
    /// Pinch scale factor when the platform reports one. A value other
    /// than `1.0` marks a pinch in progress.
    pub scale: Option<f32>,
    /// When the host observed the event.
    pub timestamp: Instant,
}

impl TouchSample {
    /// A single-finger sample, the common case.
    #[must_use]
    pub fn single(position: Vec2, timestamp: Instant) -> Self {
        Self {
            touches: vec![position],
            scale: None,
            timestamp,
        }
    }

    /// The first touch point, if any finger is down.
    #[must_use]
    pub fn primary(&self) -> Option<Vec2> {
        self.touches.first().copied()
    }

    /// Whether a pinch is in progress.
    #[must_use]
    pub fn is_pinch(&self) -> bool {
        self.scale.is_some_and(|s| s != 1.0)
    }
}
