//! Host capability flags.
//!
//! Feature detection itself is the host's job (touch event availability,
//! native transition support). The result is computed once at startup and
//! injected into [`Carousel::new`](crate::Carousel::new); the core never
//! queries shared globals.

/// What the host environment can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Touch events are delivered by the host.
    pub touch: bool,
    /// The host can run declarative transitions natively; when false the
    /// carousel falls back to the manual interpolation driver.
    pub transitions: bool,
}

impl HostCapabilities {
    /// Touch and native transitions both available.
    pub const FULL: Self = Self {
        touch: true,
        transitions: true,
    };

    /// Touch without native transitions (manual interpolation fallback).
    pub const TOUCH_ONLY: Self = Self {
        touch: true,
        transitions: false,
    };
}
