//! Manual interpolation fallback driver.
//!
//! When the host has no native transitions, motion is driven here: the
//! host pumps [`SteppedDriver::tick`] at roughly [`TICK_INTERVAL`] and each
//! tick places every animating panel at its linearly interpolated position.
//! A run's clock starts at the first tick after dispatch, so dispatch
//! itself needs no ambient time source.
//!
//! # Invariants
//!
//! 1. At most one run per panel: dispatching a new move on a panel
//!    supersedes any run still in flight for it.
//! 2. A finished run places the panel at exactly its target and reports
//!    completion exactly once, after the last position-setting tick.
//! 3. Zero-duration moves place immediately and never report completion.

use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

use super::{compose_target, settle_cache, RenderMode, TransitionDriver};
use crate::position::PositionCache;
use crate::surface::Surface;

/// Tick cadence the driver expects from the host.
pub const TICK_INTERVAL: Duration = Duration::from_millis(4);

/// One in-flight panel animation.
#[derive(Debug, Clone, Copy)]
struct StepRun {
    from: f32,
    to: f32,
    duration: Duration,
    /// Set on the first tick that observes the run.
    started: Option<Instant>,
}

impl StepRun {
    /// Interpolated position at `elapsed`, linear in time.
    fn position_at(&self, elapsed: Duration) -> f32 {
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * t
    }
}

/// Drives panel motion from a recurring host tick.
#[derive(Debug, Default)]
pub struct SteppedDriver {
    runs: FxHashMap<usize, StepRun>,
}

impl SteppedDriver {
    /// Create the driver with no runs in flight.
    #[must_use]
    pub fn new() -> Self {
        Self {
            runs: FxHashMap::default(),
        }
    }

    /// Number of panels currently animating.
    #[must_use]
    pub fn active_runs(&self) -> usize {
        self.runs.len()
    }
}

impl TransitionDriver for SteppedDriver {
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
            let key = panel as usize;
            if duration.is_zero() {
                // Position-only: supersedes any run, fires no completion
                let _ = self.runs.remove(&key);
                surface.place_panel(key, target);
            } else {
                let _ = self.runs.insert(
                    key,
                    StepRun {
                        from: offset,
                        to: target,
                        duration,
                        started: None,
                    },
                );
            }
            settle_cache(mode, cache, panel, delta);
        }
    }

    fn tick(&mut self, now: Instant, surface: &mut dyn Surface) -> Vec<usize> {
        let mut completed = Vec::new();
        self.runs.retain(|&panel, run| {
            let started = *run.started.get_or_insert(now);
            let elapsed = now.duration_since(started);
            if elapsed >= run.duration {
                surface.place_panel(panel, run.to);
                completed.push(panel);
                return false;
            }
            surface.place_panel(panel, run.position_at(elapsed));
            true
        });
        completed
    }
}
