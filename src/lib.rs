// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Touch-driven slide carousel engine.
//!
//! A sequence of same-sized panels stacked in a viewport, navigable by
//! drag gesture, timer-driven auto-advance, or programmatic index jump,
//! with animated transitions between panels. The crate is the
//! gesture-to-motion core; everything platform-specific (event wiring,
//! element measurement, timers) stays behind the [`Surface`] trait.
//!
//! # Key entry points
//!
//! - [`Carousel`] - the public controller
//! - [`Surface`] - the host integration trait
//! - [`CarouselOptions`] - construction settings (TOML-loadable)
//! - [`HostCapabilities`] - injected feature-detection result
//!
//! # Architecture
//!
//! Raw touch samples flow through the
//! [`GestureInterpreter`](input::GestureInterpreter), which emits typed
//! actions: a live 1:1 drag delta with boundary resistance, then a commit
//! or snap-back decision on release. The controller executes actions
//! through a [`TransitionDriver`](transition::TransitionDriver) selected
//! once at startup: declarative host transitions when the capability is
//! present, otherwise a manual interpolation loop pumped by the host's
//! tick. Panel offsets persist in a
//! [`PositionCache`](position::PositionCache), the single source of truth
//! every composed delta reads from.

pub mod capabilities;
pub mod carousel;
pub mod error;
pub mod input;
mod layout;
pub mod options;
pub mod position;
pub mod surface;
pub mod transition;

pub use capabilities::HostCapabilities;
pub use carousel::Carousel;
pub use options::CarouselOptions;
pub use surface::Surface;
