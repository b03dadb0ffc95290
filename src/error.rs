//! Crate-level error types.

use std::fmt;

/// Errors produced while measuring and stacking the panel set.
///
/// Layout failures are absorbed by the controller: the carousel logs the
/// failure and stays inert until a later
/// [`relayout`](crate::Carousel::relayout) succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Fewer than two panels in the container.
    NotEnoughPanels {
        /// The panel count the surface reported.
        count: usize,
    },
    /// The viewport width measured as zero.
    ZeroWidth,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughPanels { count } => {
                write!(f, "need at least 2 panels, found {count}")
            }
            Self::ZeroWidth => write!(f, "viewport width measured as zero"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Errors produced by the carousel crate.
#[derive(Debug)]
pub enum CarouselError {
    /// Panel measurement or stacking failure.
    Layout(LayoutError),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "layout error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CarouselError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<LayoutError> for CarouselError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}
