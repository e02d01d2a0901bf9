//! Responsive sizing units derived from the host container's box size
//!
//! The text layer sizes itself proportionally to the host element, so the
//! tracker converts every observed content-box size into two scalar units:
//! 1% of the content height (`ch`) and 1% of the content width (`cw`).
//! Notifications are processed independently and in arrival order - a
//! recompute per notification, never coalesced or dropped here. The render
//! scheduling layer may coalesce the resulting re-render requests.

use serde::{Deserialize, Serialize};

/// Observed content-box dimensions of the host element, in pixels.
///
/// Pre-layout hosts report a 0x0 default; the tracker still seeds from it
/// (best effort) and corrects on the first real notification.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxSize {
    pub content_width: f64,
    pub content_height: f64,
}

impl BoxSize {
    pub fn new(content_width: f64, content_height: f64) -> Self {
        Self { content_width, content_height }
    }
}

/// Proportional sizing units: 1% of the host's content height and width.
/// Only the latest value is ever held; each observation supersedes the last.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeUnits {
    pub ch: f64,
    pub cw: f64,
}

impl SizeUnits {
    /// Derive units from a box size: 1% of each content dimension.
    pub fn from_box(size: BoxSize) -> Self {
        Self { ch: size.content_height * 0.01, cw: size.content_width * 0.01 }
    }
}

/// Tracks the host element's box size and the units derived from it.
#[derive(Debug, Clone, Default)]
pub struct SizeTracker {
    units: SizeUnits,
}

impl SizeTracker {
    /// Seed the tracker from the construction-time box size.
    pub fn new(initial: BoxSize) -> Self {
        Self { units: SizeUnits::from_box(initial) }
    }

    /// Process one resize notification, returning the recomputed units.
    pub fn observe(&mut self, size: BoxSize) -> SizeUnits {
        self.units = SizeUnits::from_box(size);
        self.units
    }

    /// The units from the most recent observation.
    pub fn units(&self) -> SizeUnits {
        self.units
    }
}
