//! Gesture state machine - the interaction session of the zoom/pan tool.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> SinglePoint     (press or one-finger touch start)
//! Idle -> TwoPoint        (two-finger touch start)
//!
//! SinglePoint -> SinglePoint  (move: pan by the delta since the last sample)
//! TwoPoint -> TwoPoint        (two-finger move: pinch zoom or parallel scroll)
//!
//! Any -> Idle             (release, leave, touch end/cancel)
//! ```
//!
//! The machine only turns samples into display-space [`Gesture`]s. Mapping
//! them into plane and volumetric space is done by the dispatcher against the
//! live view.

use crate::geometry::{Line, Point2D};
use crate::settings::ZoomPanSettings;
use tracing::{debug, trace};

/// Direction of a one-step slice scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A decided gesture, still in display space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Incremental drag since the previous sample
    Pan { dx: f64, dy: f64 },
    /// Pinch zoom step anchored at the midpoint of the contacts
    Pinch { amount: f64, center: Point2D },
    /// Wheel zoom step anchored at the pointer
    Wheel { step: f64, position: Point2D },
    /// One step along the scroll axis
    Scroll { direction: ScrollDirection },
}

/// Interaction session of the zoom/pan tool.
///
/// Session fields only exist while a press is in progress, so a move without
/// a preceding press finds `Idle` and does nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// No press in progress
    #[default]
    Idle,

    /// One contact down
    SinglePoint {
        /// Last sampled position, reset after each pan
        origin: Point2D,
    },

    /// Two contacts down
    TwoPoint {
        /// First contact at press time
        origin: Point2D,
        /// Segment between the two contacts at press time
        reference_line: Line,
        /// Length of `reference_line`
        reference_length: f64,
        /// Midpoint of `reference_line`
        midpoint: Point2D,
    },
}

impl GestureState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a press is in progress
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_two_point(&self) -> bool {
        matches!(self, Self::TwoPoint { .. })
    }

    /// Session origin, if active
    pub fn origin(&self) -> Option<Point2D> {
        match self {
            Self::Idle => None,
            Self::SinglePoint { origin } | Self::TwoPoint { origin, .. } => Some(*origin),
        }
    }

    pub fn reference_line(&self) -> Option<Line> {
        match self {
            Self::TwoPoint { reference_line, .. } => Some(*reference_line),
            _ => None,
        }
    }

    pub fn reference_length(&self) -> Option<f64> {
        match self {
            Self::TwoPoint {
                reference_length, ..
            } => Some(*reference_length),
            _ => None,
        }
    }

    pub fn midpoint(&self) -> Option<Point2D> {
        match self {
            Self::TwoPoint { midpoint, .. } => Some(*midpoint),
            _ => None,
        }
    }

    /// Start a one-contact session
    pub fn begin_single(&mut self, position: Point2D) {
        debug!("gesture: single-point session at ({}, {})", position.x, position.y);
        *self = Self::SinglePoint { origin: position };
    }

    /// Start a two-contact session
    pub fn begin_two(&mut self, first: Point2D, second: Point2D) {
        let reference_line = Line::new(first, second);
        let reference_length = reference_line.length();
        debug!("gesture: two-point session, reference length {reference_length}");
        *self = Self::TwoPoint {
            origin: first,
            reference_line,
            reference_length,
            midpoint: reference_line.midpoint(),
        };
    }

    /// Reset to Idle. Safe to call when already idle.
    pub fn reset(&mut self) {
        if self.is_active() {
            debug!("gesture: session ended");
        }
        *self = Self::Idle;
    }

    /// One-contact move: the delta since the previous sample.
    ///
    /// Works in either active state since only the event's own contact count
    /// is considered.
    pub fn single_move(&mut self, position: Point2D) -> Option<Gesture> {
        let origin = match self {
            Self::Idle => {
                trace!("gesture: move while idle ignored");
                return None;
            }
            Self::SinglePoint { origin } | Self::TwoPoint { origin, .. } => origin,
        };
        let (dx, dy) = position - *origin;
        *origin = position;
        Some(Gesture::Pan { dx, dy })
    }

    /// Two-contact move: a parallel shift scrolls, anything else pinches.
    pub fn two_move(
        &self,
        first: Point2D,
        second: Point2D,
        settings: &ZoomPanSettings,
    ) -> Option<Gesture> {
        let Self::TwoPoint {
            origin,
            reference_length,
            ..
        } = self
        else {
            trace!("gesture: two-point move without two-point session ignored");
            return None;
        };

        let line = Line::new(first, second);
        let ratio = line.length() / reference_length;
        if !ratio.is_finite() {
            trace!("gesture: degenerate reference line, sample dropped");
            return None;
        }

        if (ratio - 1.0).abs() <= settings.parallel_epsilon {
            let diff_y = first.y - origin.y;
            if diff_y.abs() < settings.scroll_deadband {
                trace!("gesture: scroll {diff_y} inside deadband");
                return None;
            }
            let direction = if diff_y > 0.0 {
                ScrollDirection::Forward
            } else {
                ScrollDirection::Backward
            };
            return Some(Gesture::Scroll { direction });
        }

        let amount = (ratio - 1.0) / settings.pinch_damping;
        if amount.abs() % settings.zoom_quantum > settings.zoom_quantum_tolerance {
            trace!("gesture: pinch {amount} outside quantization band");
            return None;
        }
        Some(Gesture::Pinch {
            amount,
            center: line.midpoint(),
        })
    }
}
