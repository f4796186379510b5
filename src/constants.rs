//! Gesture tuning constants.
//!
//! Centralizes the magic numbers of the zoom/pan controller. Every value here
//! is the default of a field in [`crate::settings::ZoomPanSettings`].

// ============================================================================
// Tool Identity
// ============================================================================

/// Name used to tag forwarded key events and to build help keys
pub const TOOL_NAME: &str = "ZoomAndPan";

// ============================================================================
// Two-Point Scroll
// ============================================================================

/// Minimum vertical travel (device units) before a parallel two-finger drag scrolls
pub const SCROLL_DEADBAND: f64 = 15.0;

/// Axis stepped by a two-finger parallel drag
pub const DEFAULT_SCROLL_AXIS: usize = 2;

/// Tolerance on `|length_ratio - 1|` for a move to count as parallel.
/// Zero means exact equality.
pub const PARALLEL_EPSILON: f64 = 0.0;

// ============================================================================
// Zoom
// ============================================================================

/// Wheel delta that maps to a zoom step of 1.0
pub const WHEEL_DIVISOR: f64 = 500.0;

/// Pinch zoom is `(length_ratio - 1) / PINCH_DAMPING`
pub const PINCH_DAMPING: f64 = 2.0;

/// Pinch zoom magnitudes are gated on `|zoom| % ZOOM_QUANTUM`
pub const ZOOM_QUANTUM: f64 = 0.1;

/// Upper bound of the accepted band of `|zoom| % ZOOM_QUANTUM`
pub const ZOOM_QUANTUM_TOLERANCE: f64 = 0.05;

// ============================================================================
// Profiling
// ============================================================================

/// Handler duration (ms) above which a scoped timer warns
pub const HANDLER_WARN_MS: f64 = 4.0;
