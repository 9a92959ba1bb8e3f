//! Compile-time configuration for the velo dashboard.

/// Display width in pixels.
pub const DISPLAY_WIDTH_PX: u32 = 320;

/// Display height in pixels.
pub const DISPLAY_HEIGHT_PX: u32 = 240;

/// Number of navigable screens. The screen list is fixed at startup and
/// navigation wraps circularly.
pub const SCREEN_COUNT: usize = 3;

/// Minimum horizontal displacement for a swipe, exclusive: a gesture with
/// `|dx| == SWIPE_MIN_DISTANCE_PX` is rejected.
pub const SWIPE_MIN_DISTANCE_PX: i32 = 70;

/// Horizontal dominance ratio: a swipe requires `|dx| > SWIPE_AXIS_RATIO * |dy|`.
/// Rejects vertical scrolls and diagonal drags.
pub const SWIPE_AXIS_RATIO: i32 = 2;

/// Maximum press-to-release time for a swipe, exclusive: a gesture lasting
/// exactly this long is a drag, not a swipe.
pub const SWIPE_MAX_DURATION_MS: u64 = 500;

/// Duration of the slide animation between screens. While a transition is
/// in flight all new gestures are discarded.
pub const TRANSITION_DURATION_MS: u64 = 300;

/// Lower bound of the gauge range.
pub const GAUGE_MIN: i32 = -40;

/// Upper bound of the gauge range.
pub const GAUGE_MAX: i32 = 140;

/// Step applied by the gauge increment/decrement buttons.
pub const GAUGE_STEP: i32 = 10;

/// Angular extent of the gauge arc in degrees. Display-only parameter.
pub const GAUGE_SWEEP_DEGREES: f32 = 270.0;

/// UI frame delay between render loop iterations.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Interval between touch controller polls.
pub const TOUCH_POLL_INTERVAL_MS: u64 = 20;
