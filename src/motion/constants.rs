/// Motion tuning constants.
///
/// Spring values are (stiffness, damping) pairs for a unit mass. Ranges are
/// (input, output) pairs consumed by `map_range`.
// Spring integration
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.01; // |target - current| below which a spring may settle
pub const SPRING_REST_SPEED: f32 = 0.1; // |velocity| below which a spring may settle
pub const FRAME_DT_MAX_SEC: f32 = 0.1; // clamp for long frames (tab switch, debugger)

// Cursor
pub const CURSOR_HIDDEN_POS: f32 = -100.0; // raw target before the first pointer sample
pub const CURSOR_DOT_STIFFNESS: f32 = 250.0;
pub const CURSOR_DOT_DAMPING: f32 = 25.0;
pub const CURSOR_RING_STIFFNESS: f32 = 200.0;
pub const CURSOR_RING_DAMPING: f32 = 30.0;
pub const CURSOR_SCALE_STIFFNESS: f32 = 500.0;
pub const CURSOR_SCALE_DAMPING: f32 = 25.0;
pub const CURSOR_DOT_HOVER_SCALE: f32 = 2.5;
pub const CURSOR_RING_HOVER_SCALE: f32 = 1.5;
pub const CURSOR_DOT_OPACITY: f32 = 1.0;
pub const CURSOR_RING_OPACITY: f32 = 0.5;

// Tilt surface
pub const TILT_STIFFNESS: f32 = 150.0;
pub const TILT_DAMPING: f32 = 20.0;
pub const TILT_INPUT_RANGE_PX: f32 = 200.0; // offsets beyond this saturate the rotation
pub const TILT_MAX_DEG: f32 = 5.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_CONTENT_DEPTH_PX: f32 = 20.0;
pub const SPOTLIGHT_RADIUS_PX: f32 = 600.0;
pub const SPOTLIGHT_ALPHA: f32 = 0.06;

// Reveal
pub const REVEAL_OFFSET_PX: f32 = 40.0;
pub const REVEAL_HIDDEN_SCALE: f32 = 0.95;
pub const REVEAL_DURATION_SEC: f32 = 0.8;
pub const REVEAL_EASING: [f32; 4] = [0.25, 0.4, 0.25, 1.0]; // cubic-bezier control points
pub const REVEAL_MARGIN_TOP_FRAC: f32 = 0.10; // inset from the viewport top
pub const REVEAL_MARGIN_BOTTOM_FRAC: f32 = 0.10; // inset from the viewport bottom

// Scroll chrome
pub const NAV_SCROLLED_THRESHOLD_PX: f32 = 50.0;
pub const HERO_Y_RANGE: ([f32; 2], [f32; 2]) = ([0.0, 1000.0], [0.0, 400.0]);
pub const HERO_OPACITY_RANGE: ([f32; 2], [f32; 2]) = ([0.0, 600.0], [1.0, 0.0]);
pub const HERO_SCALE_RANGE: ([f32; 2], [f32; 2]) = ([0.0, 600.0], [1.0, 0.9]);
pub const HERO_TEXT_Y_RANGE: ([f32; 2], [f32; 2]) = ([0.0, 1000.0], [0.0, 200.0]);
pub const LIGHT_Y_PCT_RANGE: ([f32; 2], [f32; 2]) = ([0.0, 1000.0], [-20.0, 20.0]);
