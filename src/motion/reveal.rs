use super::constants::{
    REVEAL_DURATION_SEC, REVEAL_EASING, REVEAL_HIDDEN_SCALE, REVEAL_MARGIN_BOTTOM_FRAC,
    REVEAL_MARGIN_TOP_FRAC, REVEAL_OFFSET_PX,
};
use super::error::MotionError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealDirection {
    #[default]
    Up,
    Left,
    Right,
    /// Fade and scale in place (`none` in markup).
    InPlace,
}

impl RevealDirection {
    pub const ALL: [RevealDirection; 4] = [
        RevealDirection::Up,
        RevealDirection::Left,
        RevealDirection::Right,
        RevealDirection::InPlace,
    ];

    pub fn variants(self) -> RevealVariants {
        PRESETS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RevealDirection::Up => "up",
            RevealDirection::Left => "left",
            RevealDirection::Right => "right",
            RevealDirection::InPlace => "none",
        }
    }
}

impl FromStr for RevealDirection {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "up" => Ok(RevealDirection::Up),
            "left" => Ok(RevealDirection::Left),
            "right" => Ok(RevealDirection::Right),
            "none" => Ok(RevealDirection::InPlace),
            other => Err(MotionError::UnknownDirection(other.to_string())),
        }
    }
}

/// Layout width of the wrapper. No effect on the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealWidth {
    #[default]
    FitContent,
    Full,
}

impl RevealWidth {
    pub fn css(self) -> &'static str {
        match self {
            RevealWidth::FitContent => "fit-content",
            RevealWidth::Full => "100%",
        }
    }
}

impl FromStr for RevealWidth {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fit-content" => Ok(RevealWidth::FitContent),
            "100%" => Ok(RevealWidth::Full),
            other => Err(MotionError::UnknownWidth(other.to_string())),
        }
    }
}

/// A single animated style: opacity plus translate and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Keyframe {
    pub const VISIBLE: Keyframe = Keyframe {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    const fn hidden(x: f32, y: f32, scale: f32) -> Keyframe {
        Keyframe {
            opacity: 0.0,
            x,
            y,
            scale,
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.x, self.y, self.scale
        )
    }

    pub fn css_opacity(&self) -> String {
        format!("{}", self.opacity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealVariants {
    pub hidden: Keyframe,
    pub visible: Keyframe,
}

// Indexed by `RevealDirection as usize`.
const PRESETS: [RevealVariants; 4] = [
    RevealVariants {
        hidden: Keyframe::hidden(0.0, REVEAL_OFFSET_PX, 1.0),
        visible: Keyframe::VISIBLE,
    },
    RevealVariants {
        hidden: Keyframe::hidden(-REVEAL_OFFSET_PX, 0.0, 1.0),
        visible: Keyframe::VISIBLE,
    },
    RevealVariants {
        hidden: Keyframe::hidden(REVEAL_OFFSET_PX, 0.0, 1.0),
        visible: Keyframe::VISIBLE,
    },
    RevealVariants {
        hidden: Keyframe::hidden(0.0, 0.0, REVEAL_HIDDEN_SCALE),
        visible: Keyframe::VISIBLE,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub direction: RevealDirection,
    pub delay_sec: f32,
    pub width: RevealWidth,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            direction: RevealDirection::Up,
            delay_sec: 0.0,
            width: RevealWidth::FitContent,
        }
    }
}

impl RevealOptions {
    /// Build options from optional attribute values; missing values take defaults.
    pub fn from_attrs(
        direction: Option<&str>,
        delay: Option<&str>,
        width: Option<&str>,
    ) -> Result<Self, MotionError> {
        let mut opts = RevealOptions::default();
        if let Some(d) = direction {
            opts.direction = d.parse()?;
        }
        if let Some(d) = delay {
            opts.delay_sec = parse_delay(d)?;
        }
        if let Some(w) = width {
            opts.width = w.parse()?;
        }
        Ok(opts)
    }

    /// CSS `transition` value for the entrance.
    pub fn css_transition(&self) -> String {
        let [a, b, c, d] = REVEAL_EASING;
        let timing = format!(
            "{}s cubic-bezier({}, {}, {}, {}) {}s",
            REVEAL_DURATION_SEC, a, b, c, d, self.delay_sec
        );
        format!("opacity {timing}, transform {timing}")
    }
}

fn parse_delay(raw: &str) -> Result<f32, MotionError> {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(MotionError::InvalidDelay(raw.to_string())),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Pending,
    Revealed,
}

/// One-shot scroll entrance: starts `Pending`, flips to `Revealed` the first
/// time its element is seen inside the inset viewport, and never goes back.
#[derive(Clone, Debug)]
pub struct Reveal {
    options: RevealOptions,
    phase: RevealPhase,
}

impl Reveal {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            phase: RevealPhase::Pending,
        }
    }

    #[inline]
    pub fn options(&self) -> RevealOptions {
        self.options
    }

    #[inline]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Feed an intersection sample. Returns true only on the single
    /// `Pending -> Revealed` transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && self.phase == RevealPhase::Pending {
            self.phase = RevealPhase::Revealed;
            return true;
        }
        false
    }

    /// Style to leave behind when the binding is torn down. A pending element
    /// is restored to its visible style so unmounting never hides content.
    pub fn teardown_style(&self) -> Option<Keyframe> {
        match self.phase {
            RevealPhase::Pending => Some(self.options.direction.variants().visible),
            RevealPhase::Revealed => None,
        }
    }

    /// Style the element should currently be animating towards.
    pub fn style(&self) -> Keyframe {
        let variants = self.options.direction.variants();
        match self.phase {
            RevealPhase::Pending => variants.hidden,
            RevealPhase::Revealed => variants.visible,
        }
    }
}

/// Viewport shrunk by a fractional inset at the top and bottom, matching a
/// `rootMargin` of `-top% 0px -bottom% 0px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMargin {
    pub top_frac: f32,
    pub bottom_frac: f32,
}

impl Default for ViewportMargin {
    fn default() -> Self {
        Self {
            top_frac: REVEAL_MARGIN_TOP_FRAC,
            bottom_frac: REVEAL_MARGIN_BOTTOM_FRAC,
        }
    }
}

impl ViewportMargin {
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            self.top_frac * 100.0,
            self.bottom_frac * 100.0
        )
    }

    /// Whether an element spanning `[top, bottom)` (viewport px) overlaps the
    /// inset band of a viewport `viewport_height` tall.
    pub fn intersects(&self, top: f32, bottom: f32, viewport_height: f32) -> bool {
        let band_top = viewport_height * self.top_frac;
        let band_bottom = viewport_height * (1.0 - self.bottom_frac);
        bottom > band_top && top < band_bottom
    }
}
