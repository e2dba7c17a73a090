use super::constants::{
    HERO_OPACITY_RANGE, HERO_SCALE_RANGE, HERO_TEXT_Y_RANGE, HERO_Y_RANGE, LIGHT_Y_PCT_RANGE,
    NAV_SCROLLED_THRESHOLD_PX,
};
use super::error::MotionError;
use super::spring::map_range;
use std::str::FromStr;

/// Navbar "scrolled" flag with change detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavScrollState {
    threshold_px: f32,
    scrolled: bool,
}

impl Default for NavScrollState {
    fn default() -> Self {
        Self::new(NAV_SCROLLED_THRESHOLD_PX)
    }
}

impl NavScrollState {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            scrolled: false,
        }
    }

    #[inline]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns the new flag when it changed, `None` otherwise.
    pub fn update(&mut self, scroll_y: f32) -> Option<bool> {
        let scrolled = scroll_y > self.threshold_px;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParallaxLayer {
    /// Hero block: drifts down, fades out and shrinks slightly.
    Hero,
    HeroText,
    /// Background light field, moved in percent of its own height.
    Light,
}

impl FromStr for ParallaxLayer {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hero" => Ok(ParallaxLayer::Hero),
            "hero-text" => Ok(ParallaxLayer::HeroText),
            "light" => Ok(ParallaxLayer::Light),
            other => Err(MotionError::UnknownParallaxLayer(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParallaxOffset {
    Px(f32),
    Percent(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub offset_y: ParallaxOffset,
    pub opacity: f32,
    pub scale: f32,
}

impl ParallaxFrame {
    pub fn css_transform(&self) -> String {
        let y = match self.offset_y {
            ParallaxOffset::Px(v) => format!("{v:.2}px"),
            ParallaxOffset::Percent(v) => format!("{v:.2}%"),
        };
        format!("translate3d(0, {y}, 0) scale({:.4})", self.scale)
    }
}

impl ParallaxLayer {
    pub fn frame_at(self, scroll_y: f32) -> ParallaxFrame {
        let at = |(input, output): ([f32; 2], [f32; 2])| map_range(scroll_y, input, output);
        match self {
            ParallaxLayer::Hero => ParallaxFrame {
                offset_y: ParallaxOffset::Px(at(HERO_Y_RANGE)),
                opacity: at(HERO_OPACITY_RANGE),
                scale: at(HERO_SCALE_RANGE),
            },
            ParallaxLayer::HeroText => ParallaxFrame {
                offset_y: ParallaxOffset::Px(at(HERO_TEXT_Y_RANGE)),
                opacity: 1.0,
                scale: 1.0,
            },
            ParallaxLayer::Light => ParallaxFrame {
                offset_y: ParallaxOffset::Percent(at(LIGHT_Y_PCT_RANGE)),
                opacity: 1.0,
                scale: 1.0,
            },
        }
    }
}
