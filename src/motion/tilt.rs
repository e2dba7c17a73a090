use super::constants::{
    SPOTLIGHT_ALPHA, SPOTLIGHT_RADIUS_PX, TILT_CONTENT_DEPTH_PX, TILT_DAMPING, TILT_INPUT_RANGE_PX,
    TILT_MAX_DEG, TILT_PERSPECTIVE_PX, TILT_STIFFNESS,
};
use super::spring::{map_range, Spring, SpringConfig};
use glam::Vec2;

pub const TILT_SPRING: SpringConfig = SpringConfig::new(TILT_STIFFNESS, TILT_DAMPING);

/// Bounding rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Pointer offset from the surface's own center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltSurfaceState {
    pub offset_x: f32,
    pub offset_y: f32,
}

/// What a surface should look like on this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    /// Smoothed offset from the center, where the spotlight is drawn.
    pub spotlight: Vec2,
    pub spotlight_visible: bool,
    pub content_depth_px: f32,
}

impl TiltPose {
    pub const NEUTRAL: TiltPose = TiltPose {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        spotlight: Vec2::ZERO,
        spotlight_visible: false,
        content_depth_px: 0.0,
    };

    pub fn is_neutral(&self) -> bool {
        self.rotate_x_deg == 0.0 && self.rotate_y_deg == 0.0
    }

    pub fn css_transform(&self) -> String {
        if self.content_depth_px == 0.0 && self.is_neutral() {
            return "none".to_string();
        }
        format!(
            "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg)",
            TILT_PERSPECTIVE_PX, self.rotate_x_deg, self.rotate_y_deg
        )
    }

    pub fn css_content_transform(&self) -> String {
        if self.content_depth_px == 0.0 {
            "none".to_string()
        } else {
            format!("translateZ({:.0}px)", self.content_depth_px)
        }
    }

    pub fn css_spotlight(&self) -> String {
        format!(
            "radial-gradient({:.0}px circle at calc(50% + {:.1}px) calc(50% + {:.1}px), rgba(255,255,255,{}), transparent 80%)",
            SPOTLIGHT_RADIUS_PX, self.spotlight.x, self.spotlight.y, SPOTLIGHT_ALPHA
        )
    }
}

/// Pointer-driven 3D tilt and spotlight for one panel.
///
/// Each surface owns its springs and only ever sees pointer positions
/// relative to its own rectangle. A surface built with `enabled = false`
/// (touch-primary input) stays flat whatever events it receives.
#[derive(Clone, Debug)]
pub struct TiltSurface {
    enabled: bool,
    hovered: bool,
    state: TiltSurfaceState,
    x: Spring,
    y: Spring,
}

impl TiltSurface {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            hovered: false,
            state: TiltSurfaceState::default(),
            x: Spring::new(TILT_SPRING, 0.0),
            y: Spring::new(TILT_SPRING, 0.0),
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn state(&self) -> TiltSurfaceState {
        self.state
    }

    pub fn on_pointer_move(&mut self, client: Vec2, rect: Rect) {
        if !self.enabled {
            return;
        }
        let offset = client - rect.center();
        self.state = TiltSurfaceState {
            offset_x: offset.x,
            offset_y: offset.y,
        };
        self.hovered = true;
        self.x.set_target(offset.x);
        self.y.set_target(offset.y);
    }

    pub fn on_pointer_leave(&mut self) {
        self.state = TiltSurfaceState::default();
        self.hovered = false;
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Advance the springs. Returns true while the pose is still changing.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        if !self.enabled {
            return false;
        }
        let moving_x = self.x.step(dt_sec);
        let moving_y = self.y.step(dt_sec);
        moving_x || moving_y
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn pose(&self) -> TiltPose {
        if !self.enabled {
            return TiltPose::NEUTRAL;
        }
        let (sx, sy) = (self.x.value(), self.y.value());
        TiltPose {
            rotate_x_deg: rotate_x_for(sy),
            rotate_y_deg: rotate_y_for(sx),
            spotlight: Vec2::new(sx, sy),
            spotlight_visible: self.hovered,
            content_depth_px: TILT_CONTENT_DEPTH_PX,
        }
    }
}

const TILT_INPUT: [f32; 2] = [-TILT_INPUT_RANGE_PX, TILT_INPUT_RANGE_PX];

/// Pointer below center tips the top edge away (negative rotateX).
#[inline]
pub fn rotate_x_for(offset_y: f32) -> f32 {
    map_range(offset_y, TILT_INPUT, [TILT_MAX_DEG, -TILT_MAX_DEG])
}

#[inline]
pub fn rotate_y_for(offset_x: f32) -> f32 {
    map_range(offset_x, TILT_INPUT, [-TILT_MAX_DEG, TILT_MAX_DEG])
}
