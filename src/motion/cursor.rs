use super::constants::{
    CURSOR_DOT_DAMPING, CURSOR_DOT_HOVER_SCALE, CURSOR_DOT_OPACITY, CURSOR_DOT_STIFFNESS,
    CURSOR_HIDDEN_POS, CURSOR_RING_DAMPING, CURSOR_RING_HOVER_SCALE, CURSOR_RING_OPACITY,
    CURSOR_RING_STIFFNESS, CURSOR_SCALE_DAMPING, CURSOR_SCALE_STIFFNESS,
};
use super::spring::{Spring, SpringConfig};
use glam::Vec2;

pub const DOT_SPRING: SpringConfig = SpringConfig::new(CURSOR_DOT_STIFFNESS, CURSOR_DOT_DAMPING);
pub const RING_SPRING: SpringConfig =
    SpringConfig::new(CURSOR_RING_STIFFNESS, CURSOR_RING_DAMPING);
pub const SCALE_SPRING: SpringConfig =
    SpringConfig::new(CURSOR_SCALE_STIFFNESS, CURSOR_SCALE_DAMPING);

/// Minimal description of one element on the path from an event target to the root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTarget {
    pub tag_name: String,
    pub role: Option<String>,
}

impl HoverTarget {
    pub fn new(tag_name: impl Into<String>, role: Option<&str>) -> Self {
        Self {
            tag_name: tag_name.into(),
            role: role.map(str::to_string),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("a")
            || self.tag_name.eq_ignore_ascii_case("button")
            || self
                .role
                .as_deref()
                .is_some_and(|r| r.trim().eq_ignore_ascii_case("button"))
    }
}

/// True when the target or any ancestor (nearest first) is a link or button.
pub fn is_interactive_chain<'a, I>(chain: I) -> bool
where
    I: IntoIterator<Item = &'a HoverTarget>,
{
    chain.into_iter().any(HoverTarget::is_interactive)
}

/// One rendered cursor layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorLayer {
    pub position: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl CursorLayer {
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%) scale({:.3})",
            self.position.x, self.position.y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: CursorLayer,
    pub ring: CursorLayer,
}

/// Spring-smoothed replacement cursor.
///
/// The dot follows the pointer through a stiff spring, the ring through a
/// softer, overdamped one, so the ring visibly trails the dot. A tracker
/// built with `enabled = false` produces no frames at all.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    enabled: bool,
    visible: bool,
    hovering: bool,
    raw: Vec2,
    dot: [Spring; 2],
    ring: [Spring; 2],
    dot_scale: Spring,
    ring_scale: Spring,
}

impl PointerTracker {
    pub fn new(enabled: bool) -> Self {
        let hidden = CURSOR_HIDDEN_POS;
        Self {
            enabled,
            visible: false,
            hovering: false,
            raw: Vec2::splat(hidden),
            dot: [Spring::new(DOT_SPRING, hidden), Spring::new(DOT_SPRING, hidden)],
            ring: [
                Spring::new(RING_SPRING, hidden),
                Spring::new(RING_SPRING, hidden),
            ],
            dot_scale: Spring::new(SCALE_SPRING, 1.0),
            ring_scale: Spring::new(SCALE_SPRING, 1.0),
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Latest unsmoothed pointer sample.
    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        self.raw = Vec2::new(x, y);
        self.visible = true;
        for (axis, v) in [x, y].into_iter().enumerate() {
            self.dot[axis].set_target(v);
            self.ring[axis].set_target(v);
        }
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        if !self.enabled || self.hovering == hovering {
            return;
        }
        self.hovering = hovering;
        let (dot, ring) = if hovering {
            (CURSOR_DOT_HOVER_SCALE, CURSOR_RING_HOVER_SCALE)
        } else {
            (1.0, 1.0)
        };
        self.dot_scale.set_target(dot);
        self.ring_scale.set_target(ring);
    }

    pub fn on_pointer_over<'a, I>(&mut self, chain: I)
    where
        I: IntoIterator<Item = &'a HoverTarget>,
    {
        self.set_hovering(is_interactive_chain(chain));
    }

    /// Advance all springs. Returns true while anything is still moving.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        if !self.enabled {
            return false;
        }
        let mut moving = false;
        for s in self
            .dot
            .iter_mut()
            .chain(self.ring.iter_mut())
            .chain([&mut self.dot_scale, &mut self.ring_scale])
        {
            moving |= s.step(dt_sec);
        }
        moving
    }

    pub fn frame(&self) -> Option<CursorFrame> {
        if !self.enabled {
            return None;
        }
        let (dot_opacity, ring_opacity) = if self.visible {
            (CURSOR_DOT_OPACITY, CURSOR_RING_OPACITY)
        } else {
            (0.0, 0.0)
        };
        Some(CursorFrame {
            dot: CursorLayer {
                position: Vec2::new(self.dot[0].value(), self.dot[1].value()),
                scale: self.dot_scale.value(),
                opacity: dot_opacity,
            },
            ring: CursorLayer {
                position: Vec2::new(self.ring[0].value(), self.ring[1].value()),
                scale: self.ring_scale.value(),
                opacity: ring_opacity,
            },
        })
    }
}
