use crate::constants::{SPOTLIGHT_STYLE, TILT_CONTENT_SELECTOR};
use crate::dom::{self, Listener};
use crate::motion::{Rect, TiltPose, TiltSurface};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `[data-tilt]` panel bound to its own `TiltSurface`.
pub struct TiltCard {
    surface: Rc<RefCell<TiltSurface>>,
    element: web::HtmlElement,
    spotlight: Option<web::HtmlElement>,
    content: Vec<web::HtmlElement>,
    _listeners: Vec<Listener>,
}

pub fn mount(
    document: &web::Document,
    element: web::HtmlElement,
    touch_primary: bool,
) -> anyhow::Result<TiltCard> {
    let surface = Rc::new(RefCell::new(TiltSurface::new(!touch_primary)));
    let content = dom::query_html_within(&element, TILT_CONTENT_SELECTOR);

    if touch_primary {
        let card = TiltCard {
            surface,
            element,
            spotlight: None,
            content,
            _listeners: Vec::new(),
        };
        card.paint(&TiltPose::NEUTRAL);
        return Ok(card);
    }

    dom::set_style(&element, "transform-style", "preserve-3d");
    let spotlight = dom::create_div(document, SPOTLIGHT_STYLE)?;
    element
        .prepend_with_node_1(&spotlight)
        .map_err(|e| anyhow::anyhow!("insert spotlight: {:?}", e))?;

    let move_surface = surface.clone();
    let move_target = element.clone();
    let on_move = Listener::new(&element, "pointermove", move |ev: web::Event| {
        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let r = move_target.get_bounding_client_rect();
        let rect = Rect::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        );
        let client = Vec2::new(me.client_x() as f32, me.client_y() as f32);
        move_surface.borrow_mut().on_pointer_move(client, rect);
    })?;

    let leave_surface = surface.clone();
    let on_leave = Listener::new(&element, "pointerleave", move |_ev: web::Event| {
        leave_surface.borrow_mut().on_pointer_leave();
    })?;

    let card = TiltCard {
        surface,
        element,
        spotlight: Some(spotlight),
        content,
        _listeners: vec![on_move, on_leave],
    };
    card.paint(&card.surface.borrow().pose());
    Ok(card)
}

impl TiltCard {
    pub fn frame(&self, dt_sec: f32) {
        let pose = {
            let mut surface = self.surface.borrow_mut();
            let was_settled = surface.is_settled();
            let moving = surface.tick(dt_sec);
            if !moving && was_settled {
                self.paint_spotlight_visibility(surface.is_hovered());
                return;
            }
            surface.pose()
        };
        self.paint(&pose);
    }

    fn paint(&self, pose: &TiltPose) {
        dom::set_style(&self.element, "transform", &pose.css_transform());
        let content_transform = pose.css_content_transform();
        for el in &self.content {
            dom::set_style(el, "transform", &content_transform);
        }
        if let Some(spot) = &self.spotlight {
            dom::set_style(spot, "background", &pose.css_spotlight());
        }
        self.paint_spotlight_visibility(pose.spotlight_visible);
    }

    fn paint_spotlight_visibility(&self, visible: bool) {
        if let Some(spot) = &self.spotlight {
            dom::set_style(spot, "opacity", if visible { "1" } else { "0" });
        }
    }
}

impl Drop for TiltCard {
    fn drop(&mut self) {
        if let Some(spot) = &self.spotlight {
            spot.remove();
        }
        self.paint(&TiltPose::NEUTRAL);
    }
}
