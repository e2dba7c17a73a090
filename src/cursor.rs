use crate::constants::{CURSOR_DOT_STYLE, CURSOR_RING_STYLE, CURSOR_ROOT_ID, CURSOR_ROOT_STYLE};
use crate::dom::{self, Listener};
use crate::motion::{CursorLayer, HoverTarget, PointerTracker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page-level custom cursor: the DOM layers plus the listeners that feed them.
///
/// Dropping it removes the listeners and the generated elements.
pub struct CursorView {
    tracker: Rc<RefCell<PointerTracker>>,
    root: web::HtmlElement,
    dot: web::HtmlElement,
    ring: web::HtmlElement,
    idle: Cell<bool>,
    _listeners: [Listener; 2],
}

/// Returns `None` on touch-primary devices: no elements, no listeners.
pub fn mount(
    window: &web::Window,
    document: &web::Document,
    touch_primary: bool,
) -> anyhow::Result<Option<CursorView>> {
    if touch_primary {
        log::info!("[cursor] touch-primary input, custom cursor disabled");
        return Ok(None);
    }
    let tracker = Rc::new(RefCell::new(PointerTracker::new(true)));

    let root = dom::create_div(document, CURSOR_ROOT_STYLE)?;
    root.set_id(CURSOR_ROOT_ID);
    let dot = dom::create_div(document, CURSOR_DOT_STYLE)?;
    let ring = dom::create_div(document, CURSOR_RING_STYLE)?;
    for layer in [&dot, &ring] {
        root.append_child(layer)
            .map_err(|e| anyhow::anyhow!("append cursor layer: {:?}", e))?;
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&root)
        .map_err(|e| anyhow::anyhow!("append cursor root: {:?}", e))?;

    let move_tracker = tracker.clone();
    let on_move = Listener::new(window, "pointermove", move |ev: web::Event| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            move_tracker
                .borrow_mut()
                .on_pointer_move(me.client_x() as f32, me.client_y() as f32);
        }
    })?;

    let over_tracker = tracker.clone();
    let on_over = Listener::new(window, "pointerover", move |ev: web::Event| {
        let chain = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| hover_chain(&el))
            .unwrap_or_default();
        over_tracker.borrow_mut().on_pointer_over(chain.iter());
    })?;

    log::info!("[cursor] mounted");
    Ok(Some(CursorView {
        tracker,
        root,
        dot,
        ring,
        idle: Cell::new(false),
        _listeners: [on_move, on_over],
    }))
}

/// Target first, then each ancestor up to the document element.
fn hover_chain(el: &web::Element) -> Vec<HoverTarget> {
    let mut chain = Vec::new();
    let mut cur = Some(el.clone());
    while let Some(node) = cur {
        let role = node.get_attribute("role");
        chain.push(HoverTarget::new(node.tag_name(), role.as_deref()));
        cur = node.parent_element();
    }
    chain
}

impl CursorView {
    /// Advance the springs and repaint. Idle frames skip the DOM writes.
    pub fn frame(&self, dt_sec: f32) {
        let mut tracker = self.tracker.borrow_mut();
        let moving = tracker.tick(dt_sec);
        if !moving && self.idle.get() {
            return;
        }
        if let Some(frame) = tracker.frame() {
            paint_layer(&self.dot, &frame.dot);
            paint_layer(&self.ring, &frame.ring);
        }
        self.idle.set(!moving);
    }
}

fn paint_layer(el: &web::HtmlElement, layer: &CursorLayer) {
    dom::set_style(el, "transform", &layer.css_transform());
    dom::set_style(el, "opacity", &layer.opacity.to_string());
}

impl Drop for CursorView {
    fn drop(&mut self) {
        self.root.remove();
    }
}
