use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Touch-primary input, checked once at mount. Any failure reports touch so
/// pointer effects stay off.
pub fn is_touch_primary(window: &web::Window) -> bool {
    let has_touch_start = match js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[dom] touch probe failed: {:?}", e);
            return true;
        }
    };
    has_touch_start || window.navigator().max_touch_points() > 0
}

/// All elements matching `selector` that are `HtmlElement`s.
pub fn query_html_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let list = match root.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::error!("[dom] bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_html_within(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn create_div(document: &web::Document, style: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?;
    _ = el.set_attribute("style", style);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("div is not an HtmlElement: {:?}", e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn remove_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

pub fn viewport_height(window: &web::Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}
