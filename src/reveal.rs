use crate::constants::{ATTR_REVEAL_DELAY, ATTR_REVEAL_DIRECTION, ATTR_REVEAL_WIDTH};
use crate::dom::{self, Listener};
use crate::motion::{Keyframe, Reveal, RevealOptions, ViewportMargin};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// How a binding learns that its element entered the viewport.
enum Watch {
    Observer {
        observer: web::IntersectionObserver,
        _callback: ObserverCallback,
    },
    /// Used where `IntersectionObserver` cannot be constructed. Re-checks on
    /// scroll and on resize.
    Scroll([Listener; 2]),
}

impl Drop for Watch {
    fn drop(&mut self) {
        if let Watch::Observer { observer, .. } = self {
            observer.disconnect();
        }
    }
}

/// A `[data-reveal]` element and whatever is watching it.
pub struct RevealBinding {
    reveal: Rc<RefCell<Reveal>>,
    element: web::HtmlElement,
    watch: Option<Watch>,
}

pub fn options_for(element: &web::Element) -> RevealOptions {
    let direction = element.get_attribute(ATTR_REVEAL_DIRECTION);
    let delay = element.get_attribute(ATTR_REVEAL_DELAY);
    let width = element.get_attribute(ATTR_REVEAL_WIDTH);
    match RevealOptions::from_attrs(direction.as_deref(), delay.as_deref(), width.as_deref()) {
        Ok(opts) => opts,
        Err(e) => {
            log::warn!("[reveal] {}; using defaults", e);
            RevealOptions::default()
        }
    }
}

pub fn mount(window: &web::Window, element: web::HtmlElement) -> anyhow::Result<RevealBinding> {
    let options = options_for(&element);
    let reveal = Rc::new(RefCell::new(Reveal::new(options)));

    dom::set_style(&element, "width", options.width.css());
    paint(&element, &reveal.borrow().style());
    dom::set_style(&element, "transition", &options.css_transition());

    let margin = ViewportMargin::default();
    let watch = match observe(&element, &reveal, margin) {
        Ok(w) => w,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable ({:?}), falling back to scroll", e);
            watch_scroll(window, &element, &reveal, margin)?
        }
    };

    Ok(RevealBinding {
        reveal,
        element,
        watch: Some(watch),
    })
}

fn observe(
    element: &web::HtmlElement,
    reveal: &Rc<RefCell<Reveal>>,
    margin: ViewportMargin,
) -> Result<Watch, JsValue> {
    let cb_reveal = reveal.clone();
    let cb_element = element.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if cb_reveal.borrow_mut().observe(intersecting) {
                paint(&cb_element, &cb_reveal.borrow().style());
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(&margin.root_margin());
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    Ok(Watch::Observer {
        observer,
        _callback: callback,
    })
}

fn watch_scroll(
    window: &web::Window,
    element: &web::HtmlElement,
    reveal: &Rc<RefCell<Reveal>>,
    margin: ViewportMargin,
) -> anyhow::Result<Watch> {
    let check = Rc::new({
        let window = window.clone();
        let element = element.clone();
        let reveal = reveal.clone();
        move || {
            if reveal.borrow().is_revealed() {
                return;
            }
            let rect = element.get_bounding_client_rect();
            let seen = margin.intersects(
                rect.top() as f32,
                rect.bottom() as f32,
                dom::viewport_height(&window),
            );
            if reveal.borrow_mut().observe(seen) {
                paint(&element, &reveal.borrow().style());
            }
        }
    });
    check();
    let on_scroll = Listener::new(window, "scroll", {
        let check = check.clone();
        move |_ev: web::Event| check()
    })?;
    let on_resize = Listener::new(window, "resize", move |_ev: web::Event| check())?;
    Ok(Watch::Scroll([on_scroll, on_resize]))
}

fn paint(element: &web::HtmlElement, style: &Keyframe) {
    dom::set_style(element, "opacity", &style.css_opacity());
    dom::set_style(element, "transform", &style.css_transform());
}

impl RevealBinding {
    pub fn is_revealed(&self) -> bool {
        self.reveal.borrow().is_revealed()
    }

    /// Drop the watcher once the element has been revealed. Called from the
    /// frame loop, never from inside the watcher's own callback.
    pub fn release_if_revealed(&mut self) {
        if self.watch.is_some() && self.is_revealed() {
            self.watch = None;
            log::debug!("[reveal] released watcher for <{}>", self.element.tag_name());
        }
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.watch = None;
        if let Some(style) = self.reveal.borrow().teardown_style() {
            dom::remove_style(&self.element, "transition");
            paint(&self.element, &style);
        }
    }
}
