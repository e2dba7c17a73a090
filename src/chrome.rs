use crate::constants::{ATTR_PARALLAX, NAVBAR_SELECTOR, NAV_SCROLLED_CLASS, PARALLAX_SELECTOR};
use crate::dom::{self, Listener};
use crate::motion::{NavScrollState, ParallaxLayer};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Scroll-linked site chrome: the navbar backdrop toggle and hero parallax.
pub struct ScrollChrome {
    navbar: Option<web::HtmlElement>,
    nav_state: NavScrollState,
    layers: Vec<(web::HtmlElement, ParallaxLayer)>,
    // Latest scroll offset not yet painted.
    pending: Rc<Cell<Option<f32>>>,
    _listener: Listener,
}

pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<ScrollChrome> {
    let navbar = dom::query_html_all(document, NAVBAR_SELECTOR).into_iter().next();

    let layers = dom::query_html_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let name = el.get_attribute(ATTR_PARALLAX).unwrap_or_default();
            match name.parse::<ParallaxLayer>() {
                Ok(layer) => Some((el, layer)),
                Err(e) => {
                    log::warn!("[chrome] {}; layer skipped", e);
                    None
                }
            }
        })
        .collect::<Vec<_>>();

    let pending = Rc::new(Cell::new(Some(dom::scroll_y(window))));
    let scroll_pending = pending.clone();
    let scroll_window = window.clone();
    let listener = Listener::new(window, "scroll", move |_ev: web::Event| {
        scroll_pending.set(Some(dom::scroll_y(&scroll_window)));
    })?;

    log::info!(
        "[chrome] navbar={} parallax_layers={}",
        navbar.is_some(),
        layers.len()
    );
    Ok(ScrollChrome {
        navbar,
        nav_state: NavScrollState::default(),
        layers,
        pending,
        _listener: listener,
    })
}

impl ScrollChrome {
    pub fn frame(&mut self) {
        let Some(scroll_y) = self.pending.take() else {
            return;
        };
        if let (Some(nav), Some(scrolled)) = (&self.navbar, self.nav_state.update(scroll_y)) {
            _ = nav.class_list().toggle_with_force(NAV_SCROLLED_CLASS, scrolled);
        }
        for (el, layer) in &self.layers {
            let frame = layer.frame_at(scroll_y);
            dom::set_style(el, "transform", &frame.css_transform());
            dom::set_style(el, "opacity", &frame.opacity.to_string());
        }
    }
}
