#![cfg(target_arch = "wasm32")]
use frame::{FrameContext, FrameLoop};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod chrome;
mod constants;
mod cursor;
mod dom;
mod frame;
pub mod motion;
mod reveal;
mod tilt_card;

/// Everything mounted on the current page. Dropping it stops the frame loop
/// first, then releases every listener and observer.
struct App {
    _frame_loop: FrameLoop,
    _frame_ctx: Rc<RefCell<FrameContext>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("studio-motion starting");
    remount();
    Ok(())
}

/// Bind behaviour to the current document, replacing any previous mount.
/// Called again by the page layer after it swaps route content.
#[wasm_bindgen(js_name = mount)]
pub fn remount() {
    unmount();
    match init() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {:?}", e),
    }
}

/// Release every listener, observer and pending animation frame.
#[wasm_bindgen]
pub fn unmount() {
    let previous = APP.with(|slot| slot.borrow_mut().take());
    if previous.is_some() {
        drop(previous);
        log::info!("[app] unmounted");
    }
}

fn init() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Capability is fixed for the lifetime of this mount.
    let touch_primary = dom::is_touch_primary(&window);
    log::info!("[app] touch_primary={}", touch_primary);

    let cursor = cursor::mount(&window, &document, touch_primary)?;

    let cards = dom::query_html_all(&document, constants::TILT_SELECTOR)
        .into_iter()
        .filter_map(|el| match tilt_card::mount(&document, el, touch_primary) {
            Ok(card) => Some(card),
            Err(e) => {
                log::error!("[tilt] mount failed: {:?}", e);
                None
            }
        })
        .collect::<Vec<_>>();

    let reveals = dom::query_html_all(&document, constants::REVEAL_SELECTOR)
        .into_iter()
        .filter_map(|el| match reveal::mount(&window, el) {
            Ok(binding) => Some(binding),
            Err(e) => {
                log::error!("[reveal] mount failed: {:?}", e);
                None
            }
        })
        .collect::<Vec<_>>();

    let chrome = match chrome::mount(&window, &document) {
        Ok(c) => Some(c),
        Err(e) => {
            log::error!("[chrome] mount failed: {:?}", e);
            None
        }
    };

    log::info!(
        "[app] mounted cursor={} tilt_cards={} reveals={}",
        cursor.is_some(),
        cards.len(),
        reveals.len()
    );

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        cursor,
        cards,
        reveals,
        chrome,
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(&window, frame_ctx.clone())?;

    Ok(App {
        _frame_loop: frame_loop,
        _frame_ctx: frame_ctx,
    })
}
