use crate::chrome::ScrollChrome;
use crate::cursor::CursorView;
use crate::reveal::RevealBinding;
use crate::tilt_card::TiltCard;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything advanced once per animation frame.
pub struct FrameContext {
    pub cursor: Option<CursorView>,
    pub cards: Vec<TiltCard>,
    pub reveals: Vec<RevealBinding>,
    pub chrome: Option<ScrollChrome>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if let Some(cursor) = &self.cursor {
            cursor.frame(dt_sec);
        }
        for card in &self.cards {
            card.frame(dt_sec);
        }
        for reveal in &mut self.reveals {
            reveal.release_if_revealed();
        }
        if let Some(chrome) = &mut self.chrome {
            chrome.frame();
        }
    }
}

/// A running requestAnimationFrame loop. Dropping it cancels the pending
/// frame and releases the tick closure.
pub struct FrameLoop {
    window: web::Window,
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start_loop(
    window: &web::Window,
    frame_ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<FrameLoop> {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            handle_tick.set(
                window_tick
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .ok(),
            );
        }
    }) as Box<dyn FnMut()>));

    let first = match tick.borrow().as_ref() {
        Some(cb) => window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?,
        None => anyhow::bail!("tick closure missing"),
    };
    handle.set(Some(first));

    Ok(FrameLoop {
        window: window.clone(),
        handle,
        tick,
    })
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        // breaks the closure <-> Rc cycle
        self.tick.borrow_mut().take();
    }
}
