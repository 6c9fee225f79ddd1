use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub mod animation;
pub mod growth;
pub mod math;
pub mod particles;
pub mod render;
pub mod rng;
pub mod scene;

use render::CanvasSurface;
use scene::SceneSession;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Heart tree scene exposed to JavaScript.
///
/// The page wires two buttons to this: "confirm" and "regenerate" both
/// call `reset` followed by `start`; the returned total time lets the
/// page schedule its completion message.
#[wasm_bindgen]
pub struct HeartTree {
    session: Rc<RefCell<SceneSession>>,
    surface: Rc<RefCell<CanvasSurface>>,
    loop_armed: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl HeartTree {
    /// Create a new scene bound to a canvas element.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<HeartTree, JsValue> {
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            session: Rc::new(RefCell::new(SceneSession::new(width, height))),
            surface: Rc::new(RefCell::new(CanvasSurface::new(ctx))),
            loop_armed: Rc::new(Cell::new(false)),
        })
    }

    /// Regenerate the scene from the given seed. Returns the total growth
    /// time in milliseconds.
    #[wasm_bindgen]
    pub fn reset(&self, seed: u32) -> f64 {
        let mut session = self.session.borrow_mut();
        session.reset(seed);

        let scene = session.scene();
        web_sys::console::log_1(
            &format!(
                "heart tree: seed={} roots={} segments={} hearts={} total={:.0}ms",
                seed,
                scene.roots.len(),
                scene.segments.len(),
                scene.hearts.len(),
                session.total_time(),
            )
            .into(),
        );

        session.total_time()
    }

    /// Regenerate from the current wall-clock time as seed.
    #[wasm_bindgen]
    pub fn regenerate(&self) -> f64 {
        self.reset(seed_from_millis(js_sys::Date::now()))
    }

    /// Render a single frame at the given elapsed time (ms). Used for the
    /// static preview before the animation is started.
    #[wasm_bindgen]
    pub fn render_at(&self, elapsed: f64) {
        self.session
            .borrow_mut()
            .render_at(&mut *self.surface.borrow_mut(), elapsed);
    }

    /// Total growth time of the current scene (ms).
    #[wasm_bindgen]
    pub fn total_time(&self) -> f64 {
        self.session.borrow().total_time()
    }

    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.session.borrow().is_running()
    }

    /// Start (or restart) the animation loop from the current timestamp.
    #[wasm_bindgen]
    pub fn start(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let now = window.performance().ok_or("no performance")?.now();
        self.session.borrow_mut().start(now);

        if self.loop_armed.get() {
            // the existing loop picks up the rebased clock
            return Ok(());
        }
        self.loop_armed.set(true);

        let session = Rc::clone(&self.session);
        let surface = Rc::clone(&self.surface);
        let armed = Rc::clone(&self.loop_armed);

        let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let handle_inner = Rc::clone(&handle);

        *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            let rendered = session
                .borrow_mut()
                .frame(&mut *surface.borrow_mut(), now);
            if !rendered {
                // stopped between scheduling and arrival
                armed.set(false);
                return;
            }
            if let Some(window) = web_sys::window() {
                if let Some(closure) = handle_inner.borrow().as_ref() {
                    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(closure) = handle.borrow().as_ref() {
            window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    /// Stop the animation; an in-flight frame callback becomes a no-op.
    #[wasm_bindgen]
    pub fn stop(&self) {
        self.session.borrow_mut().stop();
    }
}

/// Millisecond timestamps exceed `u32::MAX` and a direct `as u32` cast
/// saturates there, collapsing every timestamp to the same seed. Wrap
/// modulo 2^32 instead, matching the `>>> 0` truncation of a JS caller.
fn seed_from_millis(ms: f64) -> u32 {
    (ms as u64 & 0xffff_ffff) as u32
}
