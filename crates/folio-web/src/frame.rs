use crate::chrome::Chrome;
use crate::dom;
use crate::motion::Animator;
use crate::render::{CanvasSurface, GpuContext};
use folio_core::motion::in_view;
use folio_core::{SceneDriver, SharedInteraction};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A section background: its canvas, its scene and (once WebGPU is up) its surface.
pub struct SceneSlot {
    pub canvas: web::HtmlCanvasElement,
    pub driver: SceneDriver,
    pub max_dpr: f64,
    pub surface: Option<CanvasSurface>,
}

pub struct FrameContext {
    pub interaction: SharedInteraction,
    pub animator: Rc<RefCell<Animator>>,
    pub chrome: Chrome,
    pub scenes: Vec<SceneSlot>,
    pub gpu: Option<GpuContext>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let state = *self.interaction.borrow();
        self.chrome.update(&state, dt.as_secs_f32());

        let viewport_height = web::window()
            .map(|w| dom::viewport_size(&w).1)
            .unwrap_or(state.viewport_height);
        self.animator.borrow_mut().tick(viewport_height);

        for slot in &mut self.scenes {
            slot.driver.tick(dt);
            if let Some((w, h)) = dom::sync_canvas_backing_size(&slot.canvas, slot.max_dpr) {
                slot.driver.set_aspect(w, h);
                if let (Some(gpu), Some(surface)) = (&self.gpu, &mut slot.surface) {
                    surface.resize(gpu, w, h);
                }
            }
            let rect = slot.canvas.get_bounding_client_rect();
            if !in_view(rect.top(), rect.bottom(), viewport_height) {
                continue;
            }
            if let (Some(gpu), Some(surface)) = (&self.gpu, &mut slot.surface) {
                if let Err(e) = surface.render(gpu, &slot.driver) {
                    log::error!("[gpu] render error: {:?}", e);
                }
            }
        }
    }

    /// Hand the surfaces to their scenes, in canvas order.
    pub fn attach_gpu(&mut self, gpu: GpuContext, surfaces: Vec<CanvasSurface>) {
        for (slot, surface) in self.scenes.iter_mut().zip(surfaces) {
            slot.surface = Some(surface);
        }
        self.gpu = Some(gpu);
    }

    /// Drop every surface before the device they were created on.
    pub fn release_gpu(&mut self) {
        for slot in &mut self.scenes {
            slot.surface = None;
        }
        self.gpu = None;
    }
}

/// The `requestAnimationFrame` loop. Cancelling drops the tick closure and
/// with it the loop's reference to the frame context.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: &Cell<Option<i32>>,
) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &handle_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &handle);
    FrameLoop { tick, handle }
}
