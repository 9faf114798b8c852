use crate::core::{Heart, Scene, Spark};
use crate::layers::EphemeralLayer;
use crate::render::DustRenderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub dust: DustRenderer,
    pub hearts: EphemeralLayer<Heart>,
    pub sparks: EphemeralLayer<Spark>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = instant::now();
        let mut scene = self.scene.borrow_mut();
        scene.step(now);
        self.dust.draw(scene.field());
        self.hearts.sync(scene.hearts());
        self.sparks.sync(scene.sparks());
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop; dropping it cancels the pending
/// frame and releases the frame context.
pub struct FrameLoop {
    tick: TickSlot,
    raf_id: Rc<Cell<Option<i32>>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let tick_weak = Rc::downgrade(&tick);
        let raf_id_tick = raf_id.clone();
        let frame_ctx_tick = frame_ctx.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id_tick.set(None);
            frame_ctx_tick.borrow_mut().frame();
            // the loop owns the closure; once it is gone, stop rescheduling
            if let Some(tick) = tick_weak.upgrade() {
                raf_id_tick.set(request_frame(&tick));
            }
        }) as Box<dyn FnMut()>));
        raf_id.set(request_frame(&tick));

        Self {
            tick,
            raf_id,
            frame_ctx,
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.frame_ctx.borrow().dust.clear();
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
