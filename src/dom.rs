use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Look up `#id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Current window inner size in CSS pixels.
pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32;
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Match the canvas backing store to the window, returning the new viewport.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let window = web::window()?;
    let vp = viewport(&window);
    canvas.set_width(vp.width.max(1.0) as u32);
    canvas.set_height(vp.height.max(1.0) as u32);
    Some(vp)
}

/// An event listener that is removed when dropped.
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
    ) -> Self {
        Self::with_options(target, event, false, handler)
    }

    /// Register with `{ passive: true }`.
    pub fn passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        Self::with_options(target, event, true, handler)
    }

    fn with_options(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A `setInterval` timer that is cleared when dropped.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: f64, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms.round() as i32,
            )
            .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

/// Delegated click handling: fires when a click lands on `#id` or inside it.
///
/// Registered on the document so it keeps working when the element is
/// replaced by a fresh clone.
pub fn on_click_within(
    document: &web::Document,
    id: &'static str,
    mut handler: impl FnMut() + 'static,
) -> Listener {
    let selector = format!("#{}", id);
    Listener::new(document.as_ref(), "click", move |ev: web::Event| {
        let hit = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten())
            .is_some();
        if hit {
            handler();
        }
    })
}
