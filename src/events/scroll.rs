use crate::constants::LIGHT_SHIFT_PROPERTY;
use crate::core::{format_light_shift, light_shift};
use crate::dom::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Recompute the lighting parameter from the current scroll offset and
/// publish it on `<html>`.
pub fn apply_light_shift(window: &web::Window, document: &web::Document) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let t = light_shift(scroll_y, height);
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = root
            .style()
            .set_property(LIGHT_SHIFT_PROPERTY, &format_light_shift(t));
    }
}

/// Publish once now, then on every scroll; the listener is passive.
pub fn wire_scroll_lighting(window: &web::Window, document: &web::Document) -> Listener {
    apply_light_shift(window, document);
    let win = window.clone();
    let doc = document.clone();
    Listener::passive(window.as_ref(), "scroll", move |_ev: web::Event| {
        apply_light_shift(&win, &doc);
    })
}
