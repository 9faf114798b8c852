/// Scroll-linked lighting parameter in `[0, 1]`.
///
/// Linear in `scroll_y / viewport_height`, reaching 1 once the page has been
/// scrolled by one full viewport. A non-positive viewport height counts as 1px
/// and a non-finite scroll offset as 0.
#[inline]
pub fn light_shift(scroll_y: f64, viewport_height: f64) -> f32 {
    let h = if viewport_height.is_finite() && viewport_height > 0.0 {
        viewport_height
    } else {
        1.0
    };
    let y = if scroll_y.is_finite() { scroll_y } else { 0.0 };
    (y / h).clamp(0.0, 1.0) as f32
}

/// CSS value written to the lighting custom property.
#[inline]
pub fn format_light_shift(t: f32) -> String {
    format!("{:.4}", t.clamp(0.0, 1.0))
}
