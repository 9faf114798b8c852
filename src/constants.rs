/// DOM anchors, class names, and styling values used by the web frontend.
///
/// Simulation tuning (counts, ranges, lifetimes) lives in `core::constants`;
/// everything here is about how the scene is attached to the page.
// Element ids (see index.html)
pub const DUST_CANVAS_ID: &str = "dust-canvas";
pub const HEARTS_LAYER_ID: &str = "hearts-layer";
pub const SPARKS_LAYER_ID: &str = "sparks-layer";
pub const HERO_ID: &str = "hero";
pub const PLAY_BUTTON_ID: &str = "play-button";
pub const REPLAY_BUTTON_ID: &str = "replay-button";
pub const AUDIO_ID: &str = "bg-audio";

// Class names styled by style.css
pub const HEART_CLASS: &str = "floating-heart";
pub const SPARK_CLASS: &str = "spark";
pub const PLAYING_CLASS: &str = "is-playing";

// Heart appearance
pub const HEART_GLYPH: &str = "\u{2764}";
pub const HEART_GLOW_FILTER: &str = "drop-shadow(0 0 10px rgba(0,150,255,0.8))";

// Scroll lighting custom property on <html>
pub const LIGHT_SHIFT_PROPERTY: &str = "--light-shift";

// Dust glow colour (alpha supplied per particle)
pub const DUST_RGB: [u8; 3] = [120, 170, 255];
pub const DUST_TRANSPARENT: &str = "rgba(0,0,0,0)";

// Ambient track, looping; only started from a click
pub const AUDIO_SRC: &str =
    "https://cdn.pixabay.com/download/audio/2023/01/30/audio_ba1793b97c.mp3?filename=ambient-cinematic-140983.mp3";

#[inline]
pub fn dust_rgba(alpha: f32) -> String {
    let [r, g, b] = DUST_RGB;
    format!("rgba({},{},{},{:.3})", r, g, b, alpha.clamp(0.0, 1.0))
}
