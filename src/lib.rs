#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{PlaybackController, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod layers;
mod render;
mod session;

/// Handles that live for the whole page: page-level listeners and the stage.
struct Page {
    _stage: Rc<RefCell<session::Stage>>,
    _play: dom::Listener,
    _replay: dom::Listener,
    _lighting: dom::Listener,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blue-flame starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Lighting follows the page, not the replay key
    let lighting = events::wire_scroll_lighting(&window, &document);

    let audio_el: web::HtmlAudioElement = dom::element_by_id(&document, AUDIO_ID)?;
    let sink = audio::MediaSink::new(audio_el);
    let controller = Rc::new(RefCell::new(PlaybackController::new()));
    let play = audio::wire_play_button(&document, PLAY_BUTTON_ID, sink, controller);

    let stage = Rc::new(RefCell::new(session::Stage::new(
        window.clone(),
        document.clone(),
        SceneConfig::default(),
    )));
    stage.borrow_mut().start()?;

    let stage_replay = stage.clone();
    let replay = dom::on_click_within(&document, REPLAY_BUTTON_ID, move || {
        if let Err(e) = stage_replay.borrow_mut().replay() {
            log::error!("[replay] remount failed: {:?}", e);
        }
    });

    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            _stage: stage,
            _play: play,
            _replay: replay,
            _lighting: lighting,
        });
    });
    Ok(())
}

/// Tear down every session, timer and listener. Exposed for hosts that
/// unmount the page without a navigation.
#[wasm_bindgen]
pub fn shutdown() {
    PAGE.with(|p| {
        if p.borrow_mut().take().is_some() {
            log::info!("blue-flame stopped");
        }
    });
}
