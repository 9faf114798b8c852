use crate::constants::{AUDIO_SRC, PLAYING_CLASS};
use crate::core::{AudioSink, PlaybackController, PlaybackState};
use crate::dom::{on_click_within, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping `<audio>` element used as the playback sink.
#[derive(Clone)]
pub struct MediaSink {
    audio: web::HtmlAudioElement,
}

impl MediaSink {
    pub fn new(audio: web::HtmlAudioElement) -> Self {
        audio.set_loop(true);
        audio.set_preload("auto");
        if audio.current_src().is_empty() && audio.src().is_empty() {
            audio.set_src(AUDIO_SRC);
        }
        Self { audio }
    }
}

impl AudioSink for MediaSink {
    type Error = JsValue;

    /// Starts playback. A synchronous refusal is returned; a rejected play
    /// promise (autoplay policy, unreachable source) is awaited and dropped.
    fn play(&self) -> Result<(), JsValue> {
        let promise: js_sys::Promise = self.audio.play()?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] play promise rejected: {:?}", e);
            }
        });
        Ok(())
    }
}

/// Wire the play control. The first click starts playback and marks the
/// button as playing; later clicks resume.
pub fn wire_play_button(
    document: &web::Document,
    button_id: &'static str,
    sink: MediaSink,
    controller: Rc<RefCell<PlaybackController>>,
) -> Listener {
    let doc = document.clone();
    on_click_within(document, button_id, move || {
        let state = controller.borrow_mut().trigger(&sink);
        if state == PlaybackState::Started {
            if let Some(btn) = doc.get_element_by_id(button_id) {
                _ = btn.class_list().add_1(PLAYING_CLASS);
            }
        }
    })
}
