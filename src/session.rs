use crate::constants::*;
use crate::core::{ReplayKey, Scene, SceneConfig, HEART_INTERVAL_MS};
use crate::dom::{self, Interval, Listener};
use crate::events;
use crate::frame::{FrameContext, FrameLoop};
use crate::layers::{self, EphemeralLayer};
use crate::render::DustRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything animated for one replay key.
///
/// Field order is teardown order: timers and listeners go first so nothing
/// can touch the scene while the frame loop is being cancelled.
pub struct Session {
    _heart_timer: Interval,
    _spark_input: [Listener; 3],
    _resize: Listener,
    _frame_loop: FrameLoop,
    scene: Rc<RefCell<Scene>>,
}

impl Session {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        config: SceneConfig,
        key: ReplayKey,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, DUST_CANVAS_ID)?;
        let hearts_el: web::HtmlElement = dom::element_by_id(document, HEARTS_LAYER_ID)?;
        let sparks_el: web::HtmlElement = dom::element_by_id(document, SPARKS_LAYER_ID)?;

        let viewport = dom::sync_canvas_to_window(&canvas).unwrap_or_else(|| dom::viewport(window));
        let seed: u64 = rand::random();
        let scene = Rc::new(RefCell::new(Scene::new(config, viewport, key, seed)));

        let canvas_resize = canvas.clone();
        let scene_resize = scene.clone();
        let resize = Listener::new(window.as_ref(), "resize", move |_ev: web::Event| {
            if let Some(vp) = dom::sync_canvas_to_window(&canvas_resize) {
                scene_resize.borrow_mut().resize(vp);
            }
        });

        let scene_hearts = scene.clone();
        let heart_timer = Interval::new(HEART_INTERVAL_MS, move || {
            scene_hearts.borrow_mut().spawn_heart(instant::now());
        })?;

        let spark_input = events::wire_spark_input(window, &scene);

        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            scene: scene.clone(),
            dust: DustRenderer::new(canvas)?,
            hearts: EphemeralLayer::new(document.clone(), hearts_el, layers::build_heart),
            sparks: EphemeralLayer::new(document.clone(), sparks_el, layers::build_spark),
        }));
        let frame_loop = FrameLoop::start(frame_ctx);

        log::info!(
            "[session] mounted key={} particles={}",
            key.0,
            scene.borrow().field().len()
        );
        Ok(Self {
            _heart_timer: heart_timer,
            _spark_input: spark_input,
            _resize: resize,
            _frame_loop: frame_loop,
            scene,
        })
    }

    #[inline]
    pub fn key(&self) -> ReplayKey {
        self.scene.borrow().replay_key
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        log::info!("[session] teardown key={}", self.key().0);
    }
}

/// Owner of the current session and the replay counter.
pub struct Stage {
    window: web::Window,
    document: web::Document,
    config: SceneConfig,
    key: ReplayKey,
    current: Option<Session>,
}

impl Stage {
    pub fn new(window: web::Window, document: web::Document, config: SceneConfig) -> Self {
        Self {
            window,
            document,
            config,
            key: ReplayKey::default(),
            current: None,
        }
    }

    pub fn start(&mut self) -> anyhow::Result<()> {
        drop(self.current.take());
        self.current = Some(Session::mount(
            &self.window,
            &self.document,
            self.config.clone(),
            self.key,
        )?);
        Ok(())
    }

    /// Bump the replay key: rerun the hero entrance and rebuild the session.
    pub fn replay(&mut self) -> anyhow::Result<()> {
        let key = self.key.bump();
        log::info!("[replay] key={}", key.0);
        remount_entrance(&self.document, HERO_ID);
        self.start()
    }
}

/// Replace the entrance subtree with a deep clone so its one-shot CSS
/// animation runs again. Click handling is delegated, so no listeners are lost.
fn remount_entrance(document: &web::Document, id: &str) {
    let Some(hero) = document.get_element_by_id(id) else {
        return;
    };
    let fresh = match hero.clone_node_with_deep(true) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("[replay] clone of #{} failed: {:?}", id, e);
            return;
        }
    };
    _ = hero.replace_with_with_node_1(&fresh);
}
