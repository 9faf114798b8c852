use crate::core::Scene;
use crate::dom::Listener;
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spawn sparks on mouse movement and touch start/move.
///
/// Sparks are only pushed into the scene; the frame loop creates and expires
/// their nodes.
pub fn wire_spark_input(window: &web::Window, scene: &Rc<RefCell<Scene>>) -> [Listener; 3] {
    [
        wire_mousemove(window, scene.clone()),
        wire_touch(window, "touchstart", scene.clone()),
        wire_touch(window, "touchmove", scene.clone()),
    ]
}

fn wire_mousemove(window: &web::Window, scene: Rc<RefCell<Scene>>) -> Listener {
    Listener::new(window.as_ref(), "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let origin = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        scene
            .borrow_mut()
            .spawn_pointer_sparks(instant::now(), origin);
    })
}

fn wire_touch(window: &web::Window, event: &'static str, scene: Rc<RefCell<Scene>>) -> Listener {
    Listener::passive(window.as_ref(), event, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let points = touch_points(&ev.touches());
        if points.is_empty() {
            return;
        }
        scene.borrow_mut().spawn_touch_sparks(instant::now(), &points);
    })
}

fn touch_points(touches: &web::TouchList) -> SmallVec<[Vec2; 4]> {
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}
