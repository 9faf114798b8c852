use crate::constants::*;
use crate::core::{EntityId, EphemeralPool, Heart, Spark};
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Builds the DOM node for one pooled item.
pub type NodeBuilder<T> = fn(&web::Document, &T) -> Option<web::HtmlElement>;

/// Mirrors an `EphemeralPool` onto child nodes of a container element.
///
/// `sync` runs once per frame: ids new to the pool get a node, ids no longer
/// in the pool lose theirs. Nodes are detached with `Element::remove`, which
/// is a no-op when the node or its container is already gone.
pub struct EphemeralLayer<T> {
    document: web::Document,
    container: web::HtmlElement,
    nodes: FnvHashMap<EntityId, web::HtmlElement>,
    build: NodeBuilder<T>,
}

impl<T> EphemeralLayer<T> {
    pub fn new(document: web::Document, container: web::HtmlElement, build: NodeBuilder<T>) -> Self {
        Self {
            document,
            container,
            nodes: FnvHashMap::default(),
            build,
        }
    }

    pub fn sync(&mut self, pool: &EphemeralPool<T>) {
        self.nodes.retain(|id, node| {
            let live = pool.contains(*id);
            if !live {
                node.remove();
            }
            live
        });

        if !self.container.is_connected() {
            return;
        }
        for entry in pool.iter() {
            if self.nodes.contains_key(&entry.id) {
                continue;
            }
            if let Some(node) = (self.build)(&self.document, &entry.item) {
                _ = self.container.append_child(&node);
                self.nodes.insert(entry.id, node);
            }
        }
    }
}

impl<T> Drop for EphemeralLayer<T> {
    fn drop(&mut self) {
        for (_, node) in self.nodes.drain() {
            node.remove();
        }
    }
}

fn create_div(document: &web::Document, class: &str) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_class_name(class);
    Some(el)
}

pub fn build_heart(document: &web::Document, heart: &Heart) -> Option<web::HtmlElement> {
    let el = create_div(document, HEART_CLASS)?;
    el.set_inner_text(HEART_GLYPH);
    let style = el.style();
    _ = style.set_property("left", &format!("{:.2}%", heart.left_pct));
    _ = style.set_property("opacity", &format!("{:.3}", heart.opacity));
    _ = style.set_property("filter", HEART_GLOW_FILTER);
    Some(el)
}

pub fn build_spark(document: &web::Document, spark: &Spark) -> Option<web::HtmlElement> {
    let el = create_div(document, SPARK_CLASS)?;
    let style = el.style();
    _ = style.set_property("left", &format!("{:.1}px", spark.position.x));
    _ = style.set_property("top", &format!("{:.1}px", spark.position.y));
    _ = style.set_property(
        "transform",
        &format!("translate(-50%, -50%) rotate({:.1}deg)", spark.rotation_deg),
    );
    _ = style.set_property("opacity", &format!("{:.3}", spark.opacity));
    Some(el)
}
