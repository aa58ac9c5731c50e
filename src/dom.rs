use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order. Invalid selectors
/// and non-element nodes are silently skipped.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut found = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    found.push(el);
                }
            }
        }
    }
    found
}

/// True when the user asked the platform to minimize motion.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Adds `class` to `el` when `on`, removes it otherwise.
#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Viewport size as the page measures it: the larger of the root element's
/// client size and the window inner size, per axis.
pub fn viewport_size(window: &web::Window, document: &web::Document) -> (f32, f32) {
    let (mut w, mut h) = (0.0_f32, 0.0_f32);
    if let Some(root) = document.document_element() {
        w = root.client_width() as f32;
        h = root.client_height() as f32;
    }
    if let Some(iw) = window.inner_width().ok().and_then(|v| v.as_f64()) {
        w = w.max(iw as f32);
    }
    if let Some(ih) = window.inner_height().ok().and_then(|v| v.as_f64()) {
        h = h.max(ih as f32);
    }
    (w, h)
}

/// Runs `setup` immediately when the DOM is already parsed, otherwise once
/// it is.
pub fn on_document_ready(document: &web::Document, setup: impl FnOnce() + 'static) {
    if document.ready_state() == "loading" {
        let closure = Closure::once(setup);
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        setup();
    }
}
