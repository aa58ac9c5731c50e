use crate::constants::{REVEALED_CLASS, REVEAL_SELECTOR, STAGGER_INDEX_PROP, STAGGER_SELECTOR};
use crate::core::{RevealTracker, REVEAL_BAND};
use crate::dom;
use crate::observe;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Number the children of every stagger group so the stylesheet can derive
/// per-child delays from the custom property.
fn assign_stagger_indices(document: &web::Document) {
    for group in dom::query_all(document, STAGGER_SELECTOR) {
        let children = group.children();
        for i in 0..children.length() {
            let Some(child) = children.item(i) else {
                continue;
            };
            if let Some(child) = child.dyn_ref::<web::HtmlElement>() {
                _ = child
                    .style()
                    .set_property(STAGGER_INDEX_PROP, &i.to_string());
            }
        }
    }
}

pub fn wire_reveal(document: &web::Document) {
    // Stagger indices are useful even when nothing is marked for reveal.
    assign_stagger_indices(document);

    let revealables = dom::query_all(document, REVEAL_SELECTOR);
    if revealables.is_empty() {
        log::info!("[reveal] nothing to reveal");
        return;
    }
    log::info!("[reveal] watching {} element(s)", revealables.len());

    let mut tracker = RevealTracker::new(revealables.len());
    let targets = revealables.clone();
    observe::observe_band(REVEAL_BAND, &revealables, move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let el = entry.target();
        let Some(index) = targets.iter().position(|t| *t == el) else {
            return;
        };
        // Reveal exactly once, then stop watching the element.
        if tracker.reveal(index) {
            dom::set_class(&el, REVEALED_CLASS, true);
            observer.unobserve(&el);
        }
    });
}
