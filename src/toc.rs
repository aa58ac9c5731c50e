use crate::constants::{ACTIVE_CLASS, SECTION_SELECTOR, TOC_LINK_SELECTOR};
use crate::core::{anchor_id, SECTION_BAND};
use crate::dom;
use crate::observe;
use fnv::FnvHashMap;
use web_sys as web;

/// Wire the table-of-contents highlighter: whenever a section crosses the
/// mid-viewport band, the link pointing at it becomes the single active one.
pub fn wire_toc(document: &web::Document) {
    let links = dom::query_all(document, TOC_LINK_SELECTOR);
    let sections = dom::query_all(document, SECTION_SELECTOR);
    if links.is_empty() || sections.is_empty() {
        log::info!("[toc] nothing to highlight");
        return;
    }

    // href="#id" -> link element, so the observer callback never re-queries the DOM.
    let mut by_id: FnvHashMap<String, web::Element> = FnvHashMap::default();
    for link in &links {
        if let Some(id) = link.get_attribute("href").as_deref().and_then(anchor_id) {
            by_id.insert(id.to_owned(), link.clone());
        }
    }
    log::info!(
        "[toc] {} link(s) over {} section(s)",
        by_id.len(),
        sections.len()
    );

    observe::observe_band(SECTION_BAND, &sections, move |entry, _| {
        if !entry.is_intersecting() {
            return;
        }
        let id = entry.target().id();
        // Clear first: a section without a link still dims the rest.
        for link in &links {
            dom::set_class(link, ACTIVE_CLASS, false);
        }
        if let Some(link) = by_id.get(&id) {
            dom::set_class(link, ACTIVE_CLASS, true);
        }
    });
}
