use crate::constants::{
    ACTIVE_CLASS, NOTE_FOR_ATTR, NOTE_KEY_ATTR, NOTE_SELECTOR, TOC_LINK_SELECTOR,
    WAYPOINT_SELECTOR,
};
use crate::core::{anchor_id, NoteController, NOTE_BAND};
use crate::dom;
use crate::observe;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A right-rail note panel and the key that selects it.
struct NotePanel {
    key: String,
    el: web::Element,
}

fn collect_panels(document: &web::Document) -> Vec<NotePanel> {
    dom::query_all(document, NOTE_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let key = el.get_attribute(NOTE_FOR_ATTR).filter(|k| !k.is_empty())?;
            Some(NotePanel { key, el })
        })
        .collect()
}

/// Sections the notes follow: the targets of the TOC links, in link order.
fn linked_sections(document: &web::Document) -> Vec<web::Element> {
    dom::query_all(document, TOC_LINK_SELECTOR)
        .into_iter()
        .filter_map(|link| {
            let href = link.get_attribute("href")?;
            let id = anchor_id(&href)?;
            document.get_element_by_id(id)
        })
        .collect()
}

/// Show exactly the panels whose key matches `active`.
fn apply_note(panels: &[NotePanel], active: Option<&str>) {
    for panel in panels {
        dom::set_class(&panel.el, ACTIVE_CLASS, active == Some(panel.key.as_str()));
    }
}

pub fn wire_notes(document: &web::Document) {
    let panels = collect_panels(document);
    if panels.is_empty() {
        log::info!("[notes] no note panels on this page");
        return;
    }
    let sections = linked_sections(document);
    let waypoints = dom::query_all(document, WAYPOINT_SELECTOR);
    log::info!(
        "[notes] {} panel(s), {} waypoint(s), {} linked section(s)",
        panels.len(),
        waypoints.len(),
        sections.len()
    );

    let keys = panels.iter().map(|p| p.key.clone()).collect();
    let controller = Rc::new(RefCell::new(NoteController::new(keys)));
    let panels = Rc::new(panels);

    // Waypoints override sections and hold the lock while the scroll settles.
    {
        let controller = controller.clone();
        let panels = panels.clone();
        observe::observe_band(NOTE_BAND, &waypoints, move |entry, _| {
            if !entry.is_intersecting() {
                return;
            }
            let Some(key) = entry.target().get_attribute(NOTE_KEY_ATTR) else {
                return;
            };
            if controller
                .borrow_mut()
                .waypoint_seen(&key, Instant::now())
                .is_some()
            {
                apply_note(&panels, controller.borrow().active_key());
            }
        });
    }

    // Sections select the panel named by their id, unless a waypoint lock is live.
    {
        let controller = controller.clone();
        let panels = panels.clone();
        observe::observe_band(NOTE_BAND, &sections, move |entry, _| {
            if !entry.is_intersecting() {
                return;
            }
            let id = entry.target().id();
            if controller
                .borrow_mut()
                .section_seen(&id, Instant::now())
                .is_some()
            {
                apply_note(&panels, controller.borrow().active_key());
            }
        });
    }

    // Before any scrolling: the first waypoint's note, else the first linked
    // section's.
    let first_waypoint_key = waypoints
        .first()
        .and_then(|w| w.get_attribute(NOTE_KEY_ATTR))
        .filter(|k| !k.is_empty());
    let first_section_id = sections.first().map(|s| s.id()).filter(|id| !id.is_empty());
    if controller
        .borrow_mut()
        .initial(first_waypoint_key.as_deref(), first_section_id.as_deref())
        .is_some()
    {
        apply_note(&panels, controller.borrow().active_key());
    }
}
