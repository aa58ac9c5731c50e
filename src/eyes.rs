use crate::constants::{EYE_SELECTOR, PUPIL_SELECTOR};
use crate::core::{pupil_offset, pupil_transform, rect_center};
use crate::dom;
use glam::Vec2;
use smallvec::SmallVec;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An eye element paired with the pupil it steers.
struct EyeRig {
    eye: web::Element,
    pupil: web::HtmlElement,
}

type EyeRigs = SmallVec<[EyeRig; 4]>;

fn collect_rigs(document: &web::Document) -> EyeRigs {
    let mut rigs = EyeRigs::new();
    for eye in dom::query_all(document, EYE_SELECTOR) {
        // An eye without a pupil has nothing to steer; skip it.
        let pupil = match eye.query_selector(PUPIL_SELECTOR) {
            Ok(Some(el)) => match el.dyn_into::<web::HtmlElement>() {
                Ok(p) => p,
                Err(_) => continue,
            },
            _ => continue,
        };
        rigs.push(EyeRig { eye, pupil });
    }
    rigs
}

/// Steer one pupil toward `pointer`. The rect is re-read on every call so
/// layout changes keep the gaze honest without any cached geometry.
fn look_at(rig: &EyeRig, pointer: Vec2) {
    let rect = rig.eye.get_bounding_client_rect();
    let center = rect_center(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    );
    let offset = pupil_offset(center, pointer, rect.width() as f32);
    _ = rig
        .pupil
        .style()
        .set_property("transform", &pupil_transform(offset));
}

/// Point every pupil at the viewport center, the resting gaze.
fn center_all(rigs: &EyeRigs) {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    let (vw, vh) = dom::viewport_size(&window, &document);
    let center = Vec2::new(vw / 2.0, vh / 2.0);
    for rig in rigs.iter() {
        look_at(rig, center);
    }
}

fn add_passive_listener(window: &web::Window, event: &str, listener: &js_sys::Function) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        event, listener, &opts,
    );
}

pub fn wire_eyes(document: &web::Document) {
    if dom::prefers_reduced_motion() {
        log::info!("[eyes] reduced motion requested; leaving pupils alone");
        return;
    }
    let rigs = collect_rigs(document);
    if rigs.is_empty() {
        log::info!("[eyes] no eye elements on this page");
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    log::info!("[eyes] steering {} eye(s)", rigs.len());

    let rigs = Rc::new(rigs);

    {
        let rigs = rigs.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            for rig in rigs.iter() {
                look_at(rig, pointer);
            }
        }) as Box<dyn FnMut(web::MouseEvent)>);
        add_passive_listener(&window, "mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let rigs = rigs.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            // First touch only.
            if let Some(touch) = ev.touches().get(0) {
                let pointer = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                for rig in rigs.iter() {
                    look_at(rig, pointer);
                }
            }
        }) as Box<dyn FnMut(web::TouchEvent)>);
        add_passive_listener(&window, "touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Rest the gaze now, and again whenever the viewport changes shape.
    center_all(&rigs);
    {
        let rigs = rigs.clone();
        let closure = Closure::wrap(Box::new(move || center_all(&rigs)) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
