use crate::core::Band;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// Every band fires on the first intersecting pixel.
const BAND_THRESHOLD: f64 = 0.0;

/// Builds an intersection observer restricted to `band` and starts it on
/// `targets`. `on_entry` runs once per reported entry; the observer handle is
/// passed along so handlers can stop watching individual targets. Observers
/// live for the page lifetime.
pub fn observe_band(
    band: Band,
    targets: &[web::Element],
    mut on_entry: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) {
    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(&band.root_margin());
    init.set_threshold(&JsValue::from(BAND_THRESHOLD));

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::error!("[observe] intersection observer unavailable: {e:?}");
            return;
        }
    };
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
}
