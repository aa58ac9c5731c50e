#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod eyes;
mod notes;
mod observe;
mod reveal;
mod toc;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-motion starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::on_document_ready(&document, {
        let document = document.clone();
        move || {
            eyes::wire_eyes(&document);
            toc::wire_toc(&document);
            notes::wire_notes(&document);
            reveal::wire_reveal(&document);
        }
    });
    Ok(())
}
