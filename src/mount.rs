//! Startup: locate the host element and mount the widget into it.
//!
//! ERROR HANDLING
//! ==============
//! A missing host is fatal for the page load. `start` reports the
//! `InitError` once through the logger and attaches nothing.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

#[cfg(any(test, feature = "csr"))]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "csr")]
use crate::config::WidgetConfig;

/// Why the widget could not start.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("no browser document available")]
    NoDocument,
    #[error("required element #{0} not found")]
    MissingHost(String),
    #[error("chat widget is already mounted")]
    AlreadyMounted,
}

#[cfg(feature = "csr")]
static MOUNTED: AtomicBool = AtomicBool::new(false);

/// Find the host element via `lookup`.
///
/// # Errors
///
/// `InitError::MissingHost` when `lookup` finds nothing for `id`.
pub fn resolve_host<T>(id: &str, lookup: impl FnOnce(&str) -> Option<T>) -> Result<T, InitError> {
    lookup(id).ok_or_else(|| InitError::MissingHost(id.to_owned()))
}

/// Claim the one mount allowed per page.
#[cfg(any(test, feature = "csr"))]
fn claim_mount(flag: &AtomicBool) -> Result<(), InitError> {
    if flag.swap(true, Ordering::SeqCst) {
        return Err(InitError::AlreadyMounted);
    }
    Ok(())
}

/// Mount the widget into the element named by `config.host_element_id`.
///
/// # Errors
///
/// Returns an `InitError` when there is no document, the host element is
/// missing, or the widget was already mounted.
#[cfg(feature = "csr")]
pub fn mount(config: WidgetConfig) -> Result<(), InitError> {
    use leptos::prelude::*;

    use crate::app::App;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(InitError::NoDocument)?;
    let host = resolve_host(&config.host_element_id, |id| html_element_by_id(&document, id))?;
    claim_mount(&MOUNTED)?;

    log::info!("chat widget mounting into #{}", config.host_element_id);
    leptos::mount::mount_to(host, move || view! { <App config=config/> }).forget();
    Ok(())
}

#[cfg(feature = "csr")]
fn html_element_by_id(document: &web_sys::Document, id: &str) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    match document.get_element_by_id(id)?.dyn_into::<web_sys::HtmlElement>() {
        Ok(element) => Some(element),
        Err(_) => None,
    }
}

/// WASM entry point: install logging and mount with the default config.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("chat widget logger not installed: {err}").into());
    }

    if let Err(err) = mount(WidgetConfig::default()) {
        log::error!("chat widget not started: {err}");
    }
}
