use js_sys::Promise;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    RegistrationOptions, ServiceWorkerContainer, ServiceWorkerRegistration, ServiceWorkerState,
};

use super::*;

const UPDATE_AVAILABLE_NOTICE: &str = "New content is available; please refresh.";
const CACHED_OFFLINE_NOTICE: &str = "Content is cached for offline use.";

fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .ok_or_else(|| "window unavailable".to_string())?
        .document()
        .ok_or_else(|| "document unavailable".to_string())
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

pub fn link_stylesheet(href: &str) -> Result<(), String> {
    if href.trim().is_empty() {
        return Err("stylesheet href is empty".to_string());
    }
    if href.contains('"') {
        return Err(format!("stylesheet href `{href}` contains a quote"));
    }
    let document = document()?;
    let selector = format!(r#"link[rel="stylesheet"][href="{href}"]"#);
    if document
        .query_selector(&selector)
        .map_err(js_error_to_string)?
        .is_some()
    {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| "document has no <head>".to_string())?;
    let link = document
        .create_element("link")
        .map_err(|err| format!("failed to create stylesheet link: {}", js_error_to_string(err)))?;
    link.set_attribute("rel", "stylesheet")
        .and_then(|()| link.set_attribute("href", href))
        .map_err(js_error_to_string)?;
    head.append_child(&link)
        .map(|_| ())
        .map_err(|err| format!("failed to attach stylesheet link: {}", js_error_to_string(err)))
}

pub fn find_element(id: &str) -> Option<MountTarget> {
    let element = document().ok()?.get_element_by_id(id)?;
    Some(MountTarget::new(id, element))
}

fn service_worker_container() -> Option<ServiceWorkerContainer> {
    let navigator = web_sys::window()?.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    supported.then(|| navigator.service_worker())
}

fn watch_for_updates(container: ServiceWorkerContainer, registration: &ServiceWorkerRegistration) {
    let watched = registration.clone();
    let on_update_found = Closure::<dyn FnMut()>::new(move || {
        let Some(installing) = watched.installing() else {
            return;
        };
        let worker = installing.clone();
        let container = container.clone();
        let on_state_change = Closure::<dyn FnMut()>::new(move || {
            if worker.state() != ServiceWorkerState::Installed {
                return;
            }
            // A controller means an older worker still serves the page.
            let notice = if container.controller().is_some() {
                UPDATE_AVAILABLE_NOTICE
            } else {
                CACHED_OFFLINE_NOTICE
            };
            web_sys::console::log_1(&JsValue::from_str(notice));
        });
        installing.set_onstatechange(Some(on_state_change.as_ref().unchecked_ref()));
        on_state_change.forget();
    });
    registration.set_onupdatefound(Some(on_update_found.as_ref().unchecked_ref()));
    on_update_found.forget();
}

pub async fn register_service_worker(
    config: &ServiceWorkerConfig,
) -> Result<ServiceWorkerStatus, String> {
    if !config.enabled {
        return Ok(ServiceWorkerStatus::Disabled);
    }
    config.validate()?;
    let Some(container) = service_worker_container() else {
        return Ok(ServiceWorkerStatus::Unsupported);
    };

    let options = RegistrationOptions::new();
    options.set_scope(&config.scope);
    let value = await_promise(container.register_with_options(&config.script_url, &options))
        .await
        .map_err(|err| format!("service worker registration failed: {err}"))?;
    let registration = value
        .dyn_into::<ServiceWorkerRegistration>()
        .map_err(|_| "service worker registration resolved to an unexpected value".to_string())?;
    watch_for_updates(container, &registration);
    Ok(ServiceWorkerStatus::Registered {
        scope: registration.scope(),
    })
}

pub async fn unregister_service_worker() -> Result<bool, String> {
    let Some(container) = service_worker_container() else {
        return Ok(false);
    };
    let value = await_promise(container.get_registration()).await?;
    if value.is_null() || value.is_undefined() {
        return Ok(false);
    }
    let registration = value
        .dyn_into::<ServiceWorkerRegistration>()
        .map_err(|_| "service worker lookup resolved to an unexpected value".to_string())?;
    let promise = registration.unregister().map_err(js_error_to_string)?;
    let removed = await_promise(promise).await?;
    Ok(removed.as_bool().unwrap_or(false))
}
