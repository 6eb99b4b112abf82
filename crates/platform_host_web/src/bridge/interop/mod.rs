//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

use platform_host::{MountTarget, ServiceWorkerConfig, ServiceWorkerStatus};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn link_stylesheet(href: &str) -> Result<(), String> {
    imp::link_stylesheet(href)
}

pub fn find_element(id: &str) -> Option<MountTarget> {
    imp::find_element(id)
}

pub async fn register_service_worker(
    config: &ServiceWorkerConfig,
) -> Result<ServiceWorkerStatus, String> {
    imp::register_service_worker(config).await
}

pub async fn unregister_service_worker() -> Result<bool, String> {
    imp::unregister_service_worker().await
}
