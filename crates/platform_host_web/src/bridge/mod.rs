//! Browser capability bridge for `platform_host_web` service adapters.

mod interop;

use platform_host::{MountTarget, ServiceWorkerConfig, ServiceWorkerStatus};

pub fn link_stylesheet(href: &str) -> Result<(), String> {
    interop::link_stylesheet(href)
}

pub fn find_element(id: &str) -> Option<MountTarget> {
    interop::find_element(id)
}

pub async fn register_service_worker(
    config: &ServiceWorkerConfig,
) -> Result<ServiceWorkerStatus, String> {
    interop::register_service_worker(config).await
}

pub async fn unregister_service_worker() -> Result<bool, String> {
    interop::unregister_service_worker().await
}
