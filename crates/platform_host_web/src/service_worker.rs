//! Service-worker registrar backed by `navigator.serviceWorker`.

use platform_host::{
    ServiceWorkerConfig, ServiceWorkerFuture, ServiceWorkerRegistrar, ServiceWorkerStatus,
};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser registrar. Reports [`ServiceWorkerStatus::Unsupported`] when the page has no
/// service-worker container, and logs a console notice once a new worker finishes installing.
pub struct WebServiceWorkerRegistrar;

impl ServiceWorkerRegistrar for WebServiceWorkerRegistrar {
    fn register<'a>(
        &'a self,
        config: &'a ServiceWorkerConfig,
    ) -> ServiceWorkerFuture<'a, Result<ServiceWorkerStatus, String>> {
        Box::pin(async move { bridge::register_service_worker(config).await })
    }

    fn unregister<'a>(&'a self) -> ServiceWorkerFuture<'a, Result<bool, String>> {
        Box::pin(async move { bridge::unregister_service_worker().await })
    }
}
