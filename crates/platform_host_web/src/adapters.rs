use std::rc::Rc;

use platform_host::{
    HostDocument, HostServices, MountTarget, NoopHostDocument, NoopServiceWorkerRegistrar,
    ServiceWorkerConfig, ServiceWorkerFuture, ServiceWorkerRegistrar, ServiceWorkerStatus,
};

pub use platform_host::HostStrategy;

use crate::{WebHostDocument, WebServiceWorkerRegistrar};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete document backend behind [`HostDocument`].
#[derive(Debug, Clone, Copy)]
pub enum HostDocumentAdapter {
    /// Browser `window.document`.
    Browser(WebHostDocument),
    /// No-op fallback for stubbed hosts.
    Stub(NoopHostDocument),
}

impl HostDocumentAdapter {
    /// Host strategy this adapter serves.
    pub const fn strategy(&self) -> HostStrategy {
        match self {
            Self::Browser(_) => HostStrategy::Browser,
            Self::Stub(_) => HostStrategy::Stub,
        }
    }
}

impl HostDocument for HostDocumentAdapter {
    fn apply_stylesheet(&self, href: &str) -> Result<(), String> {
        match self {
            Self::Browser(document) => document.apply_stylesheet(href),
            Self::Stub(document) => document.apply_stylesheet(href),
        }
    }

    fn find_mount_target(&self, id: &str) -> Option<MountTarget> {
        match self {
            Self::Browser(document) => document.find_mount_target(id),
            Self::Stub(document) => document.find_mount_target(id),
        }
    }
}

/// Adapter enum that erases the concrete registrar behind [`ServiceWorkerRegistrar`].
#[derive(Debug, Clone, Copy)]
pub enum ServiceWorkerRegistrarAdapter {
    /// Browser `navigator.serviceWorker`.
    Browser(WebServiceWorkerRegistrar),
    /// No-op fallback for stubbed hosts.
    Stub(NoopServiceWorkerRegistrar),
}

impl ServiceWorkerRegistrarAdapter {
    /// Host strategy this adapter serves.
    pub const fn strategy(&self) -> HostStrategy {
        match self {
            Self::Browser(_) => HostStrategy::Browser,
            Self::Stub(_) => HostStrategy::Stub,
        }
    }
}

impl ServiceWorkerRegistrar for ServiceWorkerRegistrarAdapter {
    fn register<'a>(
        &'a self,
        config: &'a ServiceWorkerConfig,
    ) -> ServiceWorkerFuture<'a, Result<ServiceWorkerStatus, String>> {
        match self {
            Self::Browser(registrar) => registrar.register(config),
            Self::Stub(registrar) => registrar.register(config),
        }
    }

    fn unregister<'a>(&'a self) -> ServiceWorkerFuture<'a, Result<bool, String>> {
        match self {
            Self::Browser(registrar) => registrar.unregister(),
            Self::Stub(registrar) => registrar.unregister(),
        }
    }
}

/// Builds the document adapter for the compile-time selected host strategy.
pub const fn host_document() -> HostDocumentAdapter {
    #[cfg(feature = "host-stub")]
    {
        HostDocumentAdapter::Stub(NoopHostDocument)
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostDocumentAdapter::Browser(WebHostDocument)
    }
}

/// Builds the registrar adapter for the compile-time selected host strategy.
pub const fn service_worker_registrar() -> ServiceWorkerRegistrarAdapter {
    #[cfg(feature = "host-stub")]
    {
        ServiceWorkerRegistrarAdapter::Stub(NoopServiceWorkerRegistrar)
    }

    #[cfg(not(feature = "host-stub"))]
    {
        ServiceWorkerRegistrarAdapter::Browser(WebServiceWorkerRegistrar)
    }
}

/// Builds the host service bundle for the compile-time selected host strategy.
pub fn build_host_services() -> HostServices {
    HostServices {
        document: Rc::new(host_document()),
        service_worker: Rc::new(service_worker_registrar()),
        host_strategy: selected_host_strategy(),
    }
}
