//! Shared host-bundle models for bootstrap composition.

use std::rc::Rc;

use crate::{
    HostDocument, MemoryHostDocument, MemoryServiceWorkerRegistrar, NoopHostDocument,
    NoopServiceWorkerRegistrar, ServiceWorkerRegistrar,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed document and service-worker adapters.
    Browser,
    /// Placeholder adapters for hosts without a DOM.
    Stub,
    /// In-memory adapters used by tests.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
            Self::Memory => "memory",
        }
    }
}

/// Host service bundle injected into the bootstrap sequence.
///
/// Environment-specific adapter selection happens before this bundle is built, so the bootstrap
/// never reaches into ambient globals.
#[derive(Clone)]
pub struct HostServices {
    /// Document used for stylesheet linking and mount-target lookup.
    pub document: Rc<dyn HostDocument>,
    /// Offline-caching worker registrar.
    pub service_worker: Rc<dyn ServiceWorkerRegistrar>,
    /// Strategy the bundle was built for.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op adapters.
    pub fn stub() -> Self {
        Self {
            document: Rc::new(NoopHostDocument),
            service_worker: Rc::new(NoopServiceWorkerRegistrar),
            host_strategy: HostStrategy::Stub,
        }
    }

    /// Bundle backed by the given in-memory adapters. The adapters share state with the
    /// caller's handles, so tests can inspect them afterwards.
    pub fn memory(
        document: &MemoryHostDocument,
        service_worker: &MemoryServiceWorkerRegistrar,
    ) -> Self {
        Self {
            document: Rc::new(document.clone()),
            service_worker: Rc::new(service_worker.clone()),
            host_strategy: HostStrategy::Memory,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
