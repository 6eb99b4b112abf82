//! Typed host-domain contracts shared by the bootstrap and its browser adapters.
//!
//! This crate is the API-first boundary for host services. It exposes the mount-target and
//! document contract, the service-worker registration contract, and in-memory/no-op adapters,
//! while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod host;
pub mod service_worker;

pub use document::{HostDocument, MemoryHostDocument, MountTarget, NoopHostDocument};
pub use host::{HostServices, HostStrategy};
pub use service_worker::{
    MemoryServiceWorkerRegistrar, NoopServiceWorkerRegistrar, ServiceWorkerConfig,
    ServiceWorkerFuture, ServiceWorkerRegistrar, ServiceWorkerStatus,
    DEFAULT_SERVICE_WORKER_SCOPE, DEFAULT_SERVICE_WORKER_URL,
};
