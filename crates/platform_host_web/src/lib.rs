//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the document (stylesheet links
//! and mount-target lookup) and the offline-caching service worker.
//!
//! Bridge bindings live under `bridge/`, with `bridge::interop` routing to the wasm transport or
//! a non-wasm fallback shim.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for bootstrap wiring.
pub mod adapters;
mod bridge;
pub mod document;
pub mod service_worker;

pub use adapters::{
    build_host_services, host_document, host_strategy_name, selected_host_strategy,
    service_worker_registrar, HostDocumentAdapter, ServiceWorkerRegistrarAdapter,
};
pub use document::WebHostDocument;
pub use service_worker::WebServiceWorkerRegistrar;
