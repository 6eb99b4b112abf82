//! Startup sequence: style the document, shape the fixture, mount the quiz, register the worker.

use std::rc::Rc;

use leptos::logging;
use platform_host::{HostServices, HostStrategy, ServiceWorkerStatus};
use quiz_app_contract::{derive_payload, EmbeddedApp, FixtureError, FixtureSource, PayloadShape};
use thiserror::Error;

use crate::BootstrapConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures that prevent the quiz from being mounted.
pub enum BootstrapError {
    /// The fixture could not be read, so there was no payload to hand over.
    #[error("fixture load failed: {0}")]
    Fixture(#[from] FixtureError),
    /// The embedded application rejected the mount.
    #[error("mount failed: {0}")]
    Mount(String),
}

/// Collaborators injected into [`run_bootstrap`].
#[derive(Clone)]
pub struct BootstrapServices {
    /// Document and service-worker host services.
    pub host: HostServices,
    /// Source of the block question fixture.
    pub fixture: Rc<dyn FixtureSource>,
    /// Application mounted with the derived payload.
    pub app: Rc<dyn EmbeddedApp>,
}

impl std::fmt::Debug for BootstrapServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapServices")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of every bootstrap step. No step is retried.
pub struct BootstrapReport {
    /// Host strategy the services were built for.
    pub host_strategy: HostStrategy,
    /// Payload shape used for the mount.
    pub payload_shape: PayloadShape,
    /// Stylesheet link outcome. Failure here never stops later steps.
    pub stylesheet: Result<(), String>,
    /// Fixture read and mount outcome.
    pub mount: Result<(), BootstrapError>,
    /// Worker registration outcome, attempted regardless of `mount`.
    pub service_worker: Result<ServiceWorkerStatus, String>,
}

impl BootstrapReport {
    /// Whether every step succeeded.
    pub fn is_clean(&self) -> bool {
        self.stylesheet.is_ok() && self.mount.is_ok() && self.service_worker.is_ok()
    }

    /// Writes the outcome through the logging facade.
    pub fn log(&self) {
        match &self.mount {
            Ok(()) => logging::log!(
                "quiz bootstrap ({}, {}) mounted",
                self.host_strategy.as_str(),
                self.payload_shape.as_str()
            ),
            Err(err) => logging::error!("quiz bootstrap: {err}"),
        }
        match &self.service_worker {
            Ok(status) => logging::log!("service worker {}", status.token()),
            Err(err) => logging::warn!("service worker registration failed: {err}"),
        }
    }
}

/// Runs the startup sequence once.
///
/// The stylesheet is linked and the quiz mounted synchronously; only worker registration is
/// awaited. A missing mount target is passed to the application as `None`.
pub async fn run_bootstrap(
    services: &BootstrapServices,
    config: &BootstrapConfig,
) -> BootstrapReport {
    let stylesheet = services
        .host
        .document
        .apply_stylesheet(&config.stylesheet_href);
    if let Err(err) = &stylesheet {
        logging::warn!("stylesheet {} not applied: {err}", config.stylesheet_href);
    }

    let mount = mount_app(services, config);

    let service_worker = services
        .host
        .service_worker
        .register(&config.service_worker)
        .await;

    BootstrapReport {
        host_strategy: services.host.host_strategy,
        payload_shape: config.payload_shape,
        stylesheet,
        mount,
        service_worker,
    }
}

fn mount_app(services: &BootstrapServices, config: &BootstrapConfig) -> Result<(), BootstrapError> {
    let fixture = services.fixture.load()?;
    let payload = derive_payload(config.payload_shape, fixture);
    let target = services.host.document.find_mount_target(&config.mount_id);
    services
        .app
        .mount(target, payload)
        .map_err(BootstrapError::Mount)
}
