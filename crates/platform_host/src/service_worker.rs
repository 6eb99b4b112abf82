//! Service-worker registration contracts and lightweight test adapters.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`ServiceWorkerRegistrar`] async methods.
pub type ServiceWorkerFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Default script path served next to the application bundle.
pub const DEFAULT_SERVICE_WORKER_URL: &str = "/service-worker.js";
/// Default registration scope.
pub const DEFAULT_SERVICE_WORKER_SCOPE: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Registration parameters for the offline-caching worker.
pub struct ServiceWorkerConfig {
    /// Same-origin path of the worker script.
    pub script_url: String,
    /// Same-origin scope path controlled by the worker.
    pub scope: String,
    /// When `false`, registration is skipped and reported as disabled.
    pub enabled: bool,
}

impl Default for ServiceWorkerConfig {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_SERVICE_WORKER_URL.to_string(),
            scope: DEFAULT_SERVICE_WORKER_SCOPE.to_string(),
            enabled: true,
        }
    }
}

impl ServiceWorkerConfig {
    /// Checks that script and scope are same-origin absolute paths.
    ///
    /// Workers served from another origin cannot be registered by the page, so such
    /// configurations are rejected before reaching the host.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending field.
    pub fn validate(&self) -> Result<(), String> {
        validate_same_origin_path("script_url", &self.script_url)?;
        validate_same_origin_path("scope", &self.scope)?;
        if !self.script_url.ends_with(".js") {
            return Err(format!(
                "service worker script_url `{}` must point at a .js file",
                self.script_url
            ));
        }
        Ok(())
    }
}

fn validate_same_origin_path(field: &str, raw: &str) -> Result<(), String> {
    if !raw.starts_with('/') || raw.starts_with("//") || raw.contains("://") {
        return Err(format!(
            "service worker {field} `{raw}` must be a same-origin path starting with `/`"
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
/// Outcome of one registration attempt.
pub enum ServiceWorkerStatus {
    /// The host accepted the worker for `scope`.
    Registered {
        /// Scope URL reported by the host.
        scope: String,
    },
    /// Registration was turned off by configuration.
    Disabled,
    /// The host has no service-worker support.
    Unsupported,
}

impl ServiceWorkerStatus {
    /// Returns a stable string token for diagnostics.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Registered { .. } => "registered",
            Self::Disabled => "disabled",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Host service registering the offline-caching worker.
pub trait ServiceWorkerRegistrar {
    /// Registers the worker described by `config`.
    fn register<'a>(
        &'a self,
        config: &'a ServiceWorkerConfig,
    ) -> ServiceWorkerFuture<'a, Result<ServiceWorkerStatus, String>>;

    /// Unregisters the worker controlling the current page, returning whether one was removed.
    fn unregister<'a>(&'a self) -> ServiceWorkerFuture<'a, Result<bool, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op registrar for hosts without service-worker support.
pub struct NoopServiceWorkerRegistrar;

impl ServiceWorkerRegistrar for NoopServiceWorkerRegistrar {
    fn register<'a>(
        &'a self,
        config: &'a ServiceWorkerConfig,
    ) -> ServiceWorkerFuture<'a, Result<ServiceWorkerStatus, String>> {
        Box::pin(async move {
            if !config.enabled {
                return Ok(ServiceWorkerStatus::Disabled);
            }
            Ok(ServiceWorkerStatus::Unsupported)
        })
    }

    fn unregister<'a>(&'a self) -> ServiceWorkerFuture<'a, Result<bool, String>> {
        Box::pin(async { Ok(false) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory registrar that accepts valid configurations and counts calls.
pub struct MemoryServiceWorkerRegistrar {
    register_calls: Rc<Cell<usize>>,
    registered: Rc<Cell<bool>>,
}

impl MemoryServiceWorkerRegistrar {
    /// Number of `register` invocations so far.
    pub fn register_calls(&self) -> usize {
        self.register_calls.get()
    }

    /// Whether a worker is currently registered.
    pub fn is_registered(&self) -> bool {
        self.registered.get()
    }
}

impl ServiceWorkerRegistrar for MemoryServiceWorkerRegistrar {
    fn register<'a>(
        &'a self,
        config: &'a ServiceWorkerConfig,
    ) -> ServiceWorkerFuture<'a, Result<ServiceWorkerStatus, String>> {
        Box::pin(async move {
            self.register_calls.set(self.register_calls.get() + 1);
            if !config.enabled {
                return Ok(ServiceWorkerStatus::Disabled);
            }
            config.validate()?;
            self.registered.set(true);
            Ok(ServiceWorkerStatus::Registered {
                scope: config.scope.clone(),
            })
        })
    }

    fn unregister<'a>(&'a self) -> ServiceWorkerFuture<'a, Result<bool, String>> {
        Box::pin(async move { Ok(self.registered.replace(false)) })
    }
}
