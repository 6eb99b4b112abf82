//! Build-time bootstrap configuration.

use platform_host::ServiceWorkerConfig;
use quiz_app_contract::PayloadShape;

/// Id of the host element the quiz mounts onto.
pub const MOUNT_ELEMENT_ID: &str = "root";
/// Stylesheet linked before mounting.
pub const STYLESHEET_HREF: &str = "/main.css";

#[cfg(all(feature = "payload-full-list", feature = "payload-head-tail"))]
compile_error!(
    "features `payload-full-list` and `payload-head-tail` are mutually exclusive; enable only one"
);

/// Returns the payload shape selected by cargo features.
///
/// `payload-head-tail` hands the first question and the rest separately; `payload-full-list`, or
/// no payload feature at all, hands over the whole list.
pub const fn selected_payload_shape() -> PayloadShape {
    #[cfg(feature = "payload-head-tail")]
    {
        PayloadShape::HeadTail
    }

    #[cfg(not(feature = "payload-head-tail"))]
    {
        PayloadShape::FullList
    }
}

/// Whether the offline worker is registered by default.
///
/// On for release builds, off while `debug_assertions` are enabled.
pub const fn service_worker_enabled_by_default() -> bool {
    !cfg!(debug_assertions)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Inputs of one bootstrap run.
pub struct BootstrapConfig {
    /// Id of the mount element.
    pub mount_id: String,
    /// Stylesheet href linked into the document.
    pub stylesheet_href: String,
    /// Payload shaping strategy.
    pub payload_shape: PayloadShape,
    /// Offline worker registration parameters.
    pub service_worker: ServiceWorkerConfig,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            mount_id: MOUNT_ELEMENT_ID.to_string(),
            stylesheet_href: STYLESHEET_HREF.to_string(),
            payload_shape: selected_payload_shape(),
            service_worker: ServiceWorkerConfig {
                enabled: service_worker_enabled_by_default(),
                ..ServiceWorkerConfig::default()
            },
        }
    }
}

impl BootstrapConfig {
    /// Returns the config with a different payload shape.
    pub fn with_payload_shape(mut self, payload_shape: PayloadShape) -> Self {
        self.payload_shape = payload_shape;
        self
    }

    /// Returns the config with the offline worker turned on or off.
    pub fn with_service_worker_enabled(mut self, enabled: bool) -> Self {
        self.service_worker.enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_root_and_main_stylesheet() {
        let config = BootstrapConfig::default();
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.stylesheet_href, "/main.css");
        assert_eq!(config.payload_shape, selected_payload_shape());
        assert_eq!(config.service_worker.script_url, "/service-worker.js");
        assert_eq!(
            config.service_worker.enabled,
            service_worker_enabled_by_default()
        );
        config.service_worker.validate().expect("default worker config");
    }

    #[test]
    fn payload_feature_selects_matching_shape() {
        let expected = if cfg!(feature = "payload-head-tail") {
            PayloadShape::HeadTail
        } else {
            PayloadShape::FullList
        };
        assert_eq!(selected_payload_shape(), expected);
    }

    #[test]
    fn bundled_worker_script_falls_back_when_the_network_fails() {
        let script = include_str!("../static/service-worker.js");
        let fetch = script
            .find("fetch(event.request)")
            .expect("network fetch");
        let handled = script[fetch..]
            .find(".catch(")
            .expect("network failure handler");
        let served = script[fetch..]
            .find("return cached || network;")
            .expect("cache-first response");
        assert!(handled < served);
        assert!(ServiceWorkerConfig::default()
            .script_url
            .ends_with("service-worker.js"));
    }

    #[test]
    fn builders_override_single_fields() {
        let config = BootstrapConfig::default()
            .with_payload_shape(PayloadShape::HeadTail)
            .with_service_worker_enabled(true);
        assert_eq!(config.payload_shape, PayloadShape::HeadTail);
        assert!(config.service_worker.enabled);
        assert_eq!(config.mount_id, MOUNT_ELEMENT_ID);
    }
}
