//! Browser document adapter backed by `window.document`.

use platform_host::{HostDocument, MountTarget};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser document adapter. Mount targets wrap the located `web_sys::Element`.
pub struct WebHostDocument;

impl HostDocument for WebHostDocument {
    fn apply_stylesheet(&self, href: &str) -> Result<(), String> {
        bridge::link_stylesheet(href)
    }

    fn find_mount_target(&self, id: &str) -> Option<MountTarget> {
        bridge::find_element(id)
    }
}
