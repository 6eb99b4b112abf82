//! Host document contracts: stylesheet application and mount-target lookup.

use std::{
    any::Any,
    cell::RefCell,
    collections::BTreeSet,
    fmt,
    rc::Rc,
};

/// Anchor element in the host document that an embedded application mounts onto.
///
/// The node handle is type-erased so the contract stays host-agnostic: browser adapters store a
/// `web_sys::Element`, test adapters store a unit value.
#[derive(Clone)]
pub struct MountTarget {
    id: String,
    node: Rc<dyn Any>,
}

impl MountTarget {
    /// Wraps a host node found under `id`.
    pub fn new<N: Any>(id: impl Into<String>, node: N) -> Self {
        Self {
            id: id.into(),
            node: Rc::new(node),
        }
    }

    /// Creates a target with no backing host node.
    pub fn detached(id: impl Into<String>) -> Self {
        Self::new(id, ())
    }

    /// Returns the identifier the target was located by.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the host node when it has the requested concrete type.
    pub fn node<N: Any>(&self) -> Option<&N> {
        self.node.downcast_ref::<N>()
    }

    /// Returns whether the target carries no host node.
    pub fn is_detached(&self) -> bool {
        self.node.is::<()>()
    }
}

impl fmt::Debug for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountTarget")
            .field("id", &self.id)
            .field("detached", &self.is_detached())
            .finish()
    }
}

/// Host document service used by the bootstrap sequence.
pub trait HostDocument {
    /// Links a stylesheet into the document.
    ///
    /// Applying the same `href` twice leaves a single link in place.
    fn apply_stylesheet(&self, href: &str) -> Result<(), String>;

    /// Looks up the mount target registered under `id`.
    fn find_mount_target(&self, id: &str) -> Option<MountTarget>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op document for hosts without a DOM. Stylesheets are accepted and ignored; no mount
/// target is ever found.
pub struct NoopHostDocument;

impl HostDocument for NoopHostDocument {
    fn apply_stylesheet(&self, _href: &str) -> Result<(), String> {
        Ok(())
    }

    fn find_mount_target(&self, _id: &str) -> Option<MountTarget> {
        None
    }
}

#[derive(Debug, Default)]
struct MemoryDocumentState {
    element_ids: BTreeSet<String>,
    stylesheets: Vec<String>,
    lookups: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory document that records stylesheet links and lookups.
pub struct MemoryHostDocument {
    inner: Rc<RefCell<MemoryDocumentState>>,
}

impl MemoryHostDocument {
    /// Creates a document containing elements with the given ids.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let document = Self::default();
        document
            .inner
            .borrow_mut()
            .element_ids
            .extend(ids.into_iter().map(Into::into));
        document
    }

    /// Returns the linked stylesheet hrefs in insertion order.
    pub fn stylesheets(&self) -> Vec<String> {
        self.inner.borrow().stylesheets.clone()
    }

    /// Returns every id passed to [`HostDocument::find_mount_target`].
    pub fn lookups(&self) -> Vec<String> {
        self.inner.borrow().lookups.clone()
    }
}

impl HostDocument for MemoryHostDocument {
    fn apply_stylesheet(&self, href: &str) -> Result<(), String> {
        if href.trim().is_empty() {
            return Err("stylesheet href is empty".to_string());
        }
        let mut state = self.inner.borrow_mut();
        if !state.stylesheets.iter().any(|linked| linked == href) {
            state.stylesheets.push(href.to_string());
        }
        Ok(())
    }

    fn find_mount_target(&self, id: &str) -> Option<MountTarget> {
        let mut state = self.inner.borrow_mut();
        state.lookups.push(id.to_string());
        state
            .element_ids
            .contains(id)
            .then(|| MountTarget::detached(id))
    }
}
