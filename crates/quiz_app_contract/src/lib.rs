//! Shared contract types between the bootstrap entry point and the embedded quiz application.
//!
//! The bootstrap reads a [`Fixture`], shapes it into an [`InitialPayload`] and hands it to an
//! [`EmbeddedApp`] together with the host [`MountTarget`]. Nothing in this crate touches the DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::RefCell, rc::Rc};

pub use platform_host::MountTarget;

pub mod fixture;
pub mod model;

pub use fixture::{parse_fixture, FixtureError, FixtureSource, JsonFixture, StaticFixture};
pub use model::{derive_payload, BlockQuestion, Fixture, InitialPayload, PayloadShape};

/// Error text reported when the host document has no mount target.
pub const MISSING_MOUNT_TARGET: &str = "mount target is missing";

/// Capability interface of the embedded application.
///
/// The bootstrap calls [`EmbeddedApp::mount`] once per process start. A missing target is passed
/// through as `None`; reporting that failure is the application's responsibility.
pub trait EmbeddedApp {
    /// Attaches the application to `target`, taking ownership of `payload`.
    fn mount(&self, target: Option<MountTarget>, payload: InitialPayload) -> Result<(), String>;
}

/// Static mount function used by [`EmbeddedAppModule`].
pub type EmbeddedMountFn = fn(Option<MountTarget>, InitialPayload) -> Result<(), String>;

#[derive(Debug, Clone, Copy)]
/// App module descriptor wrapping a plain mount function.
pub struct EmbeddedAppModule {
    mount_fn: EmbeddedMountFn,
}

impl EmbeddedAppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: EmbeddedMountFn) -> Self {
        Self { mount_fn }
    }
}

impl EmbeddedApp for EmbeddedAppModule {
    fn mount(&self, target: Option<MountTarget>, payload: InitialPayload) -> Result<(), String> {
        (self.mount_fn)(target, payload)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One mount call captured by [`MemoryEmbeddedApp`].
pub struct RecordedMount {
    /// Id of the target, when one was supplied.
    pub target_id: Option<String>,
    /// Payload handed over.
    pub payload: InitialPayload,
}

#[derive(Debug, Clone, Default)]
/// In-memory embedded app that records every mount call.
///
/// Mirrors the real application's contract by rejecting a missing target.
pub struct MemoryEmbeddedApp {
    mounts: Rc<RefCell<Vec<RecordedMount>>>,
}

impl MemoryEmbeddedApp {
    /// Returns all mount calls in order.
    pub fn mounts(&self) -> Vec<RecordedMount> {
        self.mounts.borrow().clone()
    }
}

impl EmbeddedApp for MemoryEmbeddedApp {
    fn mount(&self, target: Option<MountTarget>, payload: InitialPayload) -> Result<(), String> {
        let target_id = target.as_ref().map(|target| target.id().to_string());
        let missing = target_id.is_none();
        self.mounts.borrow_mut().push(RecordedMount { target_id, payload });
        if missing {
            return Err(MISSING_MOUNT_TARGET.to_string());
        }
        Ok(())
    }
}
