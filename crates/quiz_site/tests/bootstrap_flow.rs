use std::rc::Rc;

use futures::executor::block_on;
use platform_host::{
    HostServices, MemoryHostDocument, MemoryServiceWorkerRegistrar, ServiceWorkerStatus,
};
use pretty_assertions::assert_eq;
use quiz_app_contract::{
    FixtureSource, InitialPayload, MemoryEmbeddedApp, PayloadShape, MISSING_MOUNT_TARGET,
};
use quiz_site::{
    default_services, run_bootstrap, service_worker_enabled_by_default, BootstrapConfig,
    BootstrapError, BundledFixture, BLOCK_QUESTION_COUNT,
};

#[test]
fn bundled_fixture_mounts_through_memory_host() {
    let document = MemoryHostDocument::with_elements(["root"]);
    let registrar = MemoryServiceWorkerRegistrar::default();
    let app = MemoryEmbeddedApp::default();
    let services = quiz_site::BootstrapServices {
        host: HostServices::memory(&document, &registrar),
        fixture: Rc::new(BundledFixture),
        app: Rc::new(app.clone()),
    };
    let config = BootstrapConfig::default()
        .with_payload_shape(PayloadShape::HeadTail)
        .with_service_worker_enabled(true);

    let report = block_on(run_bootstrap(&services, &config));
    assert!(report.is_clean(), "{report:?}");

    let mounts = app.mounts();
    assert_eq!(mounts.len(), 1);
    let InitialPayload::HeadTail {
        question,
        next_questions,
    } = &mounts[0].payload
    else {
        panic!("expected head/tail payload");
    };
    let bundled = BundledFixture.load().expect("bundled fixture");
    assert_eq!(question.as_ref(), bundled.as_slice().first());
    assert_eq!(next_questions.len(), BLOCK_QUESTION_COUNT - 1);
    assert_eq!(next_questions.as_slice(), &bundled.as_slice()[1..]);
    assert!(registrar.is_registered());
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn default_services_outside_browser_report_missing_target() {
    let report = block_on(run_bootstrap(&default_services(), &BootstrapConfig::default()));

    assert_eq!(
        report.mount,
        Err(BootstrapError::Mount(MISSING_MOUNT_TARGET.to_string()))
    );
    let expected_worker = if service_worker_enabled_by_default() {
        ServiceWorkerStatus::Unsupported
    } else {
        ServiceWorkerStatus::Disabled
    };
    assert_eq!(report.service_worker, Ok(expected_worker));
}
