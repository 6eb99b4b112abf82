//! Browser entry point for the quiz: wires host services, the bundled fixture and the quiz app
//! into one bootstrap run.

mod bootstrap;
mod config;
mod fixture;

use std::rc::Rc;

pub use bootstrap::{run_bootstrap, BootstrapError, BootstrapReport, BootstrapServices};
pub use config::{
    selected_payload_shape, service_worker_enabled_by_default, BootstrapConfig,
    MOUNT_ELEMENT_ID, STYLESHEET_HREF,
};
pub use fixture::{BundledFixture, BLOCK_QUESTIONS_JSON, BLOCK_QUESTION_COUNT};

/// Services for the compile-time selected host: browser (or stub) adapters, the bundled fixture
/// and the quiz app.
pub fn default_services() -> BootstrapServices {
    BootstrapServices {
        host: platform_host_web::build_host_services(),
        fixture: Rc::new(BundledFixture),
        app: Rc::new(quiz_app::QUIZ_APP),
    }
}

/// Runs the bootstrap once on the browser task queue and logs its report.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn start() {
    console_error_panic_hook::set_once();
    let services = default_services();
    let config = BootstrapConfig::default();
    wasm_bindgen_futures::spawn_local(async move {
        run_bootstrap(&services, &config).await.log();
    });
}
