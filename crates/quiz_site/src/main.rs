//! Binary entrypoint for the browser-hosted quiz.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    quiz_site::start();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `quiz_site_app` for wasm32 with the `csr` feature and serve it with `index.html`."
    );
}
