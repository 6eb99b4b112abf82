//! Embedded quiz application mounted by the bootstrap.

mod progress;

use leptos::*;
use wasm_bindgen::JsCast;
use quiz_app_contract::{EmbeddedAppModule, InitialPayload, MountTarget, MISSING_MOUNT_TARGET};

pub use progress::{question_label, QuizProgress};

/// Quiz module descriptor handed to the bootstrap.
pub const QUIZ_APP: EmbeddedAppModule = EmbeddedAppModule::new(mount_quiz);

#[component]
/// Quiz contents: the current question, a progress line and a control to move on.
pub fn QuizMain(
    /// Initial payload shaped by the bootstrap.
    payload: InitialPayload,
) -> impl IntoView {
    let total = payload.question_count();
    let progress = create_rw_signal(QuizProgress::from_payload(payload));

    view! {
        <main class="quiz-main">
            <header class="quiz-header">
                <h1>"Block questions"</h1>
                <p class="quiz-progress">
                    {move || progress.with(|p| format!("{} of {}", p.position(), total))}
                </p>
            </header>
            <Show
                when=move || progress.with(|p| !p.is_finished())
                fallback=|| view! { <p class="quiz-done">"All questions answered."</p> }
            >
                <section class="quiz-question">
                    <p class="quiz-question-text">
                        {move || progress.with(|p| p.current().map(question_label).unwrap_or_default())}
                    </p>
                    <button
                        type="button"
                        class="quiz-next"
                        on:click=move |_| progress.update(QuizProgress::advance)
                    >
                        {move || if progress.with(|p| p.remaining() == 0) { "Finish" } else { "Next" }}
                    </button>
                </section>
            </Show>
        </main>
    }
}

/// Mounts [`QuizMain`] onto `target`.
///
/// # Errors
///
/// Returns an error when the target is missing, when its node is not an HTML element (an SVG
/// root, for instance), or when the build cannot render into the DOM (non-`csr` or non-`wasm32`).
pub fn mount_quiz(target: Option<MountTarget>, payload: InitialPayload) -> Result<(), String> {
    let target = target.ok_or_else(|| MISSING_MOUNT_TARGET.to_string())?;
    let element = target
        .node::<web_sys::Element>()
        .and_then(|node| node.dyn_ref::<web_sys::HtmlElement>())
        .cloned()
        .ok_or_else(|| format!("mount target `{}` is not an HTML element", target.id()))?;
    render_into(element, payload)?;
    logging::log!("quiz mounted on #{}", target.id());
    Ok(())
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn render_into(element: web_sys::HtmlElement, payload: InitialPayload) -> Result<(), String> {
    mount_to(element, move || view! { <QuizMain payload=payload /> });
    Ok(())
}

#[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
fn render_into(_element: web_sys::HtmlElement, _payload: InitialPayload) -> Result<(), String> {
    Err("DOM rendering requires a csr build for wasm32".to_string())
}

#[cfg(test)]
mod tests {
    use quiz_app_contract::{derive_payload, EmbeddedApp, Fixture, PayloadShape};

    use super::*;

    #[test]
    fn missing_target_is_reported_by_the_app() {
        let payload = derive_payload(PayloadShape::FullList, Fixture::default());
        assert_eq!(
            QUIZ_APP.mount(None, payload),
            Err(MISSING_MOUNT_TARGET.to_string())
        );
    }

    #[test]
    fn detached_target_is_not_an_html_element() {
        let payload = derive_payload(PayloadShape::HeadTail, Fixture::default());
        assert_eq!(
            mount_quiz(Some(MountTarget::detached("root")), payload),
            Err("mount target `root` is not an HTML element".to_string())
        );
    }

    #[test]
    fn located_target_of_foreign_node_type_is_not_reported_missing() {
        let payload = derive_payload(PayloadShape::FullList, Fixture::default());
        assert_eq!(
            QUIZ_APP.mount(Some(MountTarget::new("root", "svg".to_string())), payload),
            Err("mount target `root` is not an HTML element".to_string())
        );
    }
}
