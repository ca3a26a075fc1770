use crate::shared::form_session::SessionMessage;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dismissible result banner for a finished add/update/delete submission.
///
/// The same banner renders success and failure; only the modifier class
/// changes with the reported status.
#[component]
pub fn StatusBanner(
    #[prop(into)]
    message: Signal<SessionMessage>,

    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().open>
            <div class=move || {
                if message.get().status {
                    "alert alert--success"
                } else {
                    "alert alert--error"
                }
            }>
                <span class="alert__text">{move || message.get().text}</span>
                <button
                    class="button button--icon alert__close"
                    on:click=move |_| on_dismiss.run(())
                    title="Dismiss"
                >
                    {icon("x")}
                </button>
            </div>
        </Show>
    }
}
