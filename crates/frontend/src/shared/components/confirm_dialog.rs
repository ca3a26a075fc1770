use leptos::prelude::*;
use thaw::*;

/// Small confirmation dialog shown before a create/update/delete is sent.
///
/// Rendered on top of any open form modal; the confirm button is disabled
/// while a submission is in flight.
#[component]
pub fn ConfirmDialog(
    /// Whether the dialog is visible
    #[prop(into)]
    open: Signal<bool>,

    /// Dialog title
    #[prop(into)]
    title: String,

    /// Question shown in the body
    #[prop(into)]
    text: String,

    /// True while the submission is in flight
    #[prop(into)]
    busy: Signal<bool>,

    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let text = StoredValue::new(text);

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay modal-overlay--confirm" on:click=move |_| on_cancel.run(())>
                <div class="modal modal--confirm" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get_value()}</h2>
                    </div>
                    <div class="modal-body">
                        <p>{move || text.get_value()}</p>
                    </div>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_cancel.run(())
                            disabled=Signal::derive(move || busy.get())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=Signal::derive(move || busy.get())
                        >
                            {move || if busy.get() { "Submitting..." } else { "Confirm" }}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
