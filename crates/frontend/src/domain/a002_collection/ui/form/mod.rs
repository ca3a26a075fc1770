use contracts::domain::a001_rack::Rack;
use contracts::domain::a002_collection::aggregate::{
    CollectionDto, CollectionField, CollectionFieldErrors,
};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Shared modal form for the add and update flows.
///
/// The component owns no state: the input buffer and error buffer live in the
/// page's form session, and every keystroke is forwarded upward through
/// `on_field_change`. Saving only requests confirmation; the actual submit
/// happens after the confirmation dialog.
#[component]
pub fn CollectionForm(
    /// Dialog title ("Add collection" / "Update collection")
    #[prop(into)]
    title: String,

    /// Current input buffer
    #[prop(into)]
    input: Signal<CollectionDto>,

    /// Current field errors; empty string means valid
    #[prop(into)]
    errors: Signal<CollectionFieldErrors>,

    /// Racks for the rack picker
    #[prop(into)]
    racks: Signal<Vec<Rack>>,

    on_field_change: Callback<(CollectionField, String)>,
    on_save: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_close>
            <div class="form__group">
                <label class="form__label">"Name"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || input.get().name
                    on:input=move |ev| {
                        on_field_change.run((CollectionField::Name, event_target_value(&ev)));
                    }
                />
                <Show when=move || !errors.get().name.is_empty()>
                    <span class="form__error">{move || errors.get().name}</span>
                </Show>
            </div>

            <div class="form__group">
                <label class="form__label">"Rack"</label>
                <select
                    class="form__input"
                    on:change=move |ev| {
                        on_field_change.run((CollectionField::RackId, event_target_value(&ev)));
                    }
                    prop:value=move || input.get().rack_id
                >
                    <option value="">"Select a rack..."</option>
                    {move || {
                        let current = input.get().rack_id;
                        racks
                            .get()
                            .into_iter()
                            .map(|rack: Rack| {
                                let value = rack.id.to_string();
                                let selected = value == current;
                                view! {
                                    <option value=value selected=selected>{rack.name}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <Show when=move || !errors.get().rack_id.is_empty()>
                    <span class="form__error">{move || errors.get().rack_id}</span>
                </Show>
            </div>

            <div class="form__group">
                <label class="form__label">"Description"</label>
                <textarea
                    class="form__input"
                    rows=3
                    prop:value=move || input.get().description
                    on:input=move |ev| {
                        on_field_change.run((CollectionField::Description, event_target_value(&ev)));
                    }
                >
                </textarea>
                <Show when=move || !errors.get().description.is_empty()>
                    <span class="form__error">{move || errors.get().description}</span>
                </Show>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_save.run(())
                >
                    {icon("save")}
                    " Save"
                </Button>
            </div>
        </Modal>
    }
}
