use leptos::prelude::*;
use thaw::*;

/// Select-all checkbox for a table header.
///
/// Shows three states: unchecked, checked and indeterminate, computed from
/// the visible items and the current selection. A click toggles between
/// "select all loaded rows" and "clear selection".
#[component]
pub fn TableHeaderCheckbox<T>(
    /// All currently loaded rows
    #[prop(into)]
    items: Signal<Vec<T>>,

    /// Selected ids
    #[prop(into)]
    selected: Signal<Vec<i64>>,

    /// Extracts the id from a row
    get_id: Callback<T, i64>,

    /// Callback: true = select all, false = clear
    on_change: Callback<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let checkbox_state = Signal::derive(move || {
        let current_items = items.get();
        let sel = selected.get();

        if current_items.is_empty() {
            return CheckboxState::Unchecked;
        }

        let selected_count = current_items
            .iter()
            .filter(|&item| sel.contains(&get_id.run(item.clone())))
            .count();

        if selected_count == 0 {
            CheckboxState::Unchecked
        } else if selected_count == current_items.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate flag only exists as a DOM property.
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(matches!(checkbox_state.get(), CheckboxState::Indeterminate));
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
