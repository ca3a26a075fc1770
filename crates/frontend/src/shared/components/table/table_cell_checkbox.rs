use leptos::prelude::*;
use thaw::*;

/// Row-selection checkbox cell.
///
/// Stops click propagation so toggling the checkbox does not also trigger
/// the row click handler.
#[component]
pub fn TableCellCheckbox(
    /// Id of this row
    item_id: i64,

    /// Selected ids
    #[prop(into)]
    selected: Signal<Vec<i64>>,

    /// Callback with (item_id, checked)
    on_change: Callback<(i64, bool)>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.get().contains(&item_id)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id, checked));
                }
            />
        </TableCell>
    }
}
