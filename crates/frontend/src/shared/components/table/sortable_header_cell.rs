use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Table header cell with a sort indicator.
///
/// Shows the direction arrow for the active sort column and forwards clicks
/// to the `on_sort` callback with its own field name.
#[component]
pub fn SortableHeaderCell(
    /// Header label
    #[prop(into)]
    label: String,

    /// Column name this header sorts by
    #[prop(into)]
    sort_field: String,

    /// Currently active sort column
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Current sort direction
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback when the header is clicked
    on_sort: Callback<String>,

    /// Minimum column width
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=handle_click
            >
                {label}
                <span class=move || {
                    get_sort_class(&current_sort_field.get(), &sort_field_for_class)
                }>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            sort_ascending.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
