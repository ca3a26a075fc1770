mod state;

use contracts::domain::a002_collection::aggregate::CollectionField;
use contracts::shared::api_message::MutationOutcome;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_rack;
use crate::domain::a002_collection::api;
use crate::domain::a002_collection::ui::form::CollectionForm;
use crate::domain::{a003_age, a004_family, a005_drawer, a006_map_location, a007_acquisition};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_banner::StatusBanner;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use crate::system::users as system_users;
use contracts::domain::a002_collection::aggregate::Collection;
use state::create_state;

/// The collections admin screen: a sortable, paginated, multi-select table
/// with modal add/update/delete flows.
#[component]
pub fn CollectionsListPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let state = create_state();

    let token = Signal::derive(move || auth_state.get().token.clone().unwrap_or_default());

    let load_collections = move || {
        let token_value = token.get_untracked();
        state.update(|s| s.loading = true);
        spawn_local(async move {
            let result = api::fetch_collections(&token_value).await;
            // try_update: the fetch may settle after the page is torn down.
            let _ = state.try_update(|s| {
                s.loading = false;
                match result {
                    Ok(rows) => s.set_rows(rows),
                    Err(e) => {
                        log::error!("failed to fetch collections: {}", e);
                        s.is_loaded = true;
                    }
                }
            });
        });
    };

    let load_racks = move || {
        let token_value = token.get_untracked();
        spawn_local(async move {
            match a001_rack::api::fetch_racks(&token_value).await {
                Ok(list) => {
                    let _ = state.try_update(|s| s.racks = list);
                }
                Err(e) => log::warn!("failed to fetch racks: {}", e),
            }
        });
    };

    // The sibling screens share these lookups; they are warmed here once so
    // navigation away from the table is instant.
    let load_lookups = move || {
        let token_value = token.get_untracked();
        spawn_local(async move {
            match a003_age::api::fetch_ages(&token_value).await {
                Ok(list) => {
                    let _ = state.try_update(|s| s.ages = list);
                }
                Err(e) => log::warn!("failed to fetch ages: {}", e),
            }
            match a004_family::api::fetch_families(&token_value).await {
                Ok(list) => {
                    let _ = state.try_update(|s| s.families = list);
                }
                Err(e) => log::warn!("failed to fetch families: {}", e),
            }
            match a005_drawer::api::fetch_drawers(&token_value).await {
                Ok(list) => {
                    let _ = state.try_update(|s| s.drawers = list);
                }
                Err(e) => log::warn!("failed to fetch drawers: {}", e),
            }
            match a006_map_location::api::fetch_maps(&token_value).await {
                Ok(list) => {
                    let _ = state.try_update(|s| s.maps = list);
                }
                Err(e) => log::warn!("failed to fetch maps: {}", e),
            }
            match a007_acquisition::api::fetch_acquisitions(&token_value).await {
                Ok(list) => {
                    let _ = state.try_update(|s| s.acquisitions = list);
                }
                Err(e) => log::warn!("failed to fetch acquisitions: {}", e),
            }
            match system_users::api::fetch_users(&token_value).await {
                Ok(list) => {
                    let _ = state.try_update(|s| s.users = list);
                }
                Err(e) => log::warn!("failed to fetch users: {}", e),
            }
        });
    };

    Effect::new(move |_| {
        if auth_state.get().token.is_some() && !state.with_untracked(|s| s.is_loaded) {
            load_collections();
            load_racks();
            load_lookups();
        }
    });

    let handle_refresh = move || {
        state.update(|s| s.selected.clear());
        load_collections();
        load_racks();
    };

    let submit_add = move || {
        if !state.try_update(|s| s.add.begin_submit()).unwrap_or(false) {
            return;
        }
        let dto = state.with_untracked(|s| s.add.input.clone());
        let token_value = token.get_untracked();
        spawn_local(async move {
            let outcome = match api::create_collection(&dto, &token_value).await {
                Ok(outcome) => outcome,
                Err(e) => MutationOutcome::failure(e),
            };
            let ok = outcome.status;
            if state
                .try_update(|s| s.add.complete_submit(outcome.message, outcome.status))
                .is_none()
            {
                return;
            }
            if ok {
                load_collections();
            }
        });
    };

    let submit_update = move || {
        let Some(id) = state.with_untracked(|s| s.first_selected()) else {
            return;
        };
        if !state.try_update(|s| s.update.begin_submit()).unwrap_or(false) {
            return;
        }
        let dto = state.with_untracked(|s| s.update.input.clone());
        let token_value = token.get_untracked();
        spawn_local(async move {
            let outcome = match api::update_collection(id, &dto, &token_value).await {
                Ok(outcome) => outcome,
                Err(e) => MutationOutcome::failure(e),
            };
            let ok = outcome.status;
            if state
                .try_update(|s| s.update.complete_submit(outcome.message, outcome.status))
                .is_none()
            {
                return;
            }
            if ok {
                load_collections();
            }
        });
    };

    let submit_delete = move || {
        let Some(id) = state.with_untracked(|s| s.first_selected()) else {
            return;
        };
        if !state.try_update(|s| s.delete.begin_submit()).unwrap_or(false) {
            return;
        }
        let token_value = token.get_untracked();
        spawn_local(async move {
            let outcome = match api::delete_collection(id, &token_value).await {
                Ok(outcome) => outcome,
                Err(e) => MutationOutcome::failure(e),
            };
            let ok = outcome.status;
            if state
                .try_update(|s| s.delete.complete_submit(outcome.message, outcome.status))
                .is_none()
            {
                return;
            }
            if ok {
                let _ = state.try_update(|s| s.selected.clear());
                load_collections();
            }
        });
    };

    let rows_signal: Signal<Vec<Collection>> = Signal::derive(move || state.with(|s| s.rows.clone()));
    let selected_signal: Signal<Vec<i64>> =
        Signal::derive(move || state.with(|s| s.selected.ids().to_vec()));
    let sort_field_signal = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending_signal = Signal::derive(move || state.with(|s| s.sort_ascending));
    let racks_signal = Signal::derive(move || state.with(|s| s.racks.clone()));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let can_modify = Signal::derive(move || state.with(|s| s.can_modify()));

    let on_sort = Callback::new(move |field: String| {
        state.update(|s| s.toggle_sort(&field));
    });

    let add_field_change = Callback::new(move |(field, value): (CollectionField, String)| {
        state.update(|s| {
            s.add.input.set_field(field, value);
            // Errors are only recomputed live once the user has seen them.
            if !s.add.errors.is_clean() {
                s.add.validate();
            }
        });
    });

    let update_field_change = Callback::new(move |(field, value): (CollectionField, String)| {
        state.update(|s| {
            s.update.input.set_field(field, value);
            if !s.update.errors.is_clean() {
                s.update.validate();
            }
        });
    });

    view! {
        <div class="page" id="collections-page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Collections"</h1>
                    <Badge>
                        {move || state.with(|s| s.rows.len().to_string())}
                    </Badge>
                    <Show when=move || loading.get()>
                        <Spinner />
                    </Show>
                </div>
                <div class="page__header-right">
                    <Show when=move || !selected_signal.get().is_empty()>
                        <span class="toolbar__selection-count">
                            {move || format!("{} selected", selected_signal.get().len())}
                        </span>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.open_add())
                    >
                        {icon("plus")}
                        " Add"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| handle_refresh()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| state.update(|s| s.open_update())
                        disabled=Signal::derive(move || !can_modify.get())
                    >
                        {icon("edit")}
                        " Edit"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| state.update(|s| s.open_delete())
                        disabled=Signal::derive(move || !can_modify.get())
                    >
                        {icon("delete")}
                        " Delete"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <StatusBanner
                    message=Signal::derive(move || state.with(|s| s.add.message.clone()))
                    on_dismiss=Callback::new(move |_| state.update(|s| s.add.dismiss_message()))
                />
                <StatusBanner
                    message=Signal::derive(move || state.with(|s| s.update.message.clone()))
                    on_dismiss=Callback::new(move |_| state.update(|s| s.update.dismiss_message()))
                />
                <StatusBanner
                    message=Signal::derive(move || state.with(|s| s.delete.message.clone()))
                    on_dismiss=Callback::new(move |_| state.update(|s| s.delete.dismiss_message()))
                />

                <div class="table-wrapper">
                    <Table attr:id="collections-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    items=rows_signal
                                    selected=selected_signal
                                    get_id=Callback::new(|c: Collection| c.id)
                                    on_change=Callback::new(move |checked| {
                                        state.update(|s| s.toggle_select_all(checked));
                                    })
                                />
                                <SortableHeaderCell
                                    label="ID"
                                    sort_field="id"
                                    current_sort_field=sort_field_signal
                                    sort_ascending=sort_ascending_signal
                                    on_sort=on_sort
                                    min_width=70.0
                                />
                                <SortableHeaderCell
                                    label="Name"
                                    sort_field="name"
                                    current_sort_field=sort_field_signal
                                    sort_ascending=sort_ascending_signal
                                    on_sort=on_sort
                                    min_width=160.0
                                />
                                <SortableHeaderCell
                                    label="Rack"
                                    sort_field="rack_id"
                                    current_sort_field=sort_field_signal
                                    sort_ascending=sort_ascending_signal
                                    on_sort=on_sort
                                    min_width=90.0
                                />
                                <SortableHeaderCell
                                    label="Description"
                                    sort_field="description"
                                    current_sort_field=sort_field_signal
                                    sort_ascending=sort_ascending_signal
                                    on_sort=on_sort
                                    min_width=220.0
                                />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.visible_rows())
                                key=|c| c.id
                                children=move |collection| {
                                    let id = collection.id;
                                    view! {
                                        <TableRow on:click=move |_| {
                                            state.update(|s| s.toggle_select(id));
                                        }>
                                            <TableCellCheckbox
                                                item_id=id
                                                selected=selected_signal
                                                on_change=Callback::new(move |(row_id, _checked)| {
                                                    state.update(|s| s.toggle_select(row_id));
                                                })
                                            />
                                            <TableCell>
                                                <TableCellLayout>{id.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {collection.name.clone()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {collection.rack_id.to_string()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {collection.description.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            // Filler rows keep the table a constant height on
                            // a partially filled last page.
                            {move || {
                                (0..state.with(|s| s.filler_rows()))
                                    .map(|_| {
                                        view! {
                                            <TableRow>
                                                <TableCell class="fixed-checkbox-column">""</TableCell>
                                                <TableCell>""</TableCell>
                                                <TableCell>""</TableCell>
                                                <TableCell>""</TableCell>
                                                <TableCell>""</TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || state.with(|s| s.rows.len()))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(move |page| state.update(|s| s.set_page(page)))
                    on_page_size_change=Callback::new(move |size| {
                        state.update(|s| s.set_page_size(size));
                    })
                />
            </div>

            <Show when=move || state.with(|s| s.add.open)>
                <CollectionForm
                    title="Add collection"
                    input=Signal::derive(move || state.with(|s| s.add.input.clone()))
                    errors=Signal::derive(move || state.with(|s| s.add.errors.clone()))
                    racks=racks_signal
                    on_field_change=add_field_change
                    on_save=Callback::new(move |_| {
                        state.update(|s| {
                            let _ = s.add.request_confirm();
                        });
                    })
                    on_close=Callback::new(move |_| state.update(|s| s.add.close()))
                />
            </Show>

            <Show when=move || state.with(|s| s.update.open)>
                <CollectionForm
                    title="Update collection"
                    input=Signal::derive(move || state.with(|s| s.update.input.clone()))
                    errors=Signal::derive(move || state.with(|s| s.update.errors.clone()))
                    racks=racks_signal
                    on_field_change=update_field_change
                    on_save=Callback::new(move |_| {
                        state.update(|s| {
                            let _ = s.update.request_confirm();
                        });
                    })
                    on_close=Callback::new(move |_| state.update(|s| s.update.close()))
                />
            </Show>

            <ConfirmDialog
                open=Signal::derive(move || state.with(|s| s.add.confirm_open))
                title="Create collection"
                text="Create this collection?"
                busy=Signal::derive(move || state.with(|s| s.add.saving))
                on_confirm=Callback::new(move |_| submit_add())
                on_cancel=Callback::new(move |_| state.update(|s| s.add.cancel_confirm()))
            />
            <ConfirmDialog
                open=Signal::derive(move || state.with(|s| s.update.confirm_open))
                title="Update collection"
                text="Save changes to this collection?"
                busy=Signal::derive(move || state.with(|s| s.update.saving))
                on_confirm=Callback::new(move |_| submit_update())
                on_cancel=Callback::new(move |_| state.update(|s| s.update.cancel_confirm()))
            />
            <ConfirmDialog
                open=Signal::derive(move || state.with(|s| s.delete.confirm_open))
                title="Delete collection"
                text="Delete the selected collection? This cannot be undone."
                busy=Signal::derive(move || state.with(|s| s.delete.saving))
                on_confirm=Callback::new(move |_| submit_delete())
                on_cancel=Callback::new(move |_| state.update(|s| s.delete.cancel_confirm()))
            />
        </div>
    }
}
