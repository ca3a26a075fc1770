use std::cmp::Ordering;

use contracts::domain::a001_rack::Rack;
use contracts::domain::a002_collection::aggregate::{Collection, CollectionDto};
use contracts::domain::a003_age::Age;
use contracts::domain::a004_family::Family;
use contracts::domain::a005_drawer::Drawer;
use contracts::domain::a006_map_location::MapLocation;
use contracts::domain::a007_acquisition::Acquisition;
use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::form_session::{DeleteSession, FormSession};
use crate::shared::list_utils::{stable_sort_list, Sortable};
use crate::shared::pagination;
use crate::shared::selection::Selection;

impl Sortable for Collection {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "rack_id" => self.rack_id.cmp(&other.rack_id),
            "description" => self.description.cmp(&other.description),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// All local state of the collections screen.
///
/// Rows are kept in fetch order; `visible_rows` applies the current sort on
/// the way out, so equal sort keys always tie-break on fetch order rather
/// than on whatever the previous sort left behind.
#[derive(Clone, Debug)]
pub struct CollectionsListState {
    pub rows: Vec<Collection>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub selected: Selection<i64>,
    pub add: FormSession<CollectionDto>,
    pub update: FormSession<CollectionDto>,
    pub delete: DeleteSession,
    pub racks: Vec<Rack>,
    pub ages: Vec<Age>,
    pub families: Vec<Family>,
    pub drawers: Vec<Drawer>,
    pub maps: Vec<MapLocation>,
    pub acquisitions: Vec<Acquisition>,
    pub users: Vec<User>,
    pub loading: bool,
    pub is_loaded: bool,
}

impl Default for CollectionsListState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sort_field: "id".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 5,
            selected: Selection::new(),
            add: FormSession::default(),
            update: FormSession::default(),
            delete: DeleteSession::default(),
            racks: Vec::new(),
            ages: Vec::new(),
            families: Vec::new(),
            drawers: Vec::new(),
            maps: Vec::new(),
            acquisitions: Vec::new(),
            users: Vec::new(),
            loading: false,
            is_loaded: false,
        }
    }
}

impl CollectionsListState {
    /// Replace the row cache after a fetch. Stale selected ids are pruned and
    /// the page index is re-clamped so the view never points past the end.
    pub fn set_rows(&mut self, rows: Vec<Collection>) {
        self.rows = rows;
        let ids: Vec<i64> = self.rows.iter().map(|c| c.id).collect();
        self.selected.retain_present(&ids);
        self.page = pagination::clamp_page(self.page, self.total_pages());
        self.is_loaded = true;
    }

    /// Clicking the active column flips direction; a newly chosen column
    /// starts descending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = false;
        }
    }

    /// Rows of the current page in display order.
    pub fn visible_rows(&self) -> Vec<Collection> {
        let mut sorted = self.rows.clone();
        stable_sort_list(&mut sorted, &self.sort_field, self.sort_ascending);
        let (start, end) = pagination::page_bounds(sorted.len(), self.page, self.page_size);
        sorted[start..end].to_vec()
    }

    /// Filler rows padding a partially filled last page to constant height.
    pub fn filler_rows(&self) -> usize {
        pagination::filler_rows(self.rows.len(), self.page, self.page_size)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.rows.len(), self.page_size)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = pagination::clamp_page(page, self.total_pages());
    }

    /// Changing the page size keeps the page index but re-clamps it, so a
    /// larger size never leaves the view on a page that no longer exists.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = pagination::clamp_page(self.page, self.total_pages());
    }

    pub fn toggle_select(&mut self, id: i64) {
        self.selected.toggle(id);
    }

    pub fn toggle_select_all(&mut self, checked: bool) {
        if checked {
            self.selected.select_all(self.rows.iter().map(|c| c.id));
        } else {
            self.selected.clear();
        }
    }

    /// Edit and Delete are only offered for exactly one selected row.
    pub fn can_modify(&self) -> bool {
        self.selected.len() == 1
    }

    pub fn first_selected(&self) -> Option<i64> {
        self.selected.first().copied()
    }

    pub fn open_add(&mut self) {
        self.add.open();
    }

    /// Seeds the update form from the locally cached row. No refetch: the
    /// table row the user just looked at is the source of truth for the form.
    pub fn open_update(&mut self) {
        if !self.can_modify() {
            return;
        }
        let Some(id) = self.first_selected() else {
            return;
        };
        if let Some(row) = self.rows.iter().find(|c| c.id == id) {
            self.update.open_with(CollectionDto::from(row));
        }
    }

    pub fn open_delete(&mut self) {
        if !self.can_modify() {
            return;
        }
        self.delete.open_confirm();
    }
}

pub fn create_state() -> RwSignal<CollectionsListState> {
    RwSignal::new(CollectionsListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_collection::aggregate::CollectionField;

    fn row(id: i64, name: &str, rack_id: i64, description: &str) -> Collection {
        Collection {
            id,
            name: name.to_string(),
            rack_id,
            description: description.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn twelve_rows() -> Vec<Collection> {
        (1..=12)
            .map(|id| row(id, &format!("collection {:02}", id), id % 3 + 1, "shelf"))
            .collect()
    }

    #[test]
    fn test_same_column_click_flips_direction() {
        let mut state = CollectionsListState::default();
        assert_eq!(state.sort_field, "id");
        assert!(state.sort_ascending);

        state.toggle_sort("id");
        assert!(!state.sort_ascending);
        state.toggle_sort("id");
        assert!(state.sort_ascending);
    }

    #[test]
    fn test_new_column_starts_descending() {
        let mut state = CollectionsListState::default();
        state.toggle_sort("name");
        assert_eq!(state.sort_field, "name");
        assert!(!state.sort_ascending);
    }

    #[test]
    fn test_last_page_slice_and_filler() {
        let mut state = CollectionsListState::default();
        state.set_rows(twelve_rows());
        state.set_page(2);

        let ids: Vec<i64> = state.visible_rows().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(state.filler_rows(), 3);
    }

    #[test]
    fn test_set_rows_prunes_selection_and_reclamps_page() {
        let mut state = CollectionsListState::default();
        state.set_rows(twelve_rows());
        state.set_page(2);
        state.toggle_select(11);
        state.toggle_select(3);

        // The backend dropped everything past id 5.
        state.set_rows((1..=5).map(|id| row(id, "kept", 1, "shelf")).collect());

        assert_eq!(state.selected.ids(), &[3]);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_select_all_then_clear() {
        let mut state = CollectionsListState::default();
        state.set_rows(twelve_rows());

        state.toggle_select_all(true);
        assert_eq!(state.selected.len(), 12);
        assert!(!state.can_modify());

        state.toggle_select_all(false);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_edit_prefills_from_cached_row_and_confirm_gate_holds() {
        let mut state = CollectionsListState::default();
        state.set_rows(vec![
            row(1, "Ammonites", 2, "Jurassic ammonites"),
            row(3, "Trilobites", 4, "Cambrian trilobites"),
        ]);

        state.toggle_select(3);
        state.open_update();
        assert!(state.update.open);
        assert_eq!(state.update.input.name, "Trilobites");
        assert_eq!(state.update.input.rack_id, "4");
        assert_eq!(state.update.input.description, "Cambrian trilobites");

        // Clearing the description keeps the confirmation closed.
        state
            .update
            .input
            .set_field(CollectionField::Description, String::new());
        assert!(!state.update.request_confirm());
        assert!(!state.update.confirm_open);
        assert_eq!(state.update.errors.description, "description is required");
    }

    #[test]
    fn test_update_and_delete_need_exactly_one_selection() {
        let mut state = CollectionsListState::default();
        state.set_rows(twelve_rows());

        state.open_update();
        assert!(!state.update.open);
        state.open_delete();
        assert!(!state.delete.confirm_open);

        state.toggle_select(1);
        state.toggle_select(2);
        state.open_update();
        assert!(!state.update.open);

        state.toggle_select(2);
        assert!(state.can_modify());
        state.open_delete();
        assert!(state.delete.confirm_open);
    }

    #[test]
    fn test_page_size_change_reclamps_page() {
        let mut state = CollectionsListState::default();
        state.set_rows(twelve_rows());
        state.set_page(2);

        state.set_page_size(25);
        assert_eq!(state.page_size, 25);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_visible_rows_sorted_by_selected_column() {
        let mut state = CollectionsListState::default();
        state.set_rows(vec![
            row(1, "gamma", 1, "x"),
            row(2, "alpha", 1, "x"),
            row(3, "beta", 1, "x"),
        ]);

        state.toggle_sort("name");
        let names: Vec<String> = state.visible_rows().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["gamma", "beta", "alpha"]);
    }
}
