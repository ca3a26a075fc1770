//! Ordered multi-row selection for the table screens.

/// Tracks which row ids are selected, in the order they were selected.
///
/// Order matters: the edit and delete flows treat the first selected id as
/// "the selected record", so this is a Vec rather than a set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection<T: PartialEq + Clone> {
    ids: Vec<T>,
}

impl<T: PartialEq + Clone> Selection<T> {
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Add the id if absent, remove it if present. The relative order of the
    /// remaining ids is preserved either way.
    pub fn toggle(&mut self, id: T) {
        if let Some(pos) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Replace the selection with all of the given ids.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = T>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &T) -> bool {
        self.ids.contains(id)
    }

    /// The first-selected id, used by the single-row edit/delete flows.
    pub fn first(&self) -> Option<&T> {
        self.ids.first()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[T] {
        &self.ids
    }

    /// Drop ids that are no longer present in the backing list. Called on
    /// every list refresh so the selection can never go stale.
    pub fn retain_present(&mut self, present: &[T]) {
        self.ids.retain(|id| present.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection: Selection<i64> = Selection::new();
        selection.toggle(7);
        assert_eq!(selection.ids(), &[7]);
        selection.toggle(7);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_preserves_order_of_remaining() {
        let mut selection: Selection<i64> = Selection::new();
        selection.toggle(3);
        selection.toggle(1);
        selection.toggle(2);
        selection.toggle(1);
        assert_eq!(selection.ids(), &[3, 2]);
    }

    #[test]
    fn test_first_is_selection_order_not_id_order() {
        let mut selection: Selection<i64> = Selection::new();
        selection.toggle(9);
        selection.toggle(4);
        assert_eq!(selection.first(), Some(&9));
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut selection: Selection<i64> = Selection::new();
        selection.select_all([1, 2, 3]);
        assert_eq!(selection.len(), 3);
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_retain_present_drops_stale_ids() {
        let mut selection: Selection<i64> = Selection::new();
        selection.select_all([1, 2, 3]);
        selection.retain_present(&[2, 4]);
        assert_eq!(selection.ids(), &[2]);
    }
}
