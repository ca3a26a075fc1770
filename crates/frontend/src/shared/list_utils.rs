/// List helpers shared by the table screens (sorting and header indicators).
use std::cmp::Ordering;

/// Trait for row types that can be compared by a named column.
pub trait Sortable {
    /// Compares two rows by the given column.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Stable sort by a named column.
///
/// Rows are decorated with their original index; equal column values fall back
/// to that index, so rows that compare equal keep their original relative
/// order. Direction inverts only the column comparison, never the index
/// tie-break.
pub fn stable_sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    let mut decorated: Vec<(usize, T)> = items.drain(..).enumerate().collect();
    decorated.sort_by(|(index_a, a), (index_b, b)| {
        let by_field = a.compare_by_field(b, field);
        let by_field = if ascending { by_field } else { by_field.reverse() };
        by_field.then(index_a.cmp(index_b))
    });
    items.extend(decorated.into_iter().map(|(_, item)| item));
}

/// Get the sort indicator glyph for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for the indicator span of a column header
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                _ => self.id.cmp(&other.id),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 3, name: "beta" },
            Row { id: 1, name: "alpha" },
            Row { id: 4, name: "beta" },
            Row { id: 2, name: "gamma" },
        ]
    }

    #[test]
    fn test_sort_ascending_by_name() {
        let mut data = rows();
        stable_sort_list(&mut data, "name", true);
        let ids: Vec<i64> = data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_equal_keys_keep_original_order() {
        // The two "beta" rows (3 before 4) stay in that order in both
        // directions: the index tie-break is never inverted.
        let mut asc = rows();
        stable_sort_list(&mut asc, "name", true);
        let beta_asc: Vec<i64> = asc.iter().filter(|r| r.name == "beta").map(|r| r.id).collect();
        assert_eq!(beta_asc, vec![3, 4]);

        let mut desc = rows();
        stable_sort_list(&mut desc, "name", false);
        let beta_desc: Vec<i64> =
            desc.iter().filter(|r| r.name == "beta").map(|r| r.id).collect();
        assert_eq!(beta_desc, vec![3, 4]);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let mut once = rows();
        stable_sort_list(&mut once, "name", false);
        let mut twice = once.clone();
        stable_sort_list(&mut twice, "name", false);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_numeric_descending() {
        let mut data = rows();
        stable_sort_list(&mut data, "id", false);
        let ids: Vec<i64> = data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "id", true), " ⇅");
    }
}
