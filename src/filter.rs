//! Category Filter Logic
//!
//! Pure visibility predicate over item rows.

use crate::models::Item;

/// Sentinel selection that shows every row
pub const ALL_CATEGORIES: &str = "all";

/// Whether a row tagged `category` is visible under `selected`
pub fn category_matches(selected: &str, category: &str) -> bool {
    selected == ALL_CATEGORIES || selected == category
}

/// Distinct categories present in the item list, sorted, for the dropdown
pub fn categories_of(items: &[Item]) -> Vec<String> {
    let mut cats: Vec<String> = items.iter().map(|i| i.category.clone()).collect();
    cats.sort();
    cats.dedup();
    cats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, category: &str) -> Item {
        Item {
            id,
            item_name: format!("Item {}", id),
            category: category.to_string(),
            quantity: 1,
            price: None,
        }
    }

    #[test]
    fn test_selection_shows_exactly_matching_rows() {
        let items = vec![
            make_item(1, "tools"),
            make_item(2, "food"),
            make_item(3, "tools"),
        ];

        let visible: Vec<u32> = items
            .iter()
            .filter(|i| category_matches("tools", &i.category))
            .map(|i| i.id)
            .collect();
        assert_eq!(visible, vec![1, 3]);
    }

    #[test]
    fn test_all_sentinel_shows_everything() {
        let items = vec![make_item(1, "tools"), make_item(2, "food")];
        assert!(items.iter().all(|i| category_matches(ALL_CATEGORIES, &i.category)));
    }

    #[test]
    fn test_no_matches_yields_empty_set_without_error() {
        let items = vec![make_item(1, "tools")];
        let visible: Vec<&Item> = items
            .iter()
            .filter(|i| category_matches("garden", &i.category))
            .collect();
        assert!(visible.is_empty());

        // Empty input is fine too
        let none: Vec<Item> = Vec::new();
        assert!(categories_of(&none).is_empty());
    }

    #[test]
    fn test_categories_are_distinct_and_sorted() {
        let items = vec![
            make_item(1, "tools"),
            make_item(2, "food"),
            make_item(3, "tools"),
            make_item(4, "garden"),
        ];
        assert_eq!(categories_of(&items), vec!["food", "garden", "tools"]);
    }
}
