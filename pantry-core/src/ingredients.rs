//! Ordered, de-duplicated set of ingredient tags.

/// The ingredient tags the user has entered, in insertion order.
///
/// Duplicates are rejected on insert with a case-sensitive exact match. Input is
/// trimmed of outer whitespace only; no case normalization or inner collapsing.
#[derive(Debug, Clone, Default)]
pub struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one ingredient. Returns true if the set changed.
    pub fn add(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() || self.items.iter().any(|i| i == trimmed) {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    /// Add every comma-separated piece of `raw`, matching the tag editor's
    /// comma submission trigger.
    pub fn add_all(&mut self, raw: &str) {
        for piece in raw.split(',') {
            self.add(piece);
        }
    }

    /// Remove the ingredient at `index`. Returns `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Serialize for the generate request: entries joined with ", ".
    pub fn to_request_string(&self) -> String {
        self.items.join(", ")
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_appends() {
        let mut set = IngredientSet::new();
        assert!(set.add("  Chicken "));
        assert_eq!(set.items(), ["Chicken"]);
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let mut set = IngredientSet::new();
        assert!(set.add("Egg"));
        assert!(!set.add("Egg"));
        assert!(!set.add("  Egg  "));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn dedupe_is_case_sensitive() {
        let mut set = IngredientSet::new();
        assert!(set.add("egg"));
        assert!(set.add("Egg"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_and_whitespace_input_is_a_noop() {
        let mut set = IngredientSet::new();
        assert!(!set.add(""));
        assert!(!set.add("   "));
        assert!(set.is_empty());
    }

    #[test]
    fn remove_by_position() {
        let mut set = IngredientSet::new();
        set.add("Egg");
        set.add("Milk");
        assert_eq!(set.remove(0).as_deref(), Some("Egg"));
        assert_eq!(set.items(), ["Milk"]);
    }

    #[test]
    fn remove_out_of_range_is_a_noop() {
        let mut set = IngredientSet::new();
        set.add("Egg");
        assert_eq!(set.remove(5), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn request_string_joins_in_insertion_order() {
        let mut set = IngredientSet::new();
        set.add("Egg");
        set.add("Egg");
        set.add("Milk");
        assert_eq!(set.to_request_string(), "Egg, Milk");
    }

    #[test]
    fn add_all_splits_on_commas() {
        let mut set = IngredientSet::new();
        set.add_all("Egg, Milk ,Egg,");
        assert_eq!(set.items(), ["Egg", "Milk"]);
    }
}
