//! Breed picker: the catalogue from `GET /dogs/breeds` with a type-to-filter
//! query and a cursor over the visible entries.

/// Shown in place of the list when the query matches nothing.
pub const NO_BREEDS_FOUND: &str = "No breeds found.";

#[derive(Debug, Clone, Default)]
pub struct BreedPicker {
    catalogue: Vec<String>,
    query: String,
    cursor: usize,
    loaded: bool,
}

impl BreedPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalogue. Resets query and cursor.
    pub fn set_catalogue(&mut self, breeds: Vec<String>) {
        self.catalogue = breeds;
        self.query.clear();
        self.cursor = 0;
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn catalogue(&self) -> &[String] {
        &self.catalogue
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Breeds containing the query, case-insensitively, in catalogue order.
    pub fn visible(&self) -> Vec<&str> {
        let needle = self.query.trim().to_lowercase();
        self.catalogue
            .iter()
            .filter(|breed| needle.is_empty() || breed.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_down(&mut self) {
        let len = self.visible().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// The breed under the cursor, if the filtered list is non-empty.
    pub fn highlighted(&self) -> Option<String> {
        self.visible().get(self.cursor).map(|b| b.to_string())
    }

    /// Forget everything, including the catalogue (used on logout).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> BreedPicker {
        let mut picker = BreedPicker::new();
        picker.set_catalogue(vec![
            "Affenpinscher".to_string(),
            "Beagle".to_string(),
            "Labrador Retriever".to_string(),
            "Golden Retriever".to_string(),
        ]);
        picker
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let picker = picker();
        assert!(picker.is_loaded());
        assert_eq!(picker.visible().len(), 4);
        assert_eq!(picker.highlighted().as_deref(), Some("Affenpinscher"));
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut picker = picker();
        for c in "RETRIEV".chars() {
            picker.push_char(c);
        }
        assert_eq!(
            picker.visible(),
            vec!["Labrador Retriever", "Golden Retriever"]
        );
    }

    #[test]
    fn test_no_match() {
        let mut picker = picker();
        picker.push_char('z');
        picker.push_char('z');
        assert!(picker.visible().is_empty());
        assert!(picker.highlighted().is_none());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut picker = picker();
        picker.cursor_up();
        assert_eq!(picker.cursor(), 0);
        for _ in 0..10 {
            picker.cursor_down();
        }
        assert_eq!(picker.cursor(), 3);
        assert_eq!(picker.highlighted().as_deref(), Some("Golden Retriever"));

        picker.push_char('b');
        assert_eq!(picker.cursor(), 0);
        picker.pop_char();
        assert_eq!(picker.query(), "");
    }

    #[test]
    fn test_reset() {
        let mut picker = picker();
        picker.reset();
        assert!(!picker.is_loaded());
        assert!(picker.catalogue().is_empty());
    }
}
