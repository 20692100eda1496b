//! Search criteria and the current page of results.
//!
//! [`SearchCriteria`] is the filter/sort/pagination input, [`SearchResults`]
//! is what the last applied search produced. Every search request is tagged
//! with a generation from [`SearchResults::begin_request`]; a response is
//! applied only if its generation is still the latest one issued.

use std::collections::HashMap;

use crate::models::{Dog, Location, SearchQuery, SortField, SortOrder, PAGE_SIZE};

/// Number of pages needed for `total` results.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Breed filter, sort and page.
///
/// Invariants: `page >= 1`; `selected_breeds` has no duplicates; any change
/// to the breed filter puts `page` back to 1. Sort changes keep the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    selected_breeds: Vec<String>,
    sort_field: SortField,
    sort_order: SortOrder,
    page: usize,
    page_size: usize,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            selected_breeds: Vec::new(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_breeds(&self) -> &[String] {
        &self.selected_breeds
    }

    pub fn is_selected(&self, breed: &str) -> bool {
        self.selected_breeds.iter().any(|b| b == breed)
    }

    /// Select the breed if unselected, deselect it otherwise. Page resets to 1.
    /// Returns true when the breed is selected afterwards.
    pub fn toggle_breed(&mut self, breed: &str) -> bool {
        self.page = 1;
        if self.is_selected(breed) {
            self.selected_breeds.retain(|b| b != breed);
            false
        } else {
            self.selected_breeds.push(breed.to_string());
            true
        }
    }

    /// Deselect one breed. Returns false (page untouched) if it was not selected.
    pub fn deselect_breed(&mut self, breed: &str) -> bool {
        if !self.is_selected(breed) {
            return false;
        }
        self.selected_breeds.retain(|b| b != breed);
        self.page = 1;
        true
    }

    /// Drop the whole breed filter. Returns false if it was already empty.
    pub fn clear_breeds(&mut self) -> bool {
        if self.selected_breeds.is_empty() {
            return false;
        }
        self.selected_breeds.clear();
        self.page = 1;
        true
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Returns false if `order` was already set.
    pub fn set_sort_order(&mut self, order: SortOrder) -> bool {
        if self.sort_order == order {
            return false;
        }
        self.sort_order = order;
        true
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    pub fn cycle_sort_field(&mut self) {
        self.sort_field = self.sort_field.next();
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the first result on the current page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    pub fn sort_expression(&self) -> String {
        SearchQuery::sort_expression(self.sort_field, self.sort_order)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < total_pages(total, self.page_size)
    }

    /// Move to the next page if there is one.
    pub fn next_page(&mut self, total: usize) -> bool {
        if !self.has_next(total) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Move to the previous page unless already on page 1.
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// The query for the current page. An empty breed filter is omitted.
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            breeds: self.selected_breeds.clone(),
            size: Some(self.page_size),
            from: Some(self.offset()),
            sort: Some(self.sort_expression()),
            ..Default::default()
        }
    }
}

/// The currently displayed page of dogs plus request bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    dogs: Vec<Dog>,
    total: usize,
    loading: bool,
    /// Generation of the most recently issued search
    latest_generation: u64,
    /// Highlighted row in the dog table
    cursor: usize,
    /// Zip code -> resolved location for the current page
    locations: HashMap<String, Location>,
}

impl SearchResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new search: returns its generation and sets `loading`.
    pub fn begin_request(&mut self) -> u64 {
        self.latest_generation += 1;
        self.loading = true;
        self.latest_generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest_generation
    }

    /// Store a page if `generation` is current. Returns false for a stale
    /// response, which leaves everything untouched.
    pub fn apply(&mut self, generation: u64, dogs: Vec<Dog>, total: usize) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.dogs = dogs;
        self.total = total;
        self.loading = false;
        self.locations.clear();
        self.cursor = self.cursor.min(self.dogs.len().saturating_sub(1));
        true
    }

    /// Record a failed search. Previous dogs stay visible.
    pub fn fail(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.loading = false;
        true
    }

    /// Forget everything, including in-flight requests.
    pub fn reset(&mut self) {
        self.dogs.clear();
        self.total = 0;
        self.loading = false;
        self.cursor = 0;
        self.locations.clear();
        // Bump so any response still in flight is discarded.
        self.latest_generation += 1;
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_dog(&self) -> Option<&Dog> {
        self.dogs.get(self.cursor)
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.dogs.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    /// Unique zip codes on the current page, in display order.
    pub fn zip_codes(&self) -> Vec<String> {
        let mut zips: Vec<String> = Vec::new();
        for dog in &self.dogs {
            if !zips.contains(&dog.zip_code) {
                zips.push(dog.zip_code.clone());
            }
        }
        zips
    }

    /// Attach resolved locations, only if they belong to the current page.
    pub fn set_locations(&mut self, generation: u64, locations: Vec<Location>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        for location in locations {
            self.locations.insert(location.zip_code.clone(), location);
        }
        true
    }

    pub fn location(&self, zip_code: &str) -> Option<&Location> {
        self.locations.get(zip_code)
    }
}
