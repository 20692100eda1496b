use serde::{Deserialize, Serialize};

/// Number of dogs shown per page.
pub const PAGE_SIZE: usize = 25;

/// Maximum number of ids (or zip codes) the service accepts in one batch call.
pub const MAX_BATCH_SIZE: usize = 100;

/// Field the search results are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Breed,
    Name,
    Age,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Breed => "breed",
            SortField::Name => "name",
            SortField::Age => "age",
        }
    }

    /// Cycle breed -> name -> age -> breed.
    pub fn next(self) -> Self {
        match self {
            SortField::Breed => SortField::Name,
            SortField::Name => SortField::Age,
            SortField::Age => SortField::Breed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Breed => "Breed",
            SortField::Name => "Name",
            SortField::Age => "Age",
        }
    }
}

/// Direction of the search ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}

/// Query parameters for `GET /dogs/search`.
///
/// Empty lists and `None` values are omitted from the query string, so a
/// default query asks the service for an unfiltered first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub breeds: Vec<String>,
    pub zip_codes: Vec<String>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    pub size: Option<usize>,
    pub from: Option<usize>,
    /// Sort expression in `field:direction` form, e.g. `breed:asc`
    pub sort: Option<String>,
}

impl SearchQuery {
    /// Build the `field:direction` sort expression understood by the service.
    pub fn sort_expression(field: SortField, order: SortOrder) -> String {
        format!("{}:{}", field.as_str(), order.as_str())
    }

    /// Key/value pairs in the order they are sent.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for breed in &self.breeds {
            pairs.push(("breeds[]", breed.clone()));
        }
        for zip in &self.zip_codes {
            pairs.push(("zipCodes[]", zip.clone()));
        }
        if let Some(min) = self.age_min {
            pairs.push(("ageMin", min.to_string()));
        }
        if let Some(max) = self.age_max {
            pairs.push(("ageMax", max.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        if let Some(from) = self.from {
            pairs.push(("from", from.to_string()));
        }
        if let Some(ref sort) = self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }

    /// Encode as a query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Response of `GET /dogs/search`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub result_ids: Vec<String>,
    pub total: usize,
    /// Ready-made query for the next page, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Ready-made query for the previous page, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}
