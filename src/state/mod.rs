//! Application state containers.
//!
//! - [`SessionState`]: anonymous or logged in
//! - [`Favorites`]: dogs picked as match candidates
//! - [`SearchCriteria`] / [`SearchResults`]: filter, sort, page and what came back
//! - [`BreedPicker`]: breed catalogue with a filter query

pub mod breeds;
pub mod favorites;
pub mod search;
pub mod session;

pub use breeds::{BreedPicker, NO_BREEDS_FOUND};
pub use favorites::Favorites;
pub use search::{total_pages, SearchCriteria, SearchResults};
pub use session::SessionState;
