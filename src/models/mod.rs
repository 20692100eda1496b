//! Wire types for the dog adoption service.
//!
//! Every request body and response payload exchanged with the remote
//! service is defined here as a plain serde type.

mod dog;
mod location;
mod search;
mod user;

pub use dog::{Dog, Match};
pub use location::{
    Coordinates, GeoBoundingBox, Location, LocationSearchQuery, LocationSearchResponse,
};
pub use search::{SearchQuery, SearchResponse, SortField, SortOrder, MAX_BATCH_SIZE, PAGE_SIZE};
pub use user::User;
