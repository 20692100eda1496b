use serde::{Deserialize, Serialize};

/// One adoptable dog as returned by `POST /dogs`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Dog {
    pub id: String,
    /// Image URL
    pub img: String,
    pub name: String,
    /// Age in years
    pub age: u32,
    pub zip_code: String,
    pub breed: String,
}

/// Response of `POST /dogs/match`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Match {
    #[serde(rename = "match")]
    pub dog_id: String,
}
