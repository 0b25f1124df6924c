use serde::{Deserialize, Serialize};
use crate::models::flight::Flight;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub total_count: usize,
    pub results: Vec<Flight>,
}

impl SearchResponse {
    pub fn new(results: Vec<Flight>) -> Self {
        Self {
            total_count: results.len(),
            results,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}
