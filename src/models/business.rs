use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub alias: String,
    pub review_count: Option<u32>,
    pub rating: Option<f64>,
    /// 0 when unknown, otherwise one tier per `$` in the price string.
    pub price: u8,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub categories: Vec<String>,
    pub parent_categories: Vec<String>,
}
