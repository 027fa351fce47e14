use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub business_alias: String,
    pub review_text: Option<String>,
    pub review_rating: Option<f64>,
}
