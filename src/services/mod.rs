pub mod api;
pub mod harvest;
pub mod normalizer;
pub mod photos;
pub mod pipeline;
pub mod query;

pub use api::ApiService;
pub use harvest::Harvester;
pub use normalizer::{normalize_businesses, normalize_page};
pub use photos::{PhotoCache, PhotoReport};
pub use pipeline::{run, RunSummary};
pub use query::build_search_query;
