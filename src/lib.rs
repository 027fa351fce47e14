//! Harvests Yelp businesses, reviews and photos for a fixed set of cities
//! through the GraphQL search API.

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use clients::{HttpClient, RawResponse, Transport};
pub use config::Settings;
pub use error::{Error, Result};
pub use models::{
    BusinessRecord, HarvestOutput, NormalizedBusiness, NormalizedPage, PhotoRecord, ReviewRecord,
};
pub use services::{
    build_search_query, normalize_businesses, normalize_page, run, ApiService, Harvester,
    PhotoCache, PhotoReport, RunSummary,
};
pub use storage::TableWriter;
