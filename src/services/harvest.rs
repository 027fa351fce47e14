use std::collections::HashSet;
use tracing::{debug, info};
use crate::config::{ApiConfig, HarvestConfig};
use crate::error::Result;
use crate::models::{HarvestOutput, NormalizedBusiness};
use crate::services::api::ApiService;
use crate::services::normalizer::normalize_businesses;
use crate::services::query::build_search_query;
use crate::utils::time::sleep_with_jitter;

/// Pages through every location and accumulates normalized records.
pub struct Harvester {
    api_service: ApiService,
    page_limit: u32,
    max_results: u32,
    page_delay_ms: u64,
    page_jitter_ms: u64,
}

impl Harvester {
    pub fn new(api_service: ApiService, harvest: &HarvestConfig, api: &ApiConfig) -> Self {
        Self {
            api_service,
            page_limit: harvest.page_limit,
            max_results: harvest.max_results,
            page_delay_ms: api.page_delay_ms,
            page_jitter_ms: api.page_jitter_ms,
        }
    }

    /// `(offset, limit)` pairs walked for each location.
    ///
    /// The full range is always walked; there is no end-of-results signal to
    /// stop on. The last page is shortened so offset + limit stays within
    /// `max_results`.
    pub fn pages(&self) -> Vec<(u32, u32)> {
        let step = self.page_limit.max(1);
        (0..self.max_results)
            .step_by(step as usize)
            .map(|offset| (offset, step.min(self.max_results - offset)))
            .collect()
    }

    /// Runs the whole harvest. The first failed page aborts the run and no
    /// partial output is returned.
    pub async fn harvest(&self, locations: &[String], category: &str) -> Result<HarvestOutput> {
        let pages = self.pages();
        let mut output = HarvestOutput::default();
        let mut seen_aliases = HashSet::new();
        let mut first_request = true;

        for location in locations {
            info!(
                location = %location,
                category = category,
                pages = pages.len(),
                "Harvesting location"
            );

            for &(offset, limit) in &pages {
                if !first_request {
                    sleep_with_jitter(self.page_delay_ms, self.page_jitter_ms).await;
                }
                first_request = false;

                let query = build_search_query(location, category, offset, limit);
                let payload = self.api_service.fetch_page(&query).await?;
                let page = normalize_businesses(&payload);

                debug!(
                    location = %location,
                    offset = offset,
                    limit = limit,
                    businesses = page.len(),
                    "Page normalized"
                );

                append_unique(&mut output, &mut seen_aliases, page);
            }
        }

        info!(
            businesses = output.businesses.len(),
            reviews = output.reviews.len(),
            photos = output.photos.len(),
            "Harvest complete"
        );

        Ok(output)
    }
}

/// Appends a page, dropping businesses (and their reviews and photos) whose
/// alias was already harvested earlier in the run or earlier on the same page.
fn append_unique(
    output: &mut HarvestOutput,
    seen: &mut HashSet<String>,
    page: Vec<NormalizedBusiness>,
) {
    for entry in page {
        if !seen.insert(entry.business.alias.clone()) {
            debug!(alias = %entry.business.alias, "Dropping duplicate business");
            continue;
        }
        output.businesses.push(entry.business);
        output.reviews.extend(entry.reviews);
        output.photos.extend(entry.photos);
    }
}
