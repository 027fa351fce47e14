use std::collections::HashSet;
use serde_json::Value;
use crate::models::{BusinessRecord, NormalizedBusiness, NormalizedPage, PhotoRecord, ReviewRecord};
use crate::utils::json::{array_at, f64_at, str_at, u32_at};

const BUSINESS_PATH: [&str; 3] = ["data", "search", "business"];

/// Flattens one search page into business, review and photo records.
///
/// Records are emitted in page order. An absent business list is an empty page.
pub fn normalize_page(payload: &Value) -> NormalizedPage {
    let mut page = NormalizedPage::default();

    for entry in normalize_businesses(payload) {
        page.businesses.push(entry.business);
        page.reviews.extend(entry.reviews);
        page.photos.extend(entry.photos);
    }

    page
}

/// Normalizes each business entry of a page, keeping its reviews and photos
/// grouped with it.
pub fn normalize_businesses(payload: &Value) -> Vec<NormalizedBusiness> {
    array_at(payload, &BUSINESS_PATH)
        .iter()
        .map(normalize_business)
        .collect()
}

fn normalize_business(business: &Value) -> NormalizedBusiness {
    let record = business_record(business);

    let photos = array_at(business, &["photos"])
        .iter()
        .filter_map(Value::as_str)
        .map(|url| PhotoRecord::new(&record.alias, url))
        .collect();

    let reviews = array_at(business, &["reviews"])
        .iter()
        .map(|review| ReviewRecord {
            business_alias: record.alias.clone(),
            review_text: str_at(review, &["text"]),
            review_rating: f64_at(review, &["rating"]),
        })
        .collect();

    NormalizedBusiness {
        business: record,
        reviews,
        photos,
    }
}

fn business_record(business: &Value) -> BusinessRecord {
    let categories = array_at(business, &["categories"]);

    BusinessRecord {
        alias: str_at(business, &["alias"]).unwrap_or_default(),
        review_count: u32_at(business, &["review_count"]),
        rating: f64_at(business, &["rating"]),
        price: price_tier(str_at(business, &["price"]).as_deref()),
        city: str_at(business, &["location", "city"]),
        state: str_at(business, &["location", "state"]),
        postal_code: str_at(business, &["location", "postal_code"]),
        country: str_at(business, &["location", "country"]),
        latitude: f64_at(business, &["coordinates", "latitude"]),
        longitude: f64_at(business, &["coordinates", "longitude"]),
        categories: unique(categories.iter().filter_map(|c| str_at(c, &["alias"]))),
        parent_categories: unique(
            categories
                .iter()
                .flat_map(|c| array_at(c, &["parent_categories"]))
                .filter_map(|p| str_at(p, &["alias"])),
        ),
    }
}

/// One tier per character of the price string (`"$$"` is 2), 0 when absent.
pub fn price_tier(price: Option<&str>) -> u8 {
    price
        .map(|p| u8::try_from(p.chars().count()).unwrap_or(u8::MAX))
        .unwrap_or(0)
}

/// Collapses duplicates, keeping first-seen order.
fn unique(aliases: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    aliases.filter(|alias| seen.insert(alias.clone())).collect()
}
