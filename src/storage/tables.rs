use std::sync::Arc;
use arrow::array::{Float64Array, StringArray, UInt32Array, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use crate::error::Result;
use crate::models::{BusinessRecord, PhotoRecord, ReviewRecord};

pub fn businesses_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("business_alias", DataType::Utf8, false),
        Field::new("business_review_count", DataType::UInt32, true),
        Field::new("business_rating", DataType::Float64, true),
        Field::new("business_price", DataType::UInt8, false),
        Field::new("business_city", DataType::Utf8, true),
        Field::new("business_state", DataType::Utf8, true),
        Field::new("business_postal_code", DataType::Utf8, true),
        Field::new("business_country", DataType::Utf8, true),
        Field::new("business_latitude", DataType::Float64, true),
        Field::new("business_longitude", DataType::Float64, true),
        Field::new("business_categories", DataType::Utf8, false),
        Field::new("business_parent_categories", DataType::Utf8, false),
    ]))
}

pub fn reviews_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("business_alias", DataType::Utf8, false),
        Field::new("review_text", DataType::Utf8, true),
        Field::new("review_rating", DataType::Float64, true),
    ]))
}

pub fn photos_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("business_alias", DataType::Utf8, false),
        Field::new("photo_url", DataType::Utf8, false),
        Field::new("file_name", DataType::Utf8, false),
    ]))
}

pub fn businesses_batch(businesses: &[BusinessRecord]) -> Result<RecordBatch> {
    // Category lists are stored as JSON array strings.
    let categories = businesses.iter()
        .map(|b| serde_json::to_string(&b.categories))
        .collect::<serde_json::Result<Vec<_>>>()?;
    let parent_categories = businesses.iter()
        .map(|b| serde_json::to_string(&b.parent_categories))
        .collect::<serde_json::Result<Vec<_>>>()?;

    let aliases: StringArray = businesses.iter().map(|b| Some(b.alias.as_str())).collect();
    let review_counts: UInt32Array = businesses.iter().map(|b| b.review_count).collect();
    let ratings: Float64Array = businesses.iter().map(|b| b.rating).collect();
    let prices: UInt8Array = businesses.iter().map(|b| Some(b.price)).collect();
    let cities: StringArray = businesses.iter().map(|b| b.city.as_deref()).collect();
    let states: StringArray = businesses.iter().map(|b| b.state.as_deref()).collect();
    let postal_codes: StringArray = businesses.iter().map(|b| b.postal_code.as_deref()).collect();
    let countries: StringArray = businesses.iter().map(|b| b.country.as_deref()).collect();
    let latitudes: Float64Array = businesses.iter().map(|b| b.latitude).collect();
    let longitudes: Float64Array = businesses.iter().map(|b| b.longitude).collect();
    let categories: StringArray = categories.iter().map(|s| Some(s.as_str())).collect();
    let parent_categories: StringArray = parent_categories.iter().map(|s| Some(s.as_str())).collect();

    let batch = RecordBatch::try_new(
        businesses_schema(),
        vec![
            Arc::new(aliases),
            Arc::new(review_counts),
            Arc::new(ratings),
            Arc::new(prices),
            Arc::new(cities),
            Arc::new(states),
            Arc::new(postal_codes),
            Arc::new(countries),
            Arc::new(latitudes),
            Arc::new(longitudes),
            Arc::new(categories),
            Arc::new(parent_categories),
        ],
    )?;

    Ok(batch)
}

pub fn reviews_batch(reviews: &[ReviewRecord]) -> Result<RecordBatch> {
    let aliases: StringArray = reviews.iter().map(|r| Some(r.business_alias.as_str())).collect();
    let texts: StringArray = reviews.iter().map(|r| r.review_text.as_deref()).collect();
    let ratings: Float64Array = reviews.iter().map(|r| r.review_rating).collect();

    let batch = RecordBatch::try_new(
        reviews_schema(),
        vec![Arc::new(aliases), Arc::new(texts), Arc::new(ratings)],
    )?;

    Ok(batch)
}

pub fn photos_batch(photos: &[PhotoRecord]) -> Result<RecordBatch> {
    let aliases: StringArray = photos.iter().map(|p| Some(p.business_alias.as_str())).collect();
    let urls: StringArray = photos.iter().map(|p| Some(p.photo_url.as_str())).collect();
    let file_names: StringArray = photos.iter().map(|p| Some(p.file_name.as_str())).collect();

    let batch = RecordBatch::try_new(
        photos_schema(),
        vec![Arc::new(aliases), Arc::new(urls), Arc::new(file_names)],
    )?;

    Ok(batch)
}
