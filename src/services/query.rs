/// Builds the business search query for one (location, category, page) triple.
///
/// Values are interpolated as-is. A location or category containing GraphQL
/// syntax characters produces a query the API will reject.
pub fn build_search_query(location: &str, category: &str, offset: u32, limit: u32) -> String {
    format!(
        r#"{{
    search(categories: "{category}", location: "{location}", offset: {offset}, limit: {limit}) {{
        business {{
            alias
            review_count
            rating
            price
            location {{
                city
                state
                postal_code
                country
            }}
            coordinates {{
                latitude
                longitude
            }}
            categories {{
                alias
                parent_categories {{
                    alias
                }}
            }}
            photos
            reviews {{
                text
                rating
            }}
        }}
    }}
}}"#
    )
}
