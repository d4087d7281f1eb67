use serde::Serialize;

/// Diagnostic record of what was parsed out of the query. Nullable fields
/// are explicit: an unresolved province is `null`, never an absent key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryDetails {
    pub original_query: String,
    pub general_keywords: Vec<String>,
    pub negative_keywords: Vec<String>,
    pub location_keywords: Vec<String>,
    pub resolved_province: Option<String>,
    pub resolved_region: Option<String>,
}

/// One ranked record in a response bucket. `score` is cosine similarity in
/// textual mode or the fixed sentinel in filter-only mode, rounded to four
/// decimals for the API.
#[derive(Debug, Clone, Serialize)]
pub struct RankedLocation {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub province: Option<String>,
    pub score: f64,
}

/// Matches inside the resolved province.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProvinceBucket {
    pub province_name: Option<String>,
    pub title: String,
    pub locations: Vec<RankedLocation>,
}

/// Everything else, ranked the same way.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Bucket {
    pub title: String,
    pub locations: Vec<RankedLocation>,
}

/// The full two-bucket search response.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query_details: QueryDetails,
    pub province_results: ProvinceBucket,
    pub other_results: Bucket,
}
