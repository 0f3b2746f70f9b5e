//! Read-only views of the provider's JSON payloads. Only the fields that get rendered
//! are modelled; everything else is ignored.

use serde::Deserialize;
use std::collections::HashMap;

/// `GET /web/search`
#[derive(Debug, Default, Deserialize)]
pub struct WebSearchResponse {
    #[serde(default)]
    pub web: Option<WebResults>,
    #[serde(default)]
    pub locations: Option<LocationResults>,
}

impl WebSearchResponse {
    pub fn web_results(&self) -> &[WebResult] {
        self.web.as_ref().map(|w| w.results.as_slice()).unwrap_or_default()
    }

    /// Ids of places the provider associated with the query
    pub fn location_ids(&self) -> Vec<String> {
        self.locations
            .as_ref()
            .map(|l| l.results.iter().filter_map(|r| r.id.clone()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct WebResults {
    #[serde(default)]
    pub results: Vec<WebResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationResults {
    #[serde(default)]
    pub results: Vec<LocationRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// `GET /local/pois`
#[derive(Debug, Default, Deserialize)]
pub struct PoiResponse {
    #[serde(default)]
    pub results: Vec<Poi>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<PostalAddress>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub address_locality: Option<String>,
    #[serde(default)]
    pub address_region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(default)]
    pub rating_value: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u64>,
}

/// `GET /local/descriptions`
#[derive(Debug, Default, Deserialize)]
pub struct DescriptionsResponse {
    #[serde(default)]
    pub descriptions: HashMap<String, Option<String>>,
}

impl DescriptionsResponse {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.descriptions.get(id).and_then(|d| d.as_deref()).filter(|d| !d.trim().is_empty())
    }
}
