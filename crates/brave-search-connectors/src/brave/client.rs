use async_trait::async_trait;
use brave_search_config::{ApiKey, ServerConfig};
use brave_search_core::{LocalSearchQuery, WebSearchQuery};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::format::{render_local_results, render_web_results};
use super::models::{DescriptionsResponse, PoiResponse, WebSearchResponse};
use crate::backend::SearchBackend;
use crate::error::{ConnectorError, ConnectorResult};

/// Largest `count` the provider accepts
pub const MAX_COUNT: u64 = 20;
/// Largest `offset` the provider accepts
pub const MAX_OFFSET: u64 = 9;

const SUBSCRIPTION_TOKEN_HEADER: &str = "x-subscription-token";
const MAX_ERROR_BODY_CHARS: usize = 500;

const WEB_SEARCH_PATH: &str = "web/search";
const POIS_PATH: &str = "local/pois";
const DESCRIPTIONS_PATH: &str = "local/descriptions";

/// HTTP client for the Brave Search API
#[derive(Debug, Clone)]
pub struct BraveClient {
    http: Client,
    base_url: String,
    api_key: ApiKey,
}

impl BraveClient {
    pub fn new(config: &ServerConfig) -> ConnectorResult<Self> {
        if config.base_url.is_empty() {
            return Err(ConnectorError::InvalidConfig("base URL is empty".to_string()));
        }

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Ranked web results rendered as text. `count` and `offset` are clamped to the
    /// provider's limits.
    pub async fn search_web(&self, query: &WebSearchQuery) -> ConnectorResult<String> {
        let count = clamp_count(query.count);
        let offset = query.offset.min(MAX_OFFSET);
        let params = [
            ("q", query.query.clone()),
            ("count", count.to_string()),
            ("offset", offset.to_string()),
        ];

        let response: WebSearchResponse = self.get_json(WEB_SEARCH_PATH, &params).await?;
        debug!("Web search returned {} results", response.web_results().len());
        Ok(render_web_results(&query.query, response.web_results()))
    }

    /// Places matching the query rendered as text. When the provider knows no places
    /// for the query this degrades to a single plain web search.
    pub async fn search_local(&self, query: &LocalSearchQuery) -> ConnectorResult<String> {
        let params = [
            ("q", query.query.clone()),
            ("search_lang", "en".to_string()),
            ("result_filter", "locations".to_string()),
            ("count", clamp_count(query.count).to_string()),
        ];

        let response: WebSearchResponse = self.get_json(WEB_SEARCH_PATH, &params).await?;
        let ids = response.location_ids();
        if ids.is_empty() {
            info!("No local results for '{}', falling back to web search", query.query);
            return self.search_web(&query.as_web_fallback()).await;
        }

        debug!("Resolving {} location ids", ids.len());
        let id_params: Vec<(&str, String)> = ids.iter().map(|id| ("ids", id.clone())).collect();
        let pois: PoiResponse = self.get_json(POIS_PATH, &id_params).await?;
        let descriptions: DescriptionsResponse = self.get_json(DESCRIPTIONS_PATH, &id_params).await?;

        Ok(render_local_results(&query.query, &pois.results, &descriptions))
    }

    /// One authenticated GET, decoded as JSON
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ConnectorResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(SUBSCRIPTION_TOKEN_HEADER, self.api_key.expose())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Brave API {} responded with {}", path, status);
            return Err(ConnectorError::Status { status, body: truncate(body.trim()) });
        }

        serde_json::from_str(&body).map_err(|e| ConnectorError::Decode {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl SearchBackend for BraveClient {
    async fn web_search(&self, query: &WebSearchQuery) -> ConnectorResult<String> {
        self.search_web(query).await
    }

    async fn local_search(&self, query: &LocalSearchQuery) -> ConnectorResult<String> {
        self.search_local(query).await
    }
}

fn clamp_count(count: u64) -> u64 {
    count.clamp(1, MAX_COUNT)
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_BODY_CHARS {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
        cut.push('…');
        cut
    }
}
