use std::sync::{Arc, OnceLock};

use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::HeatmapsConfig;
use crate::enrichment;
use crate::errors::ApiError;
use crate::lookups;
use crate::models::{KillRecord, MapStatistic};
use crate::rate_limit::RateLimiter;

/// Default maximum number of kill rows returned per query.
pub const DEFAULT_KILL_LIMIT: u32 = 50;

/// Filters for a kill data query.
///
/// An empty list means "unfiltered" for the list filters; `limit` is always
/// sent. Values are checked against the vocabularies in [`crate::lookups`]
/// before any request goes out.
#[derive(Debug, Clone)]
pub struct KillDataQuery {
    /// Columns to return; empty returns every column.
    pub fields: Vec<String>,
    /// Maximum number of rows to return.
    pub limit: u32,
    /// Keep only kills made by these classes.
    pub killer_classes: Vec<String>,
    /// Keep only kills made from these teams.
    pub killer_teams: Vec<String>,
    /// Keep only kills of victims of these classes.
    pub victim_classes: Vec<String>,
}

impl Default for KillDataQuery {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            limit: DEFAULT_KILL_LIMIT,
            killer_classes: Vec::new(),
            killer_teams: Vec::new(),
            victim_classes: Vec::new(),
        }
    }
}

impl KillDataQuery {
    /// Checks every filter list against its fixed vocabulary without
    /// sending anything.
    pub fn validate(&self) -> Result<(), ApiError> {
        check_vocabulary("fields", &self.fields, &lookups::QUERY_FIELDS)?;
        check_vocabulary("killer_classes", &self.killer_classes, &lookups::CLASSES)?;
        check_vocabulary("killer_teams", &self.killer_teams, &lookups::TEAMS)?;
        check_vocabulary("victim_classes", &self.victim_classes, &lookups::CLASSES)?;
        Ok(())
    }

    /// Validates the query and serializes it into wire parameters. List
    /// filters are joined into one comma-separated value each.
    fn to_params(&self) -> Result<Vec<(&'static str, String)>, ApiError> {
        self.validate()?;
        let mut params = vec![("limit", self.limit.to_string())];
        if !self.fields.is_empty() {
            params.push(("fields", self.fields.join(",")));
        }
        if !self.killer_classes.is_empty() {
            params.push(("killer_class", self.killer_classes.join(",")));
        }
        if !self.killer_teams.is_empty() {
            params.push(("killer_team", self.killer_teams.join(",")));
        }
        if !self.victim_classes.is_empty() {
            params.push(("victim_class", self.victim_classes.join(",")));
        }
        Ok(params)
    }
}

fn check_vocabulary(
    field: &'static str,
    values: &[String],
    allowed: &[&str],
) -> Result<(), ApiError> {
    let bad_values: Vec<String> = values
        .iter()
        .filter(|value| !allowed.contains(&value.as_str()))
        .cloned()
        .collect();
    if bad_values.is_empty() {
        Ok(())
    } else {
        tracing::error!("Rejected {} filter, bad values: {:?}", field, bad_values);
        Err(ApiError::InvalidFilter { field, bad_values })
    }
}

/// Map names are interpolated into the request path, so anything outside
/// the plain server-naming alphabet is rejected up front.
fn valid_map_name(name: &str) -> bool {
    static MAP_NAME: OnceLock<Regex> = OnceLock::new();
    MAP_NAME
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap())
        .is_match(name)
}

/// Client for the heatmaps.tf kill statistics API.
///
/// Holds one HTTP session reused for every call and a rate limiter that
/// spaces calls at least [`HeatmapsConfig::min_request_interval`] apart.
/// Cloning is cheap; clones share the session and the limiter, so they
/// count as the same client for spacing purposes.
#[derive(Debug, Clone)]
pub struct HeatmapsClient {
    http: Client,
    base_url: String,
    limiter: Arc<RateLimiter>,
}

impl HeatmapsClient {
    /// Creates a client against the public service with default settings.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(HeatmapsConfig::default())
    }

    /// Creates a client from explicit settings.
    pub fn with_config(config: HeatmapsConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| {
            ApiError::InvalidConfig(format!("Invalid base URL '{}': {}", base_url, e))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiError::InvalidConfig(format!(
                "Base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let http = Client::builder().timeout(config.request_timeout).build()?;

        tracing::info!(
            "Heatmaps client initialized: {} (min interval {}ms)",
            base_url,
            config.min_request_interval.as_millis()
        );

        Ok(Self {
            http,
            base_url,
            limiter: Arc::new(RateLimiter::new(config.min_request_interval)),
        })
    }

    /// Fetches the full list of maps with their kill counts.
    pub async fn get_map_statistics(&self) -> Result<Vec<MapStatistic>, ApiError> {
        let raw = self.get_map_statistics_raw().await?;
        serde_json::from_value(raw).map_err(|e| {
            ApiError::MalformedResponse(format!("Failed to parse map statistics: {}", e))
        })
    }

    /// Fetches the map list as unprocessed JSON.
    pub async fn get_map_statistics_raw(&self) -> Result<Value, ApiError> {
        self.get_json("data/maps.json", &[]).await
    }

    /// Fetches kill records for one map, named and enriched.
    ///
    /// Filters are validated before the request; see
    /// [`KillDataQuery::validate`]. The response is passed through
    /// [`crate::enrichment::enrich_kill_response`].
    pub async fn get_kill_data(
        &self,
        map_name: &str,
        query: &KillDataQuery,
    ) -> Result<Vec<KillRecord>, ApiError> {
        let raw = self.get_kill_data_raw(map_name, query).await?;
        enrichment::enrich_kill_response(&raw)
    }

    /// Fetches kill records for one map as unprocessed JSON. Filters are
    /// validated exactly as in [`HeatmapsClient::get_kill_data`].
    pub async fn get_kill_data_raw(
        &self,
        map_name: &str,
        query: &KillDataQuery,
    ) -> Result<Value, ApiError> {
        if !valid_map_name(map_name) {
            tracing::error!("Rejected map name: {:?}", map_name);
            return Err(ApiError::InvalidFilter {
                field: "map_name",
                bad_values: vec![map_name.to_string()],
            });
        }
        let params = query.to_params()?;
        let sub_path = format!("data/kills/{}.json", map_name);
        self.get_json(&sub_path, &params).await
    }

    /// Rate-limited GET against `{base_url}/{sub_path}` returning parsed
    /// JSON. The rate permit is held until the response is read, so the
    /// next call's interval starts when this one completes.
    async fn get_json(
        &self,
        sub_path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Value, ApiError> {
        let _permit = self.limiter.acquire().await;

        let full_url = format!("{}/{}", self.base_url, sub_path);
        let url = if params.is_empty() {
            Url::parse(&full_url)
        } else {
            Url::parse_with_params(&full_url, params)
        }
        .map_err(|e| {
            ApiError::InvalidConfig(format!("Failed to build URL for {}: {}", sub_path, e))
        })?;

        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            tracing::error!("Request to {} failed with status {}", url, status);
            return Err(ApiError::Status { status, url });
        }

        response.json().await.map_err(|e| {
            ApiError::MalformedResponse(format!("Failed to decode JSON from {}: {}", sub_path, e))
        })
    }
}
