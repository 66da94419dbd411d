use std::time::Duration;

/// Public endpoint of the statistics service.
pub const DEFAULT_BASE_URL: &str = "http://heatmaps.tf";

/// Default minimum spacing between two successive API calls.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(500);

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a [`crate::HeatmapsClient`].
///
/// `Default` targets the public service; tests and alternate deployments
/// override `base_url`.
#[derive(Debug, Clone)]
pub struct HeatmapsConfig {
    /// Base address of the service (scheme + host, no trailing slash needed).
    pub base_url: String,
    /// Minimum delay enforced between successive API calls.
    pub min_request_interval: Duration,
    /// Timeout applied to every HTTP request.
    pub request_timeout: Duration,
}

impl Default for HeatmapsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            min_request_interval: DEFAULT_MIN_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl HeatmapsConfig {
    /// Loads configuration from the environment, falling back to the
    /// defaults for anything unset.
    ///
    /// Recognized variables: `HEATMAPS_BASE_URL`, `HEATMAPS_MIN_INTERVAL_MS`
    /// and `HEATMAPS_TIMEOUT_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            base_url: std::env::var("HEATMAPS_BASE_URL")
                .ok()
                .map(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("HEATMAPS_BASE_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("HEATMAPS_BASE_URL must start with http:// or https://");
                    }
                    Ok(url)
                })
                .transpose()?
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            min_request_interval: std::env::var("HEATMAPS_MIN_INTERVAL_MS")
                .ok()
                .map(|ms| {
                    ms.parse::<u64>().map(Duration::from_millis).map_err(|_| {
                        anyhow::anyhow!(
                            "HEATMAPS_MIN_INTERVAL_MS must be a whole number of milliseconds"
                        )
                    })
                })
                .transpose()?
                .unwrap_or(DEFAULT_MIN_INTERVAL),
            request_timeout: std::env::var("HEATMAPS_TIMEOUT_SECS")
                .ok()
                .map(|secs| {
                    secs.parse::<u64>().map(Duration::from_secs).map_err(|_| {
                        anyhow::anyhow!("HEATMAPS_TIMEOUT_SECS must be a whole number of seconds")
                    })
                })
                .transpose()?
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        };

        tracing::debug!("Base URL: {}", config.base_url);
        tracing::debug!(
            "Minimum request interval: {}ms",
            config.min_request_interval.as_millis()
        );

        Ok(config)
    }
}
