use crate::config::Config;
use crate::models::{
    error::AppError,
    market::{AvgUnitPriceRow, InventoryRow, MarketData, PriceRow},
};
use crate::services::wire;

// API CONFIGURATION
/// Configuration for the market data service client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    districts_path: String,
    prices_path: String,
    avg_prices_path: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn districts_url(&self) -> String {
        self.join(&self.districts_path)
    }

    pub fn prices_url(&self) -> String {
        self.join(&self.prices_path)
    }

    pub fn avg_prices_url(&self) -> String {
        self.join(&self.avg_prices_path)
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    districts_path: Option<String>,
    prices_path: Option<String>,
    avg_prices_path: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn districts_path(mut self, path: impl Into<String>) -> Self {
        self.districts_path = Some(path.into());
        self
    }

    pub fn prices_path(mut self, path: impl Into<String>) -> Self {
        self.prices_path = Some(path.into());
        self
    }

    pub fn avg_prices_path(mut self, path: impl Into<String>) -> Self {
        self.avg_prices_path = Some(path.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::api_base().to_string()),
            districts_path: self
                .districts_path
                .unwrap_or_else(|| Config::DISTRICTS_PATH.to_string()),
            prices_path: self
                .prices_path
                .unwrap_or_else(|| Config::PRICES_PATH.to_string()),
            avg_prices_path: self
                .avg_prices_path
                .unwrap_or_else(|| Config::AVG_PRICES_PATH.to_string()),
        }
    }
}

// MARKET SOURCE
/// Anything that can produce the three market tables.
#[allow(async_fn_in_trait)]
pub trait MarketSource {
    async fn fetch_inventory(&self) -> Result<Vec<InventoryRow>, AppError>;
    async fn fetch_prices(&self) -> Result<Vec<PriceRow>, AppError>;
    async fn fetch_avg_prices(&self) -> Result<Vec<AvgUnitPriceRow>, AppError>;
}

/// Fetches all three tables concurrently.
///
/// Either every table arrives or the whole load fails with the first error;
/// a partial snapshot is never returned.
pub async fn load_market<S: MarketSource>(source: &S) -> Result<MarketData, AppError> {
    let (inventory, prices, avg_prices) = futures::try_join!(
        source.fetch_inventory(),
        source.fetch_prices(),
        source.fetch_avg_prices()
    )?;

    Ok(MarketData::new(inventory, prices, avg_prices))
}

// MARKET CLIENT
/// HTTP client for the market data service.
pub struct MarketClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl MarketClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Loads a full market snapshot.
    pub async fn load(&self) -> Result<MarketData, AppError> {
        load_market(self).await
    }

    /// Executes a single GET and returns the body of a successful response.
    async fn fetch_body(&self, url: &str) -> Result<String, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Self::classify_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Self::classify_error(&e))?;

        if !status.is_success() {
            return Err(Self::error_for_status(status, &body));
        }

        Ok(body)
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(error: &reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Transport(format!("Request timeout: {error}"))
        } else if error.is_decode() {
            AppError::DataError(format!("Failed to read response: {error}"))
        } else {
            AppError::Transport(error.to_string())
        }
    }

    /// Creates an error based on HTTP status code, keeping the service's message if it sent one.
    fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
        match wire::service_error_message(body) {
            Some(message) => AppError::Service {
                status: status.as_u16(),
                message,
            },
            None => AppError::Status(status.as_u16()),
        }
    }
}

impl MarketSource for MarketClient {
    async fn fetch_inventory(&self) -> Result<Vec<InventoryRow>, AppError> {
        let body = self.fetch_body(&self.config.districts_url()).await?;
        wire::parse_inventory(&body)
    }

    async fn fetch_prices(&self) -> Result<Vec<PriceRow>, AppError> {
        let body = self.fetch_body(&self.config.prices_url()).await?;
        wire::parse_prices(&body)
    }

    async fn fetch_avg_prices(&self) -> Result<Vec<AvgUnitPriceRow>, AppError> {
        let body = self.fetch_body(&self.config.avg_prices_url()).await?;
        wire::parse_avg_prices(&body)
    }
}

// CONVENIENCE FUNCTIONS
/// Loads a market snapshot using default configuration.
pub async fn fetch_market() -> Result<MarketData, AppError> {
    MarketClient::new()?.load().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::room::ByRoom;
    use futures::executor::block_on;

    struct FakeSource {
        fail_prices: Option<AppError>,
    }

    impl MarketSource for FakeSource {
        async fn fetch_inventory(&self) -> Result<Vec<InventoryRow>, AppError> {
            Ok(vec![InventoryRow {
                district: "A".to_string(),
                total: 10,
                counts: ByRoom::new(1, 2, 3, 4),
            }])
        }

        async fn fetch_prices(&self) -> Result<Vec<PriceRow>, AppError> {
            match &self.fail_prices {
                Some(e) => Err(e.clone()),
                None => Ok(vec![PriceRow {
                    district: "A".to_string(),
                    avg_price_per_area: 40000.0,
                    price_per_area_by_room: ByRoom::new(1.0, 2.0, 3.0, 4.0),
                }]),
            }
        }

        async fn fetch_avg_prices(&self) -> Result<Vec<AvgUnitPriceRow>, AppError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().base_url("https://data.example").build();
        assert_eq!(config.districts_url(), "https://data.example/api/districts");
        assert_eq!(config.prices_url(), "https://data.example/api/prices");
        assert_eq!(config.avg_prices_url(), "https://data.example/api/avg-prices");
    }

    #[test]
    fn test_url_join_avoids_double_slash() {
        let config = ApiConfig::builder()
            .base_url("https://data.example/v2/")
            .prices_path("/sqm")
            .build();
        assert_eq!(config.prices_url(), "https://data.example/v2/sqm");
    }

    #[test]
    fn test_error_for_status_prefers_service_message() {
        let error = MarketClient::error_for_status(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
            r#"{"message": "upstream offline"}"#,
        );
        assert_eq!(
            error,
            AppError::Service {
                status: 503,
                message: "upstream offline".to_string()
            }
        );

        let error = MarketClient::error_for_status(reqwest::StatusCode::BAD_GATEWAY, "");
        assert_eq!(error, AppError::Status(502));
    }

    #[test]
    fn test_load_market_joins_all_tables() {
        let data = block_on(load_market(&FakeSource { fail_prices: None })).unwrap();
        assert_eq!(data.inventory.len(), 1);
        assert_eq!(data.prices.len(), 1);
        assert!(data.avg_prices.is_empty());
    }

    #[test]
    fn test_load_market_fails_when_any_fetch_fails() {
        let source = FakeSource {
            fail_prices: Some(AppError::Status(500)),
        };
        assert_eq!(block_on(load_market(&source)), Err(AppError::Status(500)));
    }

    #[test]
    fn test_client_creation() {
        assert!(MarketClient::new().is_ok());
    }
}
