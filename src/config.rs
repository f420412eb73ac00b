/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Data service used when `REALTY_API_BASE` is not set at build time
    pub const DEFAULT_API_BASE: &'static str = "http://localhost:8080";

    /// Inventory counts by district and room count
    pub const DISTRICTS_PATH: &'static str = "/api/districts";

    /// Price per square metre by district and room count
    pub const PRICES_PATH: &'static str = "/api/prices";

    /// Average unit price by district and room count
    pub const AVG_PRICES_PATH: &'static str = "/api/avg-prices";

    /// Delay before charts re-render after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Fixed height of every chart container; width follows the page
    pub const CHART_HEIGHT_PX: u32 = 350;

    pub const CURRENCY_SYMBOL: &'static str = "₴";

    pub const THOUSANDS_SEPARATOR: char = ',';

    /// Shown in place of a value when a district is missing from a joined table
    pub const MISSING_PLACEHOLDER: &'static str = "—";

    /// Cyclic palette for categorical charts; slice `i` uses `PALETTE[i % 6]`
    pub const PALETTE: [&'static str; 6] = [
        "#8B5CF6", "#A855F7", "#C084FC", "#DDD6FE", "#6366F1", "#818CF8",
    ];

    /// Base URL of the data service, overridable at build time.
    pub fn api_base() -> &'static str {
        option_env!("REALTY_API_BASE").unwrap_or(Self::DEFAULT_API_BASE)
    }
}
