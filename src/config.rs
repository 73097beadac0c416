//! Flavor Prep - Fetch configuration

use std::time::Duration;

/// Catalog endpoint listing the downloadable bulk datasets.
pub const CATALOG_URL: &str = "https://api.scryfall.com/bulk-data";

/// Descriptor type tag for the complete default card set.
pub const DEFAULT_BULK_TYPE: &str = "default_cards";

/// Only cards printed in this language are kept.
pub const TARGET_LANG: &str = "en";

/// `set_type` of novelty ("un-") releases, which are dropped.
pub const EXCLUDED_SET_TYPE: &str = "funny";

/// Pause before hitting the catalog, per the service's rate-limit guidance.
pub const COURTESY_DELAY: Duration = Duration::from_millis(500);

/// Settings for a bulk fetch.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub catalog_url: String,
    pub bulk_type: String,
    pub lang: String,
    pub excluded_set_type: String,
    pub courtesy_delay: Duration,
    pub connect_timeout: Duration,
    /// Whole-request timeout; the default-cards file is hundreds of MB.
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Honor `HTTP(S)_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            catalog_url: CATALOG_URL.to_string(),
            bulk_type: DEFAULT_BULK_TYPE.to_string(),
            lang: TARGET_LANG.to_string(),
            excluded_set_type: EXCLUDED_SET_TYPE.to_string(),
            courtesy_delay: COURTESY_DELAY,
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(600),
            user_agent: concat!("flavor-prep/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    pub fn with_bulk_type(mut self, bulk_type: impl Into<String>) -> Self {
        self.bulk_type = bulk_type.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_excluded_set_type(mut self, set_type: impl Into<String>) -> Self {
        self.excluded_set_type = set_type.into();
        self
    }

    pub fn with_courtesy_delay(mut self, delay: Duration) -> Self {
        self.courtesy_delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn without_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}
