//! Flavor Prep - Catalog HTTP client
//!
//! Two plain GETs against the card catalog: the bulk-data manifest, then
//! the bulk file it points at. Blocking, no retries.

use bytes::Bytes;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::{debug, info};

use crate::catalog::{self, format_size, BulkDescriptor, BulkManifest};
use crate::config::FetchConfig;
use crate::error::{Error, Result};

/// Blocking client for the bulk-data catalog.
pub struct CatalogClient {
    client: Client,
    config: FetchConfig,
}

impl CatalogClient {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// GET `url` and return the body, failing on any non-2xx status.
    fn get_bytes(&self, url: &str) -> Result<Bytes> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(resp.bytes()?)
    }

    /// Fetch the list of available bulk datasets.
    ///
    /// Sleeps for the configured courtesy delay first.
    pub fn fetch_manifest(&self) -> Result<BulkManifest> {
        std::thread::sleep(self.config.courtesy_delay);

        info!("Querying bulk-data catalog at {}", self.config.catalog_url);
        let body = self.get_bytes(&self.config.catalog_url)?;
        catalog::parse_manifest(&body)
    }

    /// Download the bulk file described by `descriptor`, returning the raw
    /// JSON body.
    pub fn download(&self, descriptor: &BulkDescriptor) -> Result<Bytes> {
        info!(
            "Downloading {}: {}",
            descriptor.display_name(),
            format_size(descriptor.size)
        );
        let body = self.get_bytes(&descriptor.download_uri)?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
