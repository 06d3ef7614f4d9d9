use crate::domain::model::CatalogProduct;
use crate::domain::ports::CatalogClient;
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    data: Option<CatalogProduct>,
}

/// `GET {base_url}/api/v1/products/{id}`，單次嘗試，有逾時
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    client: Client,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn product_url(&self, product_id: u64) -> String {
        format!("{}/api/v1/products/{}", self.base_url, product_id)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_product(&self, product_id: u64) -> std::result::Result<CatalogProduct, LookupError> {
        let url = self.product_url(product_id);
        tracing::debug!("Making catalog request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(LookupError::EmptyPayload);
        }

        let envelope: ProductEnvelope = serde_json::from_str(&body)?;
        envelope.data.ok_or(LookupError::EmptyPayload)
    }
}
