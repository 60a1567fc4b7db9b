use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::traits::ProductApi;
use crate::config::OffConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub status: i64,
    pub status_verbose: Option<String>,
    pub product: Option<ProductRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_name: Option<String>,
    pub ecoscore_grade: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: i64,
    #[serde(default)]
    pub products: Vec<SearchHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub ecoscore_grade: Option<String>,
}

#[derive(Debug)]
pub struct OpenFoodFactsClient {
    product_base_url: String,
    search_base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(config: OffConfig) -> Self {
        Self {
            product_base_url: config.product_base_url,
            search_base_url: config.search_base_url,
        }
    }
}

#[async_trait]
impl ProductApi for OpenFoodFactsClient {
    async fn product_by_barcode(&self, barcode: &str) -> Result<ProductResponse, String> {
        let client = reqwest::Client::new();
        let url = format!("{}/api/v2/product/{}.json", self.product_base_url, barcode);

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        // Unknown barcodes come back as a JSON body with status 0 (often
        // under a 404), so parse the body regardless of the HTTP status.
        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn search_by_name(&self, terms: &str) -> Result<SearchResponse, String> {
        let client = reqwest::Client::new();
        let url = format!("{}/cgi/search.pl", self.search_base_url);

        let response = client
            .get(&url)
            .query(&[
                ("search_terms", terms),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
            ])
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("API request failed with status: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}
