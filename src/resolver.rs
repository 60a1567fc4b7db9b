use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::api::traits::ProductApi;

pub const NAME_UNAVAILABLE: &str = "Product name not available";
pub const ECOSCORE_UNAVAILABLE: &str = "Not available";

/// Outcome of one barcode lookup. Built fresh per lookup and replaced
/// wholesale on the next one; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResult {
    pub name: String,
    pub ecoscore: String,
    pub image_url: Option<String>,
}

impl Default for ProductResult {
    fn default() -> Self {
        Self {
            name: NAME_UNAVAILABLE.to_string(),
            ecoscore: ECOSCORE_UNAVAILABLE.to_string(),
            image_url: None,
        }
    }
}

pub struct ProductResolver {
    api: Box<dyn ProductApi>,
}

impl ProductResolver {
    pub fn new(api: Box<dyn ProductApi>) -> Self {
        Self { api }
    }

    /// Maps a barcode to a `ProductResult`. Every failure path degrades to
    /// the sentinel values; no error reaches the caller.
    pub async fn resolve(&self, barcode: &str) -> ProductResult {
        let response = match self.api.product_by_barcode(barcode).await {
            Ok(response) => response,
            Err(e) => {
                error!("Open Food Facts lookup failed for {}: {}", barcode, e);
                return ProductResult::default();
            }
        };

        if response.status != 1 {
            error!(
                "Open Food Facts API error for {}: {}",
                barcode,
                response.status_verbose.as_deref().unwrap_or("unknown")
            );
            return ProductResult::default();
        }

        let record = response.product.unwrap_or_default();
        let name = record
            .product_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| NAME_UNAVAILABLE.to_string());

        let ecoscore = match record.ecoscore_grade.filter(|g| !g.is_empty()) {
            Some(grade) => grade,
            None => self.ecoscore_for_similar(&name).await,
        };

        ProductResult {
            name,
            ecoscore,
            image_url: record.image_url,
        }
    }

    // Free-text fallback, used only when the keyed lookup carries no grade.
    // The grade is read from the second hit, matching the shipped behavior.
    async fn ecoscore_for_similar(&self, name: &str) -> String {
        let response = match self.api.search_by_name(name).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Similar-product search failed for '{}': {}", name, e);
                return ECOSCORE_UNAVAILABLE.to_string();
            }
        };

        if response.status == 1 && !response.products.is_empty() {
            return response
                .products
                .get(1)
                .and_then(|hit| hit.ecoscore_grade.clone())
                .filter(|g| !g.is_empty())
                .unwrap_or_else(|| ECOSCORE_UNAVAILABLE.to_string());
        }

        ECOSCORE_UNAVAILABLE.to_string()
    }
}
