use async_trait::async_trait;

use super::openfoodfacts::{ProductResponse, SearchResponse};

/// Seam over the external product database. The scanner core only ever
/// needs the keyed product lookup and the free-text search behind it.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn product_by_barcode(&self, barcode: &str) -> Result<ProductResponse, String>;

    async fn search_by_name(&self, terms: &str) -> Result<SearchResponse, String>;
}
