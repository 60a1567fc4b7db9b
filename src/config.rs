use std::env;

#[derive(Debug, Clone)]
pub struct OffConfig {
    pub product_base_url: String,
    pub search_base_url: String,
}

impl OffConfig {
    pub fn from_env() -> Self {
        // Get base URLs from env or use the public world instance
        let product_base_url = env::var("OFF_API_URL")
            .unwrap_or_else(|_| "https://world.openfoodfacts.org".to_string());
        let search_base_url =
            env::var("OFF_SEARCH_URL").unwrap_or_else(|_| product_base_url.clone());

        Self {
            product_base_url,
            search_base_url,
        }
    }
}
