pub mod openfoodfacts;
pub mod traits;

// Re-export common types
pub use openfoodfacts::OpenFoodFactsClient;
pub use traits::ProductApi;
