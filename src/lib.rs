pub mod api;
pub mod commands;
pub mod config;
pub mod resolver;
pub mod session;

// Re-export commonly used items
pub use resolver::{ProductResolver, ProductResult};
pub use session::ScanSession;
