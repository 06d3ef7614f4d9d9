// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod currency;
pub mod http_catalog;

pub use currency::StaticCurrencyProvider;
pub use http_catalog::HttpCatalogClient;
