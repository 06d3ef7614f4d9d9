pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{HttpCatalogClient, StaticCurrencyProvider};
pub use crate::config::{cli::LocalCartSource, toml_config::CarrierToml};
pub use crate::core::carrier::{TieredCarrier, WeightBreakdown};
pub use crate::domain::model::{Cart, CartItem, Dimensions, Product, ProductType, ShippingQuote};
pub use crate::domain::ports::{CatalogClient, CurrencyProvider, EligibilityRule, ShippingCarrier};
pub use crate::utils::error::{LookupError, Result, ShippingError};
