pub mod assembler;
pub mod carrier;
pub mod currency;
pub mod dimensions;
pub mod tariff;
pub mod weight;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{Cart, CartItem, Dimensions, ShippingQuote};
pub use crate::domain::ports::{CarrierConfig, CatalogClient, CurrencyProvider, ShippingCarrier};
pub use crate::utils::error::Result;
