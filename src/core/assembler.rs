use crate::core::currency::CurrencyNormalizer;
use crate::domain::model::ShippingQuote;
use crate::domain::ports::{CarrierConfig, CurrencyProvider};

/// 將級距運費包裝成 checkout 需要的報價
pub struct RateAssembler<'a, C: CarrierConfig, P: CurrencyProvider> {
    config: &'a C,
    normalizer: &'a CurrencyNormalizer<P>,
}

impl<'a, C: CarrierConfig, P: CurrencyProvider> RateAssembler<'a, C, P> {
    pub fn new(config: &'a C, normalizer: &'a CurrencyNormalizer<P>) -> Self {
        Self { config, normalizer }
    }

    pub fn assemble(&self, total_base_cost: f64) -> ShippingQuote {
        ShippingQuote {
            carrier_code: self.config.carrier_code().to_string(),
            carrier_title: self.config.carrier_title().to_string(),
            method_code: self.config.method_code().to_string(),
            method_title: self.config.method_title().to_string(),
            description: self.config.description().to_string(),
            price: self.normalizer.to_working_currency(total_base_cost),
            base_price: total_base_cost,
        }
    }
}
