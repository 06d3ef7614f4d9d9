use crate::config::toml_config::CurrencySection;
use crate::domain::ports::CurrencyProvider;
use std::collections::BTreeMap;

/// 由設定檔提供固定匯率表
#[derive(Debug, Clone)]
pub struct StaticCurrencyProvider {
    working: String,
    rates: BTreeMap<String, f64>,
}

impl StaticCurrencyProvider {
    pub fn new(working: impl Into<String>, rates: BTreeMap<String, f64>) -> Self {
        Self {
            working: working.into(),
            rates,
        }
    }

    pub fn from_config(section: &CurrencySection) -> Self {
        Self::new(section.working.clone(), section.rates.clone())
    }
}

impl CurrencyProvider for StaticCurrencyProvider {
    fn working_currency(&self) -> &str {
        &self.working
    }

    fn exchange_rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }
}
