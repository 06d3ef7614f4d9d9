use crate::domain::ports::CurrencyProvider;

/// 沒有可用匯率時使用的中性匯率
pub const NEUTRAL_RATE: f64 = 1.0;

pub struct CurrencyNormalizer<P: CurrencyProvider> {
    provider: P,
}

impl<P: CurrencyProvider> CurrencyNormalizer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn working_currency(&self) -> &str {
        self.provider.working_currency()
    }

    /// 工作幣別的匯率；缺值、0、負數或非有限值都退回 1
    pub fn effective_rate(&self) -> f64 {
        let currency = self.provider.working_currency();
        match self.provider.exchange_rate(currency) {
            Some(rate) if rate.is_finite() && rate > 0.0 => rate,
            other => {
                tracing::warn!(
                    currency,
                    rate = ?other,
                    "No usable exchange rate, falling back to neutral rate"
                );
                NEUTRAL_RATE
            }
        }
    }

    pub fn to_working_currency(&self, base_cost: f64) -> f64 {
        base_cost / self.effective_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticCurrencyProvider;
    use std::collections::BTreeMap;

    fn normalizer(working: &str, rate: Option<f64>) -> CurrencyNormalizer<StaticCurrencyProvider> {
        let mut rates = BTreeMap::new();
        if let Some(rate) = rate {
            rates.insert(working.to_string(), rate);
        }
        CurrencyNormalizer::new(StaticCurrencyProvider::new(working, rates))
    }

    #[test]
    fn test_divides_by_exchange_rate() {
        let n = normalizer("EUR", Some(2.0));
        assert_eq!(n.working_currency(), "EUR");
        assert_eq!(n.to_working_currency(155.71), 155.71 / 2.0);
    }

    #[test]
    fn test_missing_rate_is_neutral() {
        let n = normalizer("TRY", None);
        assert_eq!(n.effective_rate(), 1.0);
        assert_eq!(n.to_working_currency(155.71), 155.71);
    }

    #[test]
    fn test_zero_rate_is_neutral() {
        assert_eq!(normalizer("USD", Some(0.0)).to_working_currency(42.5), 42.5);
    }

    #[test]
    fn test_negative_and_nan_rates_are_neutral() {
        assert_eq!(normalizer("USD", Some(-3.0)).to_working_currency(42.5), 42.5);
        assert_eq!(normalizer("USD", Some(f64::NAN)).to_working_currency(42.5), 42.5);
    }
}
