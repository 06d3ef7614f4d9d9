use crate::adapters::{HttpCatalogClient, StaticCurrencyProvider};
use crate::config::toml_config::CarrierToml;
use crate::core::assembler::RateAssembler;
use crate::core::currency::CurrencyNormalizer;
use crate::core::dimensions::DimensionResolver;
use crate::core::tariff::{self, Tier};
use crate::core::weight;
use crate::domain::model::{Cart, Dimensions, ShippingQuote};
use crate::domain::ports::{
    AcceptAll, CarrierConfig, CatalogClient, CurrencyProvider, EligibilityRule, ShippingCarrier,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 單一項目的計費重量明細
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWeight {
    pub product_id: u64,
    pub variant_product_id: Option<u64>,
    pub dimensions: Dimensions,
    pub chargeable_weight: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightBreakdown {
    pub items: Vec<ItemWeight>,
    pub total_weight: f64,
    pub tier: Tier,
    pub base_cost: f64,
}

/// 依重量級距計價的 carrier
pub struct TieredCarrier<C: CarrierConfig, K: CatalogClient, P: CurrencyProvider> {
    config: C,
    resolver: DimensionResolver<K>,
    normalizer: CurrencyNormalizer<P>,
    eligibility: Box<dyn EligibilityRule>,
}

impl<C: CarrierConfig, K: CatalogClient, P: CurrencyProvider> TieredCarrier<C, K, P> {
    pub fn new(config: C, catalog: K, currency: P) -> Self {
        Self {
            config,
            resolver: DimensionResolver::new(catalog),
            normalizer: CurrencyNormalizer::new(currency),
            eligibility: Box::new(AcceptAll),
        }
    }

    pub fn with_eligibility(mut self, rule: impl EligibilityRule + 'static) -> Self {
        self.eligibility = Box::new(rule);
        self
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn normalizer(&self) -> &CurrencyNormalizer<P> {
        &self.normalizer
    }

    /// 逐項解析尺寸並計算總計費重量與級距
    pub async fn weigh(&self, cart: &Cart) -> WeightBreakdown {
        let mut items = Vec::with_capacity(cart.items.len());
        for item in &cart.items {
            let dimensions = self.resolver.resolve(item).await;
            let chargeable_weight = weight::chargeable_weight(&dimensions);
            tracing::debug!(
                product_id = item.product.id,
                chargeable_weight,
                quantity = item.quantity,
                "Resolved item weight"
            );
            items.push(ItemWeight {
                product_id: item.product.id,
                variant_product_id: item.variant_product_id,
                dimensions,
                chargeable_weight,
                quantity: item.quantity,
            });
        }

        let total_weight =
            weight::total_chargeable_weight(items.iter().map(|i| (i.dimensions, i.quantity)));
        let tier = tariff::tier_for(total_weight);

        WeightBreakdown {
            items,
            total_weight,
            tier,
            base_cost: tariff::base_cost(total_weight),
        }
    }
}

impl TieredCarrier<CarrierToml, HttpCatalogClient, StaticCurrencyProvider> {
    /// 由 TOML 設定建立 HTTP catalog 與固定匯率表
    pub fn from_toml(config: CarrierToml) -> Result<Self> {
        let catalog = HttpCatalogClient::new(config.catalog.base_url.clone(), config.catalog_timeout())?;
        let currency = StaticCurrencyProvider::from_config(&config.currency);
        Ok(Self::new(config, catalog, currency))
    }
}

#[async_trait]
impl<C: CarrierConfig, K: CatalogClient, P: CurrencyProvider> ShippingCarrier
    for TieredCarrier<C, K, P>
{
    fn is_available(&self) -> bool {
        self.config.is_active()
    }

    async fn calculate(&self, cart: &Cart) -> Option<ShippingQuote> {
        if !self.is_available() {
            tracing::debug!(carrier = self.config.carrier_code(), "Carrier is disabled");
            return None;
        }
        if !self.eligibility.is_eligible(cart) {
            tracing::debug!(carrier = self.config.carrier_code(), "Cart rejected by eligibility rule");
            return None;
        }

        let breakdown = self.weigh(cart).await;
        let quote = RateAssembler::new(&self.config, &self.normalizer).assemble(breakdown.base_cost);

        tracing::info!(
            carrier = %quote.carrier_code,
            total_weight = breakdown.total_weight,
            base_price = quote.base_price,
            price = quote.price,
            currency = self.normalizer.working_currency(),
            "Shipping quote produced"
        );
        Some(quote)
    }
}
