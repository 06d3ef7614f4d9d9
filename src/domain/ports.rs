use crate::domain::model::{Cart, CatalogProduct, ShippingQuote};
use crate::utils::error::LookupError;
use async_trait::async_trait;

/// 產品目錄查詢，只嘗試一次，失敗由呼叫端決定 fallback
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_product(&self, product_id: u64) -> Result<CatalogProduct, LookupError>;
}

/// 匯率來源
pub trait CurrencyProvider: Send + Sync {
    /// 商店目前使用的幣別
    fn working_currency(&self) -> &str;
    /// 指定幣別的匯率，沒有資料時回傳 None
    fn exchange_rate(&self, currency: &str) -> Option<f64>;
}

/// Carrier 設定 (啟用旗標、顯示文字)
pub trait CarrierConfig: Send + Sync {
    fn is_active(&self) -> bool;
    fn carrier_code(&self) -> &str;
    fn carrier_title(&self) -> &str;
    fn method_code(&self) -> &str;
    fn method_title(&self) -> &str;
    fn description(&self) -> &str;
}

/// 外部的資格規則，例如配送地區限制
pub trait EligibilityRule: Send + Sync {
    fn is_eligible(&self, cart: &Cart) -> bool;
}

impl<F> EligibilityRule for F
where
    F: Fn(&Cart) -> bool + Send + Sync,
{
    fn is_eligible(&self, cart: &Cart) -> bool {
        self(cart)
    }
}

/// 預設規則：全部接受
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl EligibilityRule for AcceptAll {
    fn is_eligible(&self, _cart: &Cart) -> bool {
        true
    }
}

#[async_trait]
pub trait ShippingCarrier: Send + Sync {
    fn is_available(&self) -> bool;
    async fn calculate(&self, cart: &Cart) -> Option<ShippingQuote>;
}
