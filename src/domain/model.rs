use serde::{Deserialize, Deserializer, Serialize};

/// 所有尺寸欄位缺值或非正數時的預設值
pub const DEFAULT_DIMENSION: f64 = 1.0;

/// 包裹尺寸 (cm / kg)，每次計算時重新產生
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub weight: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            height: DEFAULT_DIMENSION,
            width: DEFAULT_DIMENSION,
            length: DEFAULT_DIMENSION,
            weight: DEFAULT_DIMENSION,
        }
    }
}

/// 可選的尺寸覆蓋值，產品本身與 catalog 變體共用
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionFields {
    #[serde(default, deserialize_with = "lenient_number")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub length: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
}

impl DimensionFields {
    /// 逐欄合併：self 的正值優先，其次 fallback 的正值，最後為 1
    pub fn merge_over(&self, fallback: &DimensionFields) -> Dimensions {
        let pick = |primary: Option<f64>, secondary: Option<f64>| {
            positive(primary)
                .or_else(|| positive(secondary))
                .unwrap_or(DEFAULT_DIMENSION)
        };

        Dimensions {
            height: pick(self.height, fallback.height),
            width: pick(self.width, fallback.width),
            length: pick(self.length, fallback.length),
            weight: pick(self.weight, fallback.weight),
        }
    }

    /// 只用自身欄位，缺值補 1
    pub fn with_defaults(&self) -> Dimensions {
        self.merge_over(&DimensionFields::default())
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[serde(alias = "configurable")]
    Composite,
    /// 非組合商品 (virtual, downloadable, bundle ...) 一律走產品本身的尺寸
    #[default]
    #[serde(other)]
    Simple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default, rename = "type")]
    pub product_type: ProductType,
    #[serde(flatten)]
    pub dimensions: DimensionFields,
}

impl Product {
    pub fn is_composite(&self) -> bool {
        self.product_type == ProductType::Composite
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    #[serde(default, deserialize_with = "lenient_optional_id")]
    pub variant_product_id: Option<u64>,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

/// Catalog 回傳的變體
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogVariant {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(flatten)]
    pub dimensions: DimensionFields,
}

/// Catalog 產品資料 (`data` 欄位)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogProduct {
    #[serde(default)]
    pub variants: Vec<CatalogVariant>,
}

impl CatalogProduct {
    pub fn find_variant(&self, variant_id: Option<u64>) -> Option<&CatalogVariant> {
        let wanted = variant_id?;
        self.variants.iter().find(|variant| variant.id == wanted)
    }
}

/// Checkout 使用的運費報價
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub carrier_code: String,
    pub carrier_title: String,
    pub method_code: String,
    pub method_title: String,
    pub description: String,
    /// 工作幣別
    pub price: f64,
    /// 參考幣別，未換算的級距運費
    pub base_price: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

// Catalog API 常把小數序列化成字串 ("10.0000")
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrString> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdOrString {
    Id(u64),
    Text(String),
}

fn parse_id<E: serde::de::Error>(raw: IdOrString) -> std::result::Result<u64, E> {
    match raw {
        IdOrString::Id(id) => Ok(id),
        IdOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid id: {}", s))),
    }
}

fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_id(IdOrString::deserialize(deserializer)?)
}

fn lenient_optional_id<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IdOrString>::deserialize(deserializer)?
        .map(parse_id)
        .transpose()
}
