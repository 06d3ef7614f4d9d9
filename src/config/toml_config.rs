use crate::domain::ports::CarrierConfig;
use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CARRIER_CODE: &str = "tiered";
pub const DEFAULT_METHOD_CODE: &str = "tiered_standard";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_REFERENCE_CURRENCY: &str = "TRY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierToml {
    pub carrier: CarrierSection,
    pub catalog: CatalogSection,
    #[serde(default)]
    pub currency: CurrencySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierSection {
    #[serde(default = "default_carrier_code")]
    pub code: String,
    #[serde(default = "default_method_code")]
    pub method_code: String,
    pub title: String,
    pub method_title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencySection {
    #[serde(default = "default_reference_currency")]
    pub reference: String,
    #[serde(default = "default_reference_currency")]
    pub working: String,
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,
}

impl Default for CurrencySection {
    fn default() -> Self {
        Self {
            reference: default_reference_currency(),
            working: default_reference_currency(),
            rates: BTreeMap::new(),
        }
    }
}

fn default_carrier_code() -> String {
    DEFAULT_CARRIER_CODE.to_string()
}

fn default_method_code() -> String {
    DEFAULT_METHOD_CODE.to_string()
}

fn default_active() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_reference_currency() -> String {
    DEFAULT_REFERENCE_CURRENCY.to_string()
}

impl CarrierToml {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CATALOG_BASE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShippingError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        if let Some(missing) = re
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .find(|var_name| std::env::var(var_name).is_err())
        {
            return Err(ShippingError::MissingConfigError {
                field: format!("${{{}}}", missing),
            });
        }

        let result = re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Ok(result.to_string())
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog.timeout_ms)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("carrier.code", &self.carrier.code)?;
        validation::validate_non_empty_string("carrier.method_code", &self.carrier.method_code)?;
        validation::validate_non_empty_string("carrier.title", &self.carrier.title)?;

        validation::validate_url("catalog.base_url", &self.catalog.base_url)?;
        validation::validate_positive_number("catalog.timeout_ms", self.catalog.timeout_ms, 1)?;

        validation::validate_currency_code("currency.reference", &self.currency.reference)?;
        validation::validate_currency_code("currency.working", &self.currency.working)?;
        for (code, rate) in &self.currency.rates {
            validation::validate_currency_code("currency.rates", code)?;
            validation::validate_positive_rate(&format!("currency.rates.{}", code), *rate)?;
        }

        Ok(())
    }
}

impl CarrierConfig for CarrierToml {
    fn is_active(&self) -> bool {
        self.carrier.active
    }

    fn carrier_code(&self) -> &str {
        &self.carrier.code
    }

    fn carrier_title(&self) -> &str {
        &self.carrier.title
    }

    fn method_code(&self) -> &str {
        &self.carrier.method_code
    }

    fn method_title(&self) -> &str {
        self.carrier
            .method_title
            .as_deref()
            .unwrap_or(&self.carrier.title)
    }

    fn description(&self) -> &str {
        &self.carrier.description
    }
}

impl Validate for CarrierToml {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
