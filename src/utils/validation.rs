use crate::utils::error::{Result, ShippingError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ShippingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 匯率必須是有限正數；0 或負值在執行期會被當成 1，但設定檔裡直接拒絕
pub fn validate_positive_rate(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Exchange rate must be a positive number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_currency_code(field_name: &str, value: &str) -> Result<()> {
    let valid = value.len() == 3 && value.chars().all(|c| c.is_ascii_uppercase());
    if !valid {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a three-letter uppercase ISO 4217 code".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("catalog.base_url", "https://shop.example.com").is_ok());
        assert!(validate_url("catalog.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("catalog.base_url", "").is_err());
        assert!(validate_url("catalog.base_url", "invalid-url").is_err());
        assert!(validate_url("catalog.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("catalog.timeout_ms", 5000, 1).is_ok());
        assert!(validate_positive_number("catalog.timeout_ms", 0, 1).is_err());
    }

    #[test]
    fn test_validate_positive_rate() {
        assert!(validate_positive_rate("currency.rates.EUR", 0.028).is_ok());
        assert!(validate_positive_rate("currency.rates.EUR", 0.0).is_err());
        assert!(validate_positive_rate("currency.rates.EUR", -1.0).is_err());
        assert!(validate_positive_rate("currency.rates.EUR", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("currency.working", "TRY").is_ok());
        assert!(validate_currency_code("currency.working", "try").is_err());
        assert!(validate_currency_code("currency.working", "EURO").is_err());
    }
}
