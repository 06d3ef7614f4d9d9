use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShippingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ShippingError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read input file: {}", e),
            Self::SerializationError(e) => format!("Cart file is not valid JSON: {}", e),
            Self::TomlError(e) => format!("Carrier config is not valid TOML: {}", e),
            Self::HttpClientError(e) => format!("Could not build catalog client: {}", e),
            Self::ConfigError { message } => message.clone(),
            Self::MissingConfigError { field } => format!("'{}' must be set", field),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file path exists and is readable",
            Self::SerializationError(_) => {
                "Cart JSON must look like {\"items\": [{\"product\": {...}, \"quantity\": 1}]}"
            }
            Self::TomlError(_) => "Compare the config against the [carrier]/[catalog]/[currency] layout",
            Self::HttpClientError(_) => "Check the TLS setup and catalog.timeout_ms",
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => "Fix the highlighted config value and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShippingError>;

/// Catalog 查詢失敗的原因，全部都會被 fallback 吸收
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog returned status {status}")]
    Status { status: u16 },

    #[error("catalog returned an empty payload")]
    EmptyPayload,

    #[error("catalog payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
