use crate::domain::model::Cart;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// 從本機 JSON 檔讀取購物車
#[derive(Debug, Clone)]
pub struct LocalCartSource {
    path: PathBuf,
}

impl LocalCartSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read_cart(&self) -> Result<Cart> {
        let data = fs::read(&self.path)?;
        let cart: Cart = serde_json::from_slice(&data)?;
        tracing::debug!("Loaded cart with {} items from {}", cart.items.len(), self.path.display());
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ShippingError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_cart_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let cart_json = serde_json::json!({
            "items": [
                {"product": {"id": 1, "type": "simple", "weight": 3, "height": 10, "width": 10, "length": 10}, "quantity": 2},
                {"product": {"id": 2, "type": "composite"}, "variant_product_id": 21, "quantity": 1}
            ]
        });
        temp_file
            .write_all(cart_json.to_string().as_bytes())
            .unwrap();

        let cart = LocalCartSource::new(temp_file.path()).read_cart().unwrap();
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[1].variant_product_id, Some(21));
    }

    #[test]
    fn test_read_cart_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ not json").unwrap();

        let result = LocalCartSource::new(temp_file.path()).read_cart();
        assert!(matches!(result, Err(ShippingError::SerializationError(_))));
    }

    #[test]
    fn test_read_cart_missing_file() {
        let result = LocalCartSource::new("/nonexistent/cart.json").read_cart();
        assert!(matches!(result, Err(ShippingError::IoError(_))));
    }
}
