use crate::domain::model::{CartItem, CatalogProduct, DimensionFields, Product, ProductType};
use crate::domain::ports::CatalogClient;
use crate::utils::error::LookupError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 記憶體內的 catalog，未登錄的產品回 404
#[derive(Default)]
pub struct StubCatalog {
    products: HashMap<u64, CatalogProduct>,
    fail_all: bool,
    calls: AtomicUsize,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn with_product(mut self, id: u64, product: CatalogProduct) -> Self {
        self.products.insert(id, product);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogClient for StubCatalog {
    async fn fetch_product(&self, product_id: u64) -> Result<CatalogProduct, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all {
            return Err(LookupError::EmptyPayload);
        }
        self.products
            .get(&product_id)
            .cloned()
            .ok_or(LookupError::Status { status: 404 })
    }
}

pub fn simple_item(
    id: u64,
    weight: Option<f64>,
    height: Option<f64>,
    width: Option<f64>,
    length: Option<f64>,
    quantity: u32,
) -> CartItem {
    CartItem {
        product: Product {
            id,
            product_type: ProductType::Simple,
            dimensions: DimensionFields {
                height,
                width,
                length,
                weight,
            },
        },
        variant_product_id: None,
        quantity,
    }
}

pub fn composite_item(id: u64, variant_product_id: Option<u64>, quantity: u32) -> CartItem {
    CartItem {
        product: Product {
            id,
            product_type: ProductType::Composite,
            dimensions: DimensionFields::default(),
        },
        variant_product_id,
        quantity,
    }
}
