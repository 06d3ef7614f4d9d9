use crate::domain::model::{CartItem, Dimensions};
use crate::domain::ports::CatalogClient;

/// 解析購物車項目的尺寸；組合商品會查詢 catalog 的變體資料
pub struct DimensionResolver<K: CatalogClient> {
    catalog: K,
}

impl<K: CatalogClient> DimensionResolver<K> {
    pub fn new(catalog: K) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &K {
        &self.catalog
    }

    /// 永遠回傳完整的尺寸，catalog 失敗只會退回產品本身的欄位
    pub async fn resolve(&self, item: &CartItem) -> Dimensions {
        let product = &item.product;
        if !product.is_composite() {
            return product.dimensions.with_defaults();
        }

        let catalog_product = match self.catalog.fetch_product(product.id).await {
            Ok(catalog_product) => catalog_product,
            Err(e) => {
                tracing::warn!(
                    product_id = product.id,
                    error = %e,
                    "Catalog lookup failed, using product-level dimensions"
                );
                return product.dimensions.with_defaults();
            }
        };

        match catalog_product.find_variant(item.variant_product_id) {
            Some(variant) => variant.dimensions.merge_over(&product.dimensions),
            None => {
                tracing::debug!(
                    product_id = product.id,
                    variant_product_id = ?item.variant_product_id,
                    "No matching variant in catalog, using product-level dimensions"
                );
                product.dimensions.with_defaults()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{composite_item, simple_item, StubCatalog};
    use crate::domain::model::{CatalogProduct, CatalogVariant, DimensionFields};

    fn catalog_with_variant() -> StubCatalog {
        StubCatalog::new().with_product(
            100,
            CatalogProduct {
                variants: vec![CatalogVariant {
                    id: 101,
                    dimensions: DimensionFields {
                        height: Some(50.0),
                        width: None,
                        length: Some(0.0),
                        weight: Some(4.0),
                    },
                }],
            },
        )
    }

    #[tokio::test]
    async fn test_simple_product_skips_catalog() {
        let resolver = DimensionResolver::new(catalog_with_variant());
        let item = simple_item(1, Some(2.0), Some(10.0), None, None, 1);

        let dims = resolver.resolve(&item).await;

        assert_eq!(resolver.catalog().calls(), 0);
        assert_eq!(
            dims,
            Dimensions {
                height: 10.0,
                width: 1.0,
                length: 1.0,
                weight: 2.0,
            }
        );
    }

    #[tokio::test]
    async fn test_composite_uses_matched_variant_then_product_fields() {
        let resolver = DimensionResolver::new(catalog_with_variant());
        let mut item = composite_item(100, Some(101), 1);
        item.product.dimensions = DimensionFields {
            height: Some(10.0),
            width: Some(20.0),
            length: Some(30.0),
            weight: Some(1.0),
        };

        let dims = resolver.resolve(&item).await;

        assert_eq!(resolver.catalog().calls(), 1);
        assert_eq!(
            dims,
            Dimensions {
                height: 50.0,
                width: 20.0,
                length: 30.0,
                weight: 4.0,
            }
        );
    }

    #[tokio::test]
    async fn test_composite_without_matching_variant_uses_product_fields() {
        let resolver = DimensionResolver::new(catalog_with_variant());
        let mut item = composite_item(100, Some(999), 1);
        item.product.dimensions.weight = Some(7.0);
        item.product.dimensions.height = Some(12.0);

        let dims = resolver.resolve(&item).await;

        assert_eq!(dims.weight, 7.0);
        assert_eq!(dims.height, 12.0);
        assert_eq!(dims.width, 1.0);
    }

    #[tokio::test]
    async fn test_composite_without_variant_reference_uses_product_fields() {
        let resolver = DimensionResolver::new(catalog_with_variant());
        let mut item = composite_item(100, None, 1);
        item.product.dimensions.weight = Some(3.0);

        let dims = resolver.resolve(&item).await;

        assert_eq!(resolver.catalog().calls(), 1);
        assert_eq!(dims.weight, 3.0);
    }

    #[tokio::test]
    async fn test_catalog_failure_falls_back_to_product_fields() {
        let resolver = DimensionResolver::new(StubCatalog::failing());
        let mut item = composite_item(100, Some(101), 1);
        item.product.dimensions.weight = Some(8.0);

        let dims = resolver.resolve(&item).await;

        assert_eq!(resolver.catalog().calls(), 1);
        assert_eq!(dims.weight, 8.0);
        assert_eq!(dims.height, 1.0);
    }
}
