use crate::domain::model::Dimensions;

/// 立方公分換算公斤的體積重除數
pub const VOLUMETRIC_DIVISOR: f64 = 3000.0;

pub fn volumetric_weight(dimensions: &Dimensions) -> f64 {
    dimensions.width * dimensions.height * dimensions.length / VOLUMETRIC_DIVISOR
}

/// 實重與體積重取大者
pub fn chargeable_weight(dimensions: &Dimensions) -> f64 {
    dimensions.weight.max(volumetric_weight(dimensions))
}

pub fn total_chargeable_weight<I>(items: I) -> f64
where
    I: IntoIterator<Item = (Dimensions, u32)>,
{
    items
        .into_iter()
        .map(|(dimensions, quantity)| chargeable_weight(&dimensions) * f64::from(quantity))
        .sum()
}
