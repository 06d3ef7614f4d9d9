//! Weight to base cost, denominated in the reference currency.

use std::fmt;

/// 空購物車 (總重 0) 的固定運費
pub const EMPTY_WEIGHT_COST: f64 = 101.5;

/// 超過最高級距後每公斤單價
pub const PER_KG_RATE: f64 = 13.297;

/// (含上限重量, 運費)，由小到大
pub const WEIGHT_TIERS: [(f64, f64); 6] = [
    (5.0, 135.51),
    (10.0, 155.71),
    (15.0, 185.95),
    (20.0, 255.78),
    (25.0, 326.52),
    (30.0, 397.57),
];

/// 最高級距的上限，超過後改用每公斤計價
pub const MAX_TIER_WEIGHT: f64 = WEIGHT_TIERS[WEIGHT_TIERS.len() - 1].0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tier {
    /// weight == 0
    Empty,
    /// weight <= limit
    UpTo { limit: f64, cost: f64 },
    /// weight > highest limit, linear
    PerKg { rate: f64 },
}

impl Tier {
    pub fn cost(&self, weight: f64) -> f64 {
        match self {
            Tier::Empty => EMPTY_WEIGHT_COST,
            Tier::UpTo { cost, .. } => *cost,
            Tier::PerKg { rate } => weight * rate,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Empty => write!(f, "= 0 kg"),
            Tier::UpTo { limit, .. } => write!(f, "<= {} kg", limit),
            Tier::PerKg { rate } => write!(f, "> {} kg @ {}/kg", MAX_TIER_WEIGHT, rate),
        }
    }
}

pub fn tier_for(weight: f64) -> Tier {
    if weight == 0.0 {
        return Tier::Empty;
    }

    WEIGHT_TIERS
        .iter()
        .find(|(limit, _)| weight <= *limit)
        .map(|&(limit, cost)| Tier::UpTo { limit, cost })
        .unwrap_or(Tier::PerKg { rate: PER_KG_RATE })
}

pub fn base_cost(weight: f64) -> f64 {
    let tier = tier_for(weight);
    let cost = tier.cost(weight);
    tracing::debug!(weight, tier = %tier, cost, "Resolved tariff tier");
    cost
}
