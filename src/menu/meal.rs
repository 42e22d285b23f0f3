use std::collections::HashSet;

use super::{Macros, PriceTier, Prices};

/// One dish as served today. The name may carry a `[station]` suffix when
/// the restaurant splits its offering across serving points. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Meal {
    name: String,
    allergens: HashSet<String>,
    macros: Option<Macros>,
    price_tier: PriceTier,
    prices: Prices,
}

impl Meal {
    pub fn new(
        name: impl Into<String>,
        allergens: HashSet<String>,
        macros: Option<Macros>,
        price_tier: PriceTier,
        prices: Prices,
    ) -> Self {
        Self {
            name: name.into(),
            allergens,
            macros,
            price_tier,
            prices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn allergens(&self) -> &HashSet<String> {
        &self.allergens
    }

    pub const fn macros(&self) -> Option<&Macros> {
        self.macros.as_ref()
    }

    pub const fn price_tier(&self) -> PriceTier {
        self.price_tier
    }

    pub const fn prices(&self) -> &Prices {
        &self.prices
    }
}
