use std::collections::HashMap;

/// One nutrient quantity, e.g. `12` of `"g"`. Used both for the calories
/// entry and every mapped nutrient row.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MacroValue {
    pub amount: f32,
    pub unit: String,
}

impl MacroValue {
    pub fn new(amount: f32, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }
}

/// Nutritional values per 100 g. Always carries a calories entry; a meal
/// without a nutrient table has no `Macros` at all rather than an empty one.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Macros {
    calories: MacroValue,
    nutrients: HashMap<String, MacroValue>,
}

impl Macros {
    pub fn new(calories: MacroValue) -> Self {
        Self {
            calories,
            nutrients: HashMap::new(),
        }
    }

    /// Keys are lower-cased nutrient names as they appear in the table.
    pub fn insert(&mut self, name: impl Into<String>, value: MacroValue) {
        self.nutrients.insert(name.into(), value);
    }

    pub const fn calories(&self) -> &MacroValue {
        &self.calories
    }

    pub fn nutrient(&self, name: &str) -> Option<&MacroValue> {
        self.nutrients.get(name)
    }
}
