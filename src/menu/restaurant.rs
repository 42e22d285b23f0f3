use super::Meal;

/// One restaurant's offering for today. Meal names are unique within a
/// restaurant; a later meal with an already-seen name is dropped.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Restaurant {
    name: String,
    opening_hours: Option<String>,
    meals: Vec<Meal>,
}

impl Restaurant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opening_hours: None,
            meals: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn opening_hours(&self) -> Option<&str> {
        self.opening_hours.as_deref()
    }

    pub fn set_opening_hours(&mut self, hours: String) {
        self.opening_hours = Some(hours);
    }

    /// Returns whether the meal was kept. The first meal wins on a name
    /// collision.
    pub fn add_meal(&mut self, meal: Meal) -> bool {
        if self.meals.iter().any(|m| m.name() == meal.name()) {
            return false;
        }
        self.meals.push(meal);
        true
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }
}

/// Insertion-ordered, name-deduplicated run result handed to the
/// serialization layer.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct Restaurants {
    restaurants: Vec<Restaurant>,
}

impl Restaurants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the restaurant was kept; the first occurrence of a
    /// name wins.
    pub fn push(&mut self, restaurant: Restaurant) -> bool {
        if self.restaurants.iter().any(|r| r.name() == restaurant.name()) {
            return false;
        }
        self.restaurants.push(restaurant);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<Restaurant> {
        self.restaurants.iter()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::menu::{PriceTier, Prices};

    fn meal(name: &str) -> Meal {
        Meal::new(
            name,
            HashSet::new(),
            None,
            PriceTier::Other,
            Prices::default(),
        )
    }

    #[test]
    fn duplicate_meal_names_keep_the_first() {
        let mut restaurant = Restaurant::new("Galilei");
        assert!(restaurant.add_meal(meal("Soup")));
        assert!(restaurant.add_meal(meal("Pasta")));
        assert!(!restaurant.add_meal(meal("Soup")));
        assert_eq!(restaurant.meals().len(), 2);
    }

    #[test]
    fn duplicate_restaurant_names_keep_the_first() {
        let mut all = Restaurants::new();
        let mut first = Restaurant::new("Delica");
        first.add_meal(meal("Soup"));
        assert!(all.push(first));
        assert!(!all.push(Restaurant::new("Delica")));
        assert_eq!(all.len(), 1);
        assert_eq!(all.iter().next().unwrap().meals().len(), 1);
    }
}
