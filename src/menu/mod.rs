mod macros;
mod meal;
mod prices;
mod restaurant;

pub use macros::{MacroValue, Macros};
pub use meal::Meal;
pub use prices::{Eur, PriceTier, Prices};
pub use restaurant::{Restaurant, Restaurants};
