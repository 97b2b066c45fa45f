use serde::{Deserialize, Serialize};

use menuorder_core::ValueObject;

use crate::{Drink, Hamburger, Salad};

/// Anything that can be put on an order: it has a price and a calorie count,
/// both fixed when the item is built.
pub trait MenuItem {
    fn price(&self) -> f64;

    fn calories(&self) -> f64;
}

/// A (price, calories) pair from a recipe table.
///
/// Used both for complete recipes (drinks, salad baselines, hamburger sizes)
/// and for add-ons (hamburger stuffings).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub price: f64,
    pub calories: f64,
}

impl Recipe {
    pub const fn new(price: f64, calories: f64) -> Self {
        Self { price, calories }
    }

    /// Component-wise sum (base + add-on).
    pub fn plus(self, other: Recipe) -> Recipe {
        Recipe::new(self.price + other.price, self.calories + other.calories)
    }
}

/// Closed set of menu positions an order can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuPosition {
    Drink(Drink),
    Salad(Salad),
    Hamburger(Hamburger),
}

impl MenuPosition {
    /// Short label of the position kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MenuPosition::Drink(_) => "drink",
            MenuPosition::Salad(_) => "salad",
            MenuPosition::Hamburger(_) => "hamburger",
        }
    }
}

impl ValueObject for MenuPosition {}

impl MenuItem for MenuPosition {
    fn price(&self) -> f64 {
        match self {
            MenuPosition::Drink(d) => d.price(),
            MenuPosition::Salad(s) => s.price(),
            MenuPosition::Hamburger(h) => h.price(),
        }
    }

    fn calories(&self) -> f64 {
        match self {
            MenuPosition::Drink(d) => d.calories(),
            MenuPosition::Salad(s) => s.calories(),
            MenuPosition::Hamburger(h) => h.calories(),
        }
    }
}

impl From<Drink> for MenuPosition {
    fn from(value: Drink) -> Self {
        MenuPosition::Drink(value)
    }
}

impl From<Salad> for MenuPosition {
    fn from(value: Salad) -> Self {
        MenuPosition::Salad(value)
    }
}

impl From<Hamburger> for MenuPosition {
    fn from(value: Hamburger) -> Self {
        MenuPosition::Hamburger(value)
    }
}
