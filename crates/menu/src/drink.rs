use core::str::FromStr;

use serde::{Deserialize, Serialize};

use menuorder_core::{DomainError, DomainResult, ValueObject, Vocabulary};

use crate::item::{MenuItem, Recipe};

/// Drinks on the menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrinkName {
    Cola,
    Coffee,
}

impl DrinkName {
    pub const ALL: [DrinkName; 2] = [DrinkName::Cola, DrinkName::Coffee];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkName::Cola => "Cola",
            DrinkName::Coffee => "Coffee",
        }
    }

    /// Price and calories of one serving.
    pub const fn recipe(self) -> Recipe {
        match self {
            DrinkName::Cola => Recipe::new(50.0, 40.0),
            DrinkName::Coffee => Recipe::new(80.0, 20.0),
        }
    }
}

impl core::fmt::Display for DrinkName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrinkName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrinkName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::unknown(Vocabulary::Drink, s))
    }
}

/// A drink: one serving, priced straight from the drink table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DrinkRecord", into = "DrinkRecord")]
pub struct Drink {
    name: DrinkName,
    recipe: Recipe,
}

#[derive(Serialize, Deserialize)]
struct DrinkRecord {
    name: DrinkName,
}

impl Drink {
    pub fn new(name: DrinkName) -> Self {
        Self {
            name,
            recipe: name.recipe(),
        }
    }

    /// Build a drink from its menu token (e.g. `"Cola"`).
    pub fn from_name(name: &str) -> DomainResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn name(&self) -> DrinkName {
        self.name
    }
}

impl MenuItem for Drink {
    fn price(&self) -> f64 {
        self.recipe.price
    }

    fn calories(&self) -> f64 {
        self.recipe.calories
    }
}

impl ValueObject for Drink {}

impl From<DrinkRecord> for Drink {
    fn from(record: DrinkRecord) -> Self {
        Drink::new(record.name)
    }
}

impl From<Drink> for DrinkRecord {
    fn from(drink: Drink) -> Self {
        DrinkRecord { name: drink.name }
    }
}
