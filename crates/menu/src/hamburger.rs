use core::str::FromStr;

use serde::{Deserialize, Serialize};

use menuorder_core::{DomainError, DomainResult, ValueObject, Vocabulary};

use crate::item::{MenuItem, Recipe};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Large,
    Small,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Large, Size::Small];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Large => "large",
            Size::Small => "small",
        }
    }

    /// Base price and calories of a bun of this size.
    pub const fn base(self) -> Recipe {
        match self {
            Size::Large => Recipe::new(100.0, 40.0),
            Size::Small => Recipe::new(50.0, 20.0),
        }
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| DomainError::unknown(Vocabulary::Size, s))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stuffing {
    Cheese,
    Salad,
    Potato,
}

impl Stuffing {
    pub const ALL: [Stuffing; 3] = [Stuffing::Cheese, Stuffing::Salad, Stuffing::Potato];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stuffing::Cheese => "cheese",
            Stuffing::Salad => "salad",
            Stuffing::Potato => "potato",
        }
    }

    /// Price and calories the stuffing adds on top of the size base.
    pub const fn add_on(self) -> Recipe {
        match self {
            Stuffing::Cheese => Recipe::new(10.0, 20.0),
            Stuffing::Salad => Recipe::new(20.0, 5.0),
            Stuffing::Potato => Recipe::new(15.0, 10.0),
        }
    }
}

impl core::fmt::Display for Stuffing {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stuffing {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stuffing::ALL
            .into_iter()
            .find(|stuffing| stuffing.as_str() == s)
            .ok_or_else(|| DomainError::unknown(Vocabulary::Stuffing, s))
    }
}

/// A hamburger. Only the derived totals are kept; size and stuffing are
/// consumed by the constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Recipe", into = "Recipe")]
pub struct Hamburger {
    recipe: Recipe,
}

impl Hamburger {
    pub fn new(size: Size, stuffing: Stuffing) -> Self {
        Self {
            recipe: size.base().plus(stuffing.add_on()),
        }
    }

    /// Build a hamburger from menu tokens (e.g. `"large"`, `"potato"`).
    ///
    /// The size is checked first: with an unknown size the stuffing token is
    /// never looked at.
    pub fn from_names(size: &str, stuffing: &str) -> DomainResult<Self> {
        let size: Size = size.parse()?;
        let stuffing: Stuffing = stuffing.parse()?;
        Ok(Self::new(size, stuffing))
    }
}

impl MenuItem for Hamburger {
    fn price(&self) -> f64 {
        self.recipe.price
    }

    fn calories(&self) -> f64 {
        self.recipe.calories
    }
}

impl ValueObject for Hamburger {}

/// Accepts only totals some (size, stuffing) combination actually produces.
impl TryFrom<Recipe> for Hamburger {
    type Error = DomainError;

    fn try_from(recipe: Recipe) -> Result<Self, Self::Error> {
        Size::ALL
            .into_iter()
            .flat_map(|size| Stuffing::ALL.into_iter().map(move |s| Hamburger::new(size, s)))
            .find(|h| h.recipe == recipe)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "no hamburger costs {} with {} calories",
                    recipe.price, recipe.calories
                ))
            })
    }
}

impl From<Hamburger> for Recipe {
    fn from(hamburger: Hamburger) -> Self {
        hamburger.recipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_combination_is_base_plus_add_on() {
        let expected = [
            (Size::Large, Stuffing::Cheese, 110.0, 60.0),
            (Size::Large, Stuffing::Salad, 120.0, 45.0),
            (Size::Large, Stuffing::Potato, 115.0, 50.0),
            (Size::Small, Stuffing::Cheese, 60.0, 40.0),
            (Size::Small, Stuffing::Salad, 70.0, 25.0),
            (Size::Small, Stuffing::Potato, 65.0, 30.0),
        ];

        for (size, stuffing, price, calories) in expected {
            let burger = Hamburger::new(size, stuffing);
            assert_eq!(burger.price(), price, "{size} {stuffing}");
            assert_eq!(burger.calories(), calories, "{size} {stuffing}");
        }
    }

    #[test]
    fn from_names_parses_tokens() {
        let burger = Hamburger::from_names("large", "potato").unwrap();
        assert_eq!(burger.price(), 115.0);
        assert_eq!(burger.calories(), 50.0);
    }

    #[test]
    fn unknown_size_wins_over_unknown_stuffing() {
        let err = Hamburger::from_names("medium", "bacon").unwrap_err();
        assert_eq!(err, DomainError::unknown(Vocabulary::Size, "medium"));
    }

    #[test]
    fn unknown_stuffing_is_rejected() {
        let err = Hamburger::from_names("small", "bacon").unwrap_err();
        assert_eq!(err, DomainError::unknown(Vocabulary::Stuffing, "bacon"));
    }

    #[test]
    fn tokens_round_trip_through_display() {
        for size in Size::ALL {
            assert_eq!(size.to_string().parse::<Size>().unwrap(), size);
        }
        for stuffing in Stuffing::ALL {
            assert_eq!(stuffing.to_string().parse::<Stuffing>().unwrap(), stuffing);
        }
    }

    #[test]
    fn deserialization_rejects_off_menu_totals() {
        let json = serde_json::to_string(&Hamburger::new(Size::Small, Stuffing::Salad)).unwrap();
        assert_eq!(json, r#"{"price":70.0,"calories":25.0}"#);
        let back: Hamburger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Hamburger::new(Size::Small, Stuffing::Salad));

        let forged = serde_json::from_str::<Hamburger>(r#"{"price":1.0,"calories":1.0}"#);
        assert!(forged.is_err());
    }
}
