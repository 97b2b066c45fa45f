use core::str::FromStr;

use serde::{Deserialize, Serialize};

use menuorder_core::{DomainError, DomainResult, ValueObject, Vocabulary};

use crate::item::{MenuItem, Recipe};

/// Grams the salad baselines are quoted for.
pub const BASELINE_WEIGHT: f64 = 100.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaladName {
    Caesar,
    Olivie,
}

impl SaladName {
    pub const ALL: [SaladName; 2] = [SaladName::Caesar, SaladName::Olivie];

    pub fn as_str(&self) -> &'static str {
        match self {
            SaladName::Caesar => "Caesar",
            SaladName::Olivie => "Olivie",
        }
    }

    /// Price and calories per [`BASELINE_WEIGHT`] grams.
    pub const fn baseline(self) -> Recipe {
        match self {
            SaladName::Caesar => Recipe::new(100.0, 20.0),
            SaladName::Olivie => Recipe::new(50.0, 80.0),
        }
    }
}

impl core::fmt::Display for SaladName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaladName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SaladName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::unknown(Vocabulary::Salad, s))
    }
}

/// A salad sold by weight; price and calories scale linearly from the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SaladRecord", into = "SaladRecord")]
pub struct Salad {
    name: SaladName,
    weight: f64,
    recipe: Recipe,
}

#[derive(Serialize, Deserialize)]
struct SaladRecord {
    name: SaladName,
    weight: f64,
}

impl Salad {
    /// Build a salad of `weight` grams. The weight must be finite and positive.
    pub fn new(name: SaladName, weight: f64) -> DomainResult<Self> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(DomainError::validation(format!(
                "salad weight must be a positive number of grams, got {weight}"
            )));
        }

        let baseline = name.baseline();
        let recipe = Recipe::new(
            baseline.price * weight / BASELINE_WEIGHT,
            baseline.calories * weight / BASELINE_WEIGHT,
        );
        if !recipe.price.is_finite() || !recipe.calories.is_finite() {
            return Err(DomainError::validation(format!(
                "salad weight {weight} is too large to price"
            )));
        }

        Ok(Self {
            name,
            weight,
            recipe,
        })
    }

    /// Build a salad from its menu token (e.g. `"Caesar"`).
    pub fn from_name(name: &str, weight: f64) -> DomainResult<Self> {
        Self::new(name.parse()?, weight)
    }

    pub fn name(&self) -> SaladName {
        self.name
    }

    /// Weight in grams.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl MenuItem for Salad {
    fn price(&self) -> f64 {
        self.recipe.price
    }

    fn calories(&self) -> f64 {
        self.recipe.calories
    }
}

impl ValueObject for Salad {}

impl TryFrom<SaladRecord> for Salad {
    type Error = DomainError;

    fn try_from(record: SaladRecord) -> Result<Self, Self::Error> {
        Salad::new(record.name, record.weight)
    }
}

impl From<Salad> for SaladRecord {
    fn from(salad: Salad) -> Self {
        SaladRecord {
            name: salad.name,
            weight: salad.weight,
        }
    }
}
