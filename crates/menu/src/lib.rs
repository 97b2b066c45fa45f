//! Menu domain module.
//!
//! Fixed-recipe menu positions (drinks, salads, hamburgers). Every position is
//! priced and calorie-counted once, at construction, from static recipe tables.

pub mod drink;
pub mod hamburger;
pub mod item;
pub mod salad;

pub use drink::{Drink, DrinkName};
pub use hamburger::{Hamburger, Size, Stuffing};
pub use item::{MenuItem, MenuPosition, Recipe};
pub use salad::{Salad, SaladName};
