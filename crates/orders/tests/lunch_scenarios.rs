//! End-to-end order scenarios built from menu tokens.

use menuorder_core::{DomainError, Vocabulary};
use menuorder_menu::{Drink, DrinkName, Hamburger, MenuItem, Salad, SaladName};
use menuorder_orders::{Order, OrderStatus};

#[test]
fn burger_and_coffee_then_pay() {
    let burger = Hamburger::from_names("large", "potato").unwrap();
    assert_eq!((burger.price(), burger.calories()), (115.0, 50.0));

    let coffee = Drink::new(DrinkName::Coffee);
    assert_eq!((coffee.price(), coffee.calories()), (80.0, 20.0));

    let mut order = Order::new(vec![burger.into(), coffee.into()]);
    assert_eq!(<(f64, f64)>::from(order.count_order()), (195.0, 70.0));

    order.pay().unwrap();
    assert_eq!(order.status(), OrderStatus::Paid);

    let err = order.add_item(Drink::new(DrinkName::Cola)).unwrap_err();
    assert_eq!(err, DomainError::OrderClosed);
    assert_eq!(<(f64, f64)>::from(order.count_order()), (195.0, 70.0));
    assert_eq!(order.len(), 2);
}

#[test]
fn caesar_salad_by_weight() {
    let salad = Salad::new(SaladName::Caesar, 200.0).unwrap();
    assert_eq!(salad.price(), 200.0);
    assert_eq!(salad.calories(), 40.0);
}

#[test]
fn edit_an_open_order_before_paying() {
    let mut order = Order::default();
    order.add_item(Hamburger::from_names("small", "cheese").unwrap()).unwrap();
    order.add_item(Salad::from_name("Olivie", 150.0).unwrap()).unwrap();
    order.add_item(Drink::from_name("Cola").unwrap()).unwrap();

    order.remove_item_by_index(0).unwrap();

    let totals = order.count_order();
    assert_eq!(totals.price, 75.0 + 50.0);
    assert_eq!(totals.calories, 120.0 + 40.0);

    order.pay().unwrap();
    assert_eq!(order.remove_item_by_index(0).unwrap_err(), DomainError::OrderClosed);
    assert_eq!(order.count_order(), totals);
}

#[test]
fn unknown_tokens_never_reach_the_order() {
    let mut order = Order::default();

    let result = Drink::from_name("Tea").and_then(|d| order.add_item(d));
    assert_eq!(result.unwrap_err(), DomainError::unknown(Vocabulary::Drink, "Tea"));
    assert!(order.is_empty());
}
