//! Orders domain module (event-sourced).
//!
//! An order collects menu positions while it is open and freezes once paid.
//! Pure domain logic: no IO, no storage.

pub mod order;

pub use order::{
    AddItem, ItemAdded, ItemRemoved, Order, OrderCommand, OrderEvent, OrderId, OrderPaid,
    OrderStatus, OrderTotals, PayOrder, RemoveItem,
};
