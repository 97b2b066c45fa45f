use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use menuorder_core::{Aggregate, AggregateId, AggregateRoot, DomainError, DomainResult, Event};
use menuorder_menu::{MenuItem, MenuPosition};

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub AggregateId);

impl OrderId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order status lifecycle. `Paid` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Paid,
}

/// Aggregate price and calories of an order.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub price: f64,
    pub calories: f64,
}

impl From<OrderTotals> for (f64, f64) {
    fn from(totals: OrderTotals) -> Self {
        (totals.price, totals.calories)
    }
}

/// Aggregate root: Order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    status: OrderStatus,
    items: Vec<MenuPosition>,
    paid_at: Option<DateTime<Utc>>,
    version: u64,
}

impl Order {
    /// Open a new order holding `items` in the given order.
    pub fn new(items: Vec<MenuPosition>) -> Self {
        Self::with_id(OrderId::new(AggregateId::new()), items)
    }

    pub fn with_id(id: OrderId, items: Vec<MenuPosition>) -> Self {
        Self {
            id,
            status: OrderStatus::Open,
            items,
            paid_at: None,
            version: 0,
        }
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        matches!(self.status, OrderStatus::Paid)
    }

    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }

    pub fn items(&self) -> &[MenuPosition] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum price and calories over all items, in insertion order.
    ///
    /// Valid in any status; an empty order totals to zero.
    pub fn count_order(&self) -> OrderTotals {
        self.items.iter().fold(OrderTotals::default(), |acc, item| OrderTotals {
            price: acc.price + item.price(),
            calories: acc.calories + item.calories(),
        })
    }

    /// Append an item. Fails with [`DomainError::OrderClosed`] once paid.
    pub fn add_item(&mut self, item: impl Into<MenuPosition>) -> DomainResult<()> {
        self.run(OrderCommand::AddItem(AddItem {
            item: item.into(),
            occurred_at: Utc::now(),
        }))
    }

    /// Remove the item at `index` (0-based); later items shift down by one.
    pub fn remove_item_by_index(&mut self, index: usize) -> DomainResult<()> {
        self.run(OrderCommand::RemoveItem(RemoveItem {
            index,
            occurred_at: Utc::now(),
        }))
    }

    /// Mark the order paid. Paying a paid order again changes nothing.
    pub fn pay(&mut self) -> DomainResult<()> {
        self.run(OrderCommand::PayOrder(PayOrder {
            occurred_at: Utc::now(),
        }))
    }

    fn run(&mut self, command: OrderCommand) -> DomainResult<()> {
        match self.execute(&command) {
            Ok(events) => {
                if events.is_empty() {
                    debug!(order_id = %self.id, ?command, "order command was a no-op");
                }
                for event in &events {
                    let kind = match event {
                        OrderEvent::ItemAdded(e) => Some(e.item.kind()),
                        OrderEvent::ItemRemoved(e) => Some(e.item.kind()),
                        OrderEvent::OrderPaid(_) => None,
                    };
                    debug!(
                        order_id = %self.id,
                        event_type = event.event_type(),
                        kind,
                        version = self.version,
                        "order event applied"
                    );
                }
                Ok(())
            }
            Err(err) => {
                warn!(order_id = %self.id, error = %err, "order command rejected");
                Err(err)
            }
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItem {
    pub item: MenuPosition,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub index: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Command: PayOrder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayOrder {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    PayOrder(PayOrder),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub order_id: OrderId,
    pub item: MenuPosition,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub order_id: OrderId,
    pub index: usize,
    pub item: MenuPosition,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderPaid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaid {
    pub order_id: OrderId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    OrderPaid(OrderPaid),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::ItemAdded(_) => "orders.order.item_added",
            OrderEvent::ItemRemoved(_) => "orders.order.item_removed",
            OrderEvent::OrderPaid(_) => "orders.order.paid",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::ItemAdded(e) => e.occurred_at,
            OrderEvent::ItemRemoved(e) => e.occurred_at,
            OrderEvent::OrderPaid(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = DomainError;

    /// Trusts events produced by `handle`: an `ItemRemoved` with an index
    /// past the end is a corrupted stream.
    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::ItemAdded(e) => {
                self.items.push(e.item.clone());
            }
            OrderEvent::ItemRemoved(e) => {
                debug_assert!(
                    e.index < self.items.len(),
                    "ItemRemoved index {} past end of {} item(s)",
                    e.index,
                    self.items.len()
                );
                if e.index < self.items.len() {
                    self.items.remove(e.index);
                }
            }
            OrderEvent::OrderPaid(e) => {
                self.status = OrderStatus::Paid;
                self.paid_at = Some(e.occurred_at);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::AddItem(cmd) => self.handle_add_item(cmd),
            OrderCommand::RemoveItem(cmd) => self.handle_remove_item(cmd),
            OrderCommand::PayOrder(cmd) => self.handle_pay(cmd),
        }
    }
}

impl Order {
    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.is_paid() {
            return Err(DomainError::OrderClosed);
        }
        Ok(())
    }

    fn handle_add_item(&self, cmd: &AddItem) -> Result<Vec<OrderEvent>, DomainError> {
        self.ensure_open()?;

        Ok(vec![OrderEvent::ItemAdded(ItemAdded {
            order_id: self.id,
            item: cmd.item.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove_item(&self, cmd: &RemoveItem) -> Result<Vec<OrderEvent>, DomainError> {
        self.ensure_open()?;

        let item = self
            .items
            .get(cmd.index)
            .ok_or_else(|| DomainError::index_out_of_range(cmd.index, self.items.len()))?;

        Ok(vec![OrderEvent::ItemRemoved(ItemRemoved {
            order_id: self.id,
            index: cmd.index,
            item: item.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_pay(&self, cmd: &PayOrder) -> Result<Vec<OrderEvent>, DomainError> {
        if self.is_paid() {
            return Ok(Vec::new());
        }

        Ok(vec![OrderEvent::OrderPaid(OrderPaid {
            order_id: self.id,
            occurred_at: cmd.occurred_at,
        })])
    }
}
