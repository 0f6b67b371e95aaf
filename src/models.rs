use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unit count for order lines and warehouse stock
pub type Quantity = u32;

/// A customer order: requested quantity per item name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    pub items: HashMap<String, Quantity>,
}

impl Order {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Add or replace a line on the order
    pub fn set_item(&mut self, item: impl Into<String>, quantity: Quantity) {
        self.items.insert(item.into(), quantity);
    }

    /// Requested quantity for an item (0 when the item is not on the order)
    pub fn requested(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when no line requests anything
    pub fn is_all_zero(&self) -> bool {
        self.items.values().all(|&quantity| quantity == 0)
    }
}

/// A named stock source; position in the caller's list encodes priority
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub name: String,
    pub inventory: HashMap<String, Quantity>,
}

impl Warehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: HashMap::new(),
        }
    }

    /// Set the available stock for an item
    pub fn set_stock(&mut self, item: impl Into<String>, quantity: Quantity) {
        self.inventory.insert(item.into(), quantity);
    }

    /// Available stock for an item; absent and zero are equivalent
    pub fn stock_of(&self, item: &str) -> Quantity {
        self.inventory.get(item).copied().unwrap_or(0)
    }
}

/// One warehouse's contribution toward an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentEntry {
    pub warehouse: String,
    pub items: HashMap<String, Quantity>,
}

impl ShipmentEntry {
    pub fn new(warehouse: impl Into<String>) -> Self {
        Self {
            warehouse: warehouse.into(),
            items: HashMap::new(),
        }
    }

    /// Quantity this warehouse supplies for an item
    pub fn quantity_of(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// True when the warehouse supplied nothing
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Per-warehouse contributions in priority order; empty when the order
/// could not be fully covered
pub type Shipment = Vec<ShipmentEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_lines() {
        let mut order = Order::new();
        assert!(order.is_empty());

        order.set_item("apple", 3);
        order.set_item("banana", 0);

        assert_eq!(order.requested("apple"), 3);
        assert_eq!(order.requested("kiwi"), 0);
        assert!(!order.is_all_zero());

        order.set_item("apple", 0);
        assert!(order.is_all_zero());
    }

    #[test]
    fn test_warehouse_stock_lookup() {
        let mut warehouse = Warehouse::new("owd");
        warehouse.set_stock("apple", 5);
        warehouse.set_stock("banana", 0);

        assert_eq!(warehouse.stock_of("apple"), 5);
        // Zero stock and a missing item read the same
        assert_eq!(warehouse.stock_of("banana"), 0);
        assert_eq!(warehouse.stock_of("kiwi"), 0);
    }
}
