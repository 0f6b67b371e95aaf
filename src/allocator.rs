use crate::models::{Order, Quantity, Shipment, ShipmentEntry, Warehouse};
use std::collections::HashMap;
use tracing::debug;

/// Greedy order allocation across a prioritized warehouse list
pub struct Allocator;

impl Allocator {
    pub fn new() -> Self {
        Self
    }

    /// Build a shipment plan that fully covers `order`, drawing stock from
    /// `warehouses` strictly in the given order.
    ///
    /// Earlier warehouses are drained first, per item, up to the remaining
    /// requested amount. Every warehouse consulted before the order is
    /// covered appears in the plan, including warehouses that supplied
    /// nothing. If the order cannot be fully covered the plan is empty;
    /// there is no partial result. An empty or all-zero order, or an empty
    /// warehouse list, also yields an empty plan. The caller's `order` is
    /// never modified.
    pub fn allocate(&self, order: &Order, warehouses: &[Warehouse]) -> Shipment {
        if order.is_empty() || warehouses.is_empty() || order.is_all_zero() {
            return Vec::new();
        }

        // Working copy of the outstanding quantity per item
        let mut remaining: HashMap<String, Quantity> = order.items.clone();
        let mut plan: Shipment = Vec::new();

        for warehouse in warehouses {
            let mut entry = ShipmentEntry::new(warehouse.name.clone());

            for (item, outstanding) in remaining.iter_mut() {
                if *outstanding == 0 {
                    continue;
                }
                let stock = warehouse.stock_of(item);
                if stock == 0 {
                    continue;
                }

                let ship = stock.min(*outstanding);
                entry.items.insert(item.clone(), ship);
                *outstanding -= ship;
            }

            plan.push(entry);

            if remaining.values().all(|&outstanding| outstanding == 0) {
                debug!("Order covered by {} warehouse(s)", plan.len());
                return plan;
            }
        }

        debug!("Order not fully coverable, discarding partial plan");
        Vec::new()
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}
