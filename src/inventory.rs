use crate::models::{Quantity, Shipment, Warehouse};
use std::collections::HashMap;
use tracing::info;

/// Caller-side stock book for a prioritized warehouse network.
///
/// The allocator reads warehouse stock as a snapshot and never depletes it;
/// carrying depletion across successive orders is the owner's job. The
/// ledger holds that authoritative stock, hands out priority-ordered
/// snapshots for allocation, and applies successful plans to them.
pub struct StockLedger {
    warehouses: Vec<Warehouse>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self {
            warehouses: Vec::new(),
        }
    }

    pub fn with_warehouses(warehouses: Vec<Warehouse>) -> Self {
        Self { warehouses }
    }

    /// Register a warehouse at the lowest priority (end of the list)
    pub fn add_warehouse(&mut self, warehouse: Warehouse) {
        self.warehouses.push(warehouse);
    }

    /// Current network, in priority order
    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    /// Stock for an item at a warehouse; `None` when the warehouse is unknown
    pub fn stock_of(&self, warehouse_name: &str, item: &str) -> Option<Quantity> {
        self.warehouses
            .iter()
            .find(|warehouse| warehouse.name == warehouse_name)
            .map(|warehouse| warehouse.stock_of(item))
    }

    /// Deduct every contribution in `shipment` from the named warehouses.
    ///
    /// The whole plan is verified first; a rejected commit leaves the ledger
    /// unchanged. Contributions to the same warehouse and item are checked
    /// cumulatively, so a plan cannot overdraw a line in aggregate.
    pub fn commit(&mut self, shipment: &Shipment) -> Result<(), LedgerError> {
        let mut deductions: HashMap<(usize, &str), Quantity> = HashMap::new();

        for entry in shipment {
            let index = self
                .warehouses
                .iter()
                .position(|warehouse| warehouse.name == entry.warehouse)
                .ok_or_else(|| LedgerError::UnknownWarehouse(entry.warehouse.clone()))?;

            for (item, &quantity) in &entry.items {
                let planned = deductions.entry((index, item.as_str())).or_insert(0);
                *planned += quantity;

                let available = self.warehouses[index].stock_of(item);
                if available < *planned {
                    return Err(LedgerError::InsufficientStock {
                        warehouse: entry.warehouse.clone(),
                        item: item.clone(),
                        requested: *planned,
                        available,
                    });
                }
            }
        }

        for ((index, item), quantity) in deductions {
            if let Some(stock) = self.warehouses[index].inventory.get_mut(item) {
                *stock -= quantity;
            }
        }

        info!("Committed shipment across {} warehouse(s)", shipment.len());
        Ok(())
    }

    /// Add stock for an item at a warehouse, creating the line if needed
    pub fn restock(
        &mut self,
        warehouse_name: &str,
        item: impl Into<String>,
        quantity: Quantity,
    ) -> Result<(), LedgerError> {
        let warehouse = self
            .warehouses
            .iter_mut()
            .find(|warehouse| warehouse.name == warehouse_name)
            .ok_or_else(|| LedgerError::UnknownWarehouse(warehouse_name.to_string()))?;

        let stock = warehouse.inventory.entry(item.into()).or_insert(0);
        *stock += quantity;
        Ok(())
    }
}

impl Default for StockLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Unknown warehouse: {0}")]
    UnknownWarehouse(String),

    #[error("Insufficient stock at {warehouse} for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        warehouse: String,
        item: String,
        requested: Quantity,
        available: Quantity,
    },
}
