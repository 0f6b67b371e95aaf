use crate::allocator::Allocator;
use crate::inventory::{LedgerError, StockLedger};
use crate::models::Order;
use crate::shipping::{ShipmentError, ShipmentRecord, ShipmentService};
use tracing::{info, warn};

/// Runs orders through the full flow: allocate against the current stock,
/// deduct the stock, record the shipment.
///
/// Strictly sequential; each dispatched order observes the depletion left by
/// the previous ones. Callers that need true multi-order concurrency must
/// serialize access themselves.
pub struct Dispatcher {
    allocator: Allocator,
    ledger: StockLedger,
    shipments: ShipmentService,
}

impl Dispatcher {
    pub fn new(ledger: StockLedger) -> Self {
        Self {
            allocator: Allocator::new(),
            ledger,
            shipments: ShipmentService::new(),
        }
    }

    /// Allocate and fulfil one order end to end
    pub fn dispatch(&mut self, order: &Order) -> Result<ShipmentRecord, DispatchError> {
        if order.is_empty() || order.is_all_zero() {
            return Err(DispatchError::EmptyOrder);
        }

        let plan = self.allocator.allocate(order, self.ledger.warehouses());
        if plan.is_empty() {
            warn!("Order cannot be covered by the current network");
            return Err(DispatchError::Unfulfillable);
        }

        self.ledger.commit(&plan)?;
        let record = self.shipments.register(plan)?;
        info!("Order dispatched as {}", record.reference);
        Ok(record)
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut StockLedger {
        &mut self.ledger
    }

    pub fn shipments(&self) -> &ShipmentService {
        &self.shipments
    }

    pub fn shipments_mut(&mut self) -> &mut ShipmentService {
        &mut self.shipments
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Order has no quantity to fulfil")]
    EmptyOrder,

    #[error("Order cannot be fully covered by the available stock")]
    Unfulfillable,

    #[error("Stock deduction failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Shipment registration failed: {0}")]
    Shipment(#[from] ShipmentError),
}
