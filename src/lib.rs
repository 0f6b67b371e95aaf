pub mod models;
pub mod allocator;
pub mod inventory;
pub mod shipping;
pub mod dispatch;

pub use models::{Order, Quantity, Shipment, ShipmentEntry, Warehouse};
pub use allocator::Allocator;
pub use inventory::{LedgerError, StockLedger};
pub use shipping::{ShipmentError, ShipmentRecord, ShipmentService};
pub use dispatch::{DispatchError, Dispatcher};
