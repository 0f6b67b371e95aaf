use crate::models::{Quantity, Shipment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A registered shipment plan with a durable identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub id: Uuid,
    pub reference: String,
    pub legs: Shipment,
    pub is_dispatched: bool,
    pub dispatched_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ShipmentRecord {
    pub fn new(reference: String, legs: Shipment) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference,
            legs,
            is_dispatched: false,
            dispatched_at: None,
            created_at: Utc::now(),
        }
    }

    /// Total quantity shipped for an item across all legs
    pub fn total_for(&self, item: &str) -> Quantity {
        self.legs.iter().map(|leg| leg.quantity_of(item)).sum()
    }

    /// Mark the record as handed over to the carrier
    pub fn dispatch(&mut self) {
        self.is_dispatched = true;
        self.dispatched_at = Some(Utc::now());
    }
}

/// Issues and tracks shipment records for fulfilled orders
pub struct ShipmentService {
    records: HashMap<Uuid, ShipmentRecord>,
}

impl ShipmentService {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Turn a successful allocation into a tracked record
    pub fn register(&mut self, legs: Shipment) -> Result<ShipmentRecord, ShipmentError> {
        if legs.is_empty() {
            return Err(ShipmentError::EmptyPlan);
        }

        let record = ShipmentRecord::new(self.generate_reference(), legs);
        self.records.insert(record.id, record.clone());
        Ok(record)
    }

    /// Get a record by ID
    pub fn get(&self, record_id: &Uuid) -> Option<&ShipmentRecord> {
        self.records.get(record_id)
    }

    /// Get a record by its human-readable reference
    pub fn get_by_reference(&self, reference: &str) -> Option<&ShipmentRecord> {
        self.records
            .values()
            .find(|record| record.reference == reference)
    }

    /// Mark a record as handed over (e.g., carrier pickup scanned)
    pub fn mark_dispatched(&mut self, reference: &str) -> Result<(), ShipmentError> {
        let record = self
            .records
            .values_mut()
            .find(|record| record.reference == reference)
            .ok_or_else(|| ShipmentError::NotFound(reference.to_string()))?;

        if record.is_dispatched {
            return Err(ShipmentError::AlreadyDispatched(reference.to_string()));
        }

        record.dispatch();
        Ok(())
    }

    /// Generate a unique shipment reference
    fn generate_reference(&self) -> String {
        // Format: SHIP-{timestamp}-{short_uuid}
        let timestamp = Utc::now().timestamp();
        let short_id = &Uuid::new_v4().to_string()[..8];
        format!("SHIP-{}-{}", timestamp, short_id.to_uppercase())
    }

    /// Compact JSON summary for downstream carriers
    pub fn manifest_json(&self, record: &ShipmentRecord) -> String {
        serde_json::json!({
            "reference": record.reference,
            "warehouses": record.legs.iter().map(|leg| leg.warehouse.clone()).collect::<Vec<_>>(),
            "created_at": record.created_at,
        })
        .to_string()
    }
}

impl Default for ShipmentService {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShipmentError {
    #[error("Cannot register an empty shipment plan")]
    EmptyPlan,

    #[error("Shipment not found: {0}")]
    NotFound(String),

    #[error("Shipment already dispatched: {0}")]
    AlreadyDispatched(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShipmentEntry;

    fn sample_legs() -> Shipment {
        let mut leg = ShipmentEntry::new("owd");
        leg.items.insert("apple".to_string(), 5);
        vec![leg]
    }

    #[test]
    fn test_register_and_lookup() {
        let mut service = ShipmentService::new();

        let record = service.register(sample_legs()).unwrap();
        assert!(record.reference.starts_with("SHIP-"));
        assert!(!record.is_dispatched);
        assert_eq!(record.total_for("apple"), 5);

        let found = service.get(&record.id).unwrap();
        assert_eq!(found.reference, record.reference);
        assert!(service.get_by_reference(&record.reference).is_some());
    }

    #[test]
    fn test_empty_plan_is_rejected() {
        let mut service = ShipmentService::new();

        let result = service.register(Vec::new());
        assert!(matches!(result, Err(ShipmentError::EmptyPlan)));
    }

    #[test]
    fn test_dispatch_is_one_shot() {
        let mut service = ShipmentService::new();
        let record = service.register(sample_legs()).unwrap();
        let reference = record.reference.clone();

        service.mark_dispatched(&reference).unwrap();
        assert!(service.get_by_reference(&reference).unwrap().is_dispatched);

        let result = service.mark_dispatched(&reference);
        assert!(matches!(result, Err(ShipmentError::AlreadyDispatched(_))));
    }

    #[test]
    fn test_manifest_lists_contributing_warehouses() {
        let mut service = ShipmentService::new();
        let record = service.register(sample_legs()).unwrap();

        let manifest = service.manifest_json(&record);
        assert!(manifest.contains(&record.reference));
        assert!(manifest.contains("owd"));
    }
}
