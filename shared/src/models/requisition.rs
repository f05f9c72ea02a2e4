//! Stock requisition models (main warehouse -> sales warehouse)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockRequisitionItem {
    pub drug_id: Uuid,
    pub drug_name: String,
    pub quantity_requested: u32,
    pub quantity_fulfilled: u32,
}

/// Payload handed whole to the requisition saver
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockRequisition {
    pub items: Vec<StockRequisitionItem>,
    pub notes: String,
}

impl StockRequisitionItem {
    pub fn new(drug_id: Uuid, drug_name: &str, quantity_requested: u32) -> Self {
        Self {
            drug_id,
            drug_name: drug_name.to_string(),
            quantity_requested,
            quantity_fulfilled: 0,
        }
    }
}

impl StockRequisition {
    pub fn total_requested(&self) -> u64 {
        self.items
            .iter()
            .map(|i| u64::from(i.quantity_requested))
            .sum()
    }
}
