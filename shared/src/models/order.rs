//! Sales order models

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed sales invoice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub created_at: NaiveDateTime,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub amount_paid: Decimal,
    #[serde(default)]
    pub total: Decimal,
}

/// A line on a sales invoice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub drug_id: Uuid,
    pub drug_name: String,
    pub quantity: u32,
    /// Free units, counted against stock but not revenue
    #[serde(default)]
    pub bonus_quantity: u32,
    pub original_price: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    pub final_price: Decimal,
}
