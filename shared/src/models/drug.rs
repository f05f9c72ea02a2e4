//! Drug catalog models

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::normalizer::normalize;

/// A drug record in one warehouse catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Sale price for a single unit
    #[serde(default)]
    pub unit_price: Decimal,
    #[serde(default)]
    pub discount_percent: Decimal,
    #[serde(default)]
    pub units_per_carton: Option<u32>,
    #[serde(default)]
    pub carton_size: Option<String>,
    #[serde(default)]
    pub batches: Vec<Batch>,
}

/// A lot of a drug on hand
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub lot_number: String,
    pub quantity: u32,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub purchase_price: Decimal,
}

/// Which catalog a drug record belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Warehouse {
    /// Sellable stock
    Sales,
    /// Back stock, moved to sales via requisition
    Main,
}

impl Warehouse {
    /// `"اصلی"` or `"main"` select the main warehouse; anything else is sales
    pub fn from_spoken(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "اصلی" | "انبار اصلی" | "main" => Warehouse::Main,
            _ => Warehouse::Sales,
        }
    }
}

impl Drug {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            manufacturer: None,
            unit_price: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            units_per_carton: None,
            carton_size: None,
            batches: Vec::new(),
        }
    }

    pub fn with_batch(mut self, lot_number: &str, quantity: u32, expiry_date: NaiveDate) -> Self {
        self.batches.push(Batch {
            lot_number: lot_number.to_string(),
            quantity,
            expiry_date,
            purchase_price: Decimal::ZERO,
        });
        self
    }

    /// Stock on hand across all batches
    pub fn total_stock(&self) -> u64 {
        self.batches.iter().map(|b| u64::from(b.quantity)).sum()
    }

    pub fn in_stock(&self) -> bool {
        self.total_stock() > 0
    }

    /// Phonetic skeleton of the display name
    pub fn skeleton(&self) -> String {
        normalize(&self.name)
    }

    /// Earliest-expiring batch that still has units on hand
    pub fn nearest_expiry(&self) -> Option<&Batch> {
        self.batches
            .iter()
            .filter(|b| b.quantity > 0)
            .min_by_key(|b| b.expiry_date)
    }

    /// Batches with stock that expire within `months` of `today` (already expired included)
    pub fn batches_expiring_within(&self, today: NaiveDate, months: u32) -> Vec<&Batch> {
        let horizon = today
            .checked_add_months(Months::new(months))
            .unwrap_or(NaiveDate::MAX);
        self.batches
            .iter()
            .filter(|b| b.quantity > 0 && b.expiry_date <= horizon)
            .collect()
    }
}
