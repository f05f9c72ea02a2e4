//! Stock alert settings

use serde::{Deserialize, Serialize};

/// Thresholds used to decorate sale confirmations with warnings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettings {
    #[serde(default)]
    pub low_stock: LowStockAlert,
    #[serde(default)]
    pub expiry: ExpiryAlert,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LowStockAlert {
    pub enabled: bool,
    /// Warn when units on hand fall to or below this
    pub threshold: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryAlert {
    pub enabled: bool,
    /// Warn when a batch expires within this many months
    pub months: u32,
}

impl Default for LowStockAlert {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 10,
        }
    }
}

impl Default for ExpiryAlert {
    fn default() -> Self {
        Self {
            enabled: true,
            months: 3,
        }
    }
}

impl AlertSettings {
    /// Low-stock threshold, if that alert is enabled
    pub fn low_stock_threshold(&self) -> Option<u32> {
        self.low_stock.enabled.then_some(self.low_stock.threshold)
    }

    /// Expiry window in months, if that alert is enabled
    pub fn expiry_window_months(&self) -> Option<u32> {
        self.expiry.enabled.then_some(self.expiry.months)
    }
}
