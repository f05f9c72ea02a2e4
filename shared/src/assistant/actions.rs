//! UI actions emitted by intent handlers
//!
//! The core never applies these; an external reducer owns their meaning.
//! Wire shape: `{ "type": "ADD_ORDER_ITEM", "payload": { ... } }`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UiAction {
    StartNewSale,
    #[serde(rename_all = "camelCase")]
    SetCustomer { customer_id: Uuid, customer_name: String },
    /// Ad-hoc customer for the current invoice only, never persisted
    #[serde(rename_all = "camelCase")]
    SetTemporaryCustomer { customer_name: String },
    #[serde(rename_all = "camelCase")]
    AddOrderItem {
        drug_id: Uuid,
        drug_name: String,
        quantity: u32,
        bonus_quantity: u32,
        unit_price: Decimal,
        discount_percent: Decimal,
    },
    #[serde(rename_all = "camelCase")]
    SetPaymentAmount { amount: Decimal },
    SaveOrder,
    SaveAndPrintOrder,
    #[serde(rename_all = "camelCase")]
    AddExtraCharge { description: String, amount: Decimal },
    #[serde(rename_all = "camelCase")]
    RemoveOrderItem { drug_name: String },
    #[serde(rename_all = "camelCase")]
    EditOrderItemQuantity { drug_name: String, new_quantity: u32 },
    StartNewPurchaseBill,
    #[serde(rename_all = "camelCase")]
    SetPurchaseSupplier { supplier_name: String },
    #[serde(rename_all = "camelCase")]
    AddPurchaseItem {
        drug_id: Uuid,
        drug_name: String,
        quantity: Option<u32>,
        bonus_quantity: Option<u32>,
        purchase_price: Option<Decimal>,
        lot_number: Option<String>,
        expiry_date: Option<NaiveDate>,
    },
    SavePurchaseBill,
}

impl UiAction {
    /// Wire name of the action type
    pub fn type_name(&self) -> &'static str {
        match self {
            UiAction::StartNewSale => "START_NEW_SALE",
            UiAction::SetCustomer { .. } => "SET_CUSTOMER",
            UiAction::SetTemporaryCustomer { .. } => "SET_TEMPORARY_CUSTOMER",
            UiAction::AddOrderItem { .. } => "ADD_ORDER_ITEM",
            UiAction::SetPaymentAmount { .. } => "SET_PAYMENT_AMOUNT",
            UiAction::SaveOrder => "SAVE_ORDER",
            UiAction::SaveAndPrintOrder => "SAVE_AND_PRINT_ORDER",
            UiAction::AddExtraCharge { .. } => "ADD_EXTRA_CHARGE",
            UiAction::RemoveOrderItem { .. } => "REMOVE_ORDER_ITEM",
            UiAction::EditOrderItemQuantity { .. } => "EDIT_ORDER_ITEM_QUANTITY",
            UiAction::StartNewPurchaseBill => "START_NEW_PURCHASE_BILL",
            UiAction::SetPurchaseSupplier { .. } => "SET_PURCHASE_SUPPLIER",
            UiAction::AddPurchaseItem { .. } => "ADD_PURCHASE_ITEM",
            UiAction::SavePurchaseBill => "SAVE_PURCHASE_BILL",
        }
    }
}
