//! Per-call handler context: a read-only data snapshot plus effect callbacks

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::actions::UiAction;
use crate::models::{AlertSettings, Customer, Drug, Order, StockRequisition};
use crate::types::Language;

/// Data the UI hands the assistant for one command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSnapshot {
    /// Sales warehouse catalog (sellable stock)
    #[serde(default)]
    pub drugs: Vec<Drug>,
    #[serde(default)]
    pub main_warehouse_drugs: Vec<Drug>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Customer name -> signed balance (positive means the customer owes)
    #[serde(default)]
    pub customer_balances: HashMap<String, Decimal>,
    #[serde(default)]
    pub alert_settings: AlertSettings,
    /// Page currently shown by the UI, e.g. `"sales"`
    #[serde(default)]
    pub active_item: Option<String>,
    #[serde(default)]
    pub active_screen_text: Option<String>,
}

/// Side-effect channel; every call is fire-and-forget
pub trait AssistantEffects {
    fn dispatch_ui_action(&self, action: UiAction);
    fn save_requisition(&self, requisition: StockRequisition);
    fn navigate(&self, page: &str);
    fn set_assistant_open(&self, open: bool);
}

/// One recorded side effect
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Effect {
    UiAction(UiAction),
    SaveRequisition(StockRequisition),
    Navigate(String),
    SetAssistantOpen(bool),
}

/// Collects effects in call order for a caller to apply later
#[derive(Debug, Default)]
pub struct RecordedEffects {
    effects: RefCell<Vec<Effect>>,
}

impl RecordedEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_effects(self) -> Vec<Effect> {
        self.effects.into_inner()
    }

    pub fn actions(&self) -> Vec<UiAction> {
        self.effects
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Effect::UiAction(action) => Some(action.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn requisitions(&self) -> Vec<StockRequisition> {
        self.effects
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Effect::SaveRequisition(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.effects
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Effect::Navigate(page) => Some(page.clone()),
                _ => None,
            })
            .collect()
    }

    /// Last requested assistant visibility, if any handler changed it
    pub fn assistant_open(&self) -> Option<bool> {
        self.effects.borrow().iter().rev().find_map(|e| match e {
            Effect::SetAssistantOpen(open) => Some(*open),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.effects.borrow().is_empty()
    }

    fn record(&self, effect: Effect) {
        self.effects.borrow_mut().push(effect);
    }
}

impl AssistantEffects for RecordedEffects {
    fn dispatch_ui_action(&self, action: UiAction) {
        tracing::info!(action = action.type_name(), "Dispatching UI action");
        self.record(Effect::UiAction(action));
    }

    fn save_requisition(&self, requisition: StockRequisition) {
        tracing::info!(items = requisition.items.len(), "Saving stock requisition");
        self.record(Effect::SaveRequisition(requisition));
    }

    fn navigate(&self, page: &str) {
        tracing::info!(page, "Navigating");
        self.record(Effect::Navigate(page.to_string()));
    }

    fn set_assistant_open(&self, open: bool) {
        self.record(Effect::SetAssistantOpen(open));
    }
}

/// Everything a handler may read or emit during one call
pub struct HandlerContext<'a> {
    pub snapshot: &'a ContextSnapshot,
    pub effects: &'a dyn AssistantEffects,
    /// Reference date for expiry checks
    pub today: NaiveDate,
    pub language: Language,
    /// Notes attached to requisitions created by voice
    pub requisition_notes: String,
}

pub const DEFAULT_REQUISITION_NOTES: &str = "Created by voice assistant";

impl<'a> HandlerContext<'a> {
    pub fn new(
        snapshot: &'a ContextSnapshot,
        effects: &'a dyn AssistantEffects,
        today: NaiveDate,
        language: Language,
    ) -> Self {
        Self {
            snapshot,
            effects,
            today,
            language,
            requisition_notes: DEFAULT_REQUISITION_NOTES.to_string(),
        }
    }

    pub fn with_requisition_notes(mut self, notes: impl Into<String>) -> Self {
        self.requisition_notes = notes.into();
        self
    }

    pub fn sales_drugs(&self) -> &'a [Drug] {
        &self.snapshot.drugs
    }

    pub fn main_drugs(&self) -> &'a [Drug] {
        &self.snapshot.main_warehouse_drugs
    }

    pub fn is_active(&self, page: &str) -> bool {
        self.snapshot.active_item.as_deref() == Some(page)
    }

    /// Balance recorded for `customer_name`, matched case-insensitively
    pub fn balance_of(&self, customer_name: &str) -> Option<Decimal> {
        let wanted = customer_name.trim().to_lowercase();
        self.snapshot
            .customer_balances
            .iter()
            .find(|(name, _)| name.trim().to_lowercase() == wanted)
            .map(|(_, balance)| *balance)
    }
}
