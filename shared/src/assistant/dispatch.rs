//! Intent name -> handler lookup, the single entry point for callers

use std::collections::HashMap;

use serde_json::Value;

use super::args::IntentArgs;
use super::context::HandlerContext;
use super::handlers::{inventory, navigation, purchase, queries, sales, IntentHandler};
use super::reply::Reply;
use crate::error::{AssistantError, AssistantResult};

/// Every intent the table registers, with its handler
const INTENTS: &[(&str, IntentHandler)] = &[
    ("navigateTo", navigation::navigate_to),
    ("showHelp", navigation::show_help),
    ("startNewSale", sales::start_new_sale),
    ("setSaleCustomer", sales::set_sale_customer),
    ("addOrderItem", sales::add_order_item),
    ("setPaymentAmount", sales::set_payment_amount),
    ("saveOrder", sales::save_order),
    ("saveAndPrintOrder", sales::save_and_print_order),
    ("addExtraCharge", sales::add_extra_charge),
    ("removeOrderItem", sales::remove_order_item),
    ("editOrderItemQuantity", sales::edit_order_item_quantity),
    ("startNewPurchaseBill", purchase::start_new_purchase_bill),
    ("setPurchaseSupplier", purchase::set_purchase_supplier),
    ("addPurchaseItem", purchase::add_purchase_item),
    ("savePurchaseBill", purchase::save_purchase_bill),
    ("createStockRequisition", inventory::create_stock_requisition),
    ("listInventoryItems", inventory::list_inventory_items),
    ("queryLowStockItems", inventory::query_low_stock_items),
    ("queryExpiringItems", inventory::query_expiring_items),
    ("queryStockLevel", queries::query_stock_level),
    ("queryCustomerBalance", queries::query_customer_balance),
    ("queryPurchaseHistory", queries::query_purchase_history),
];

/// Static mapping from intent names to handlers.
///
/// There is no fallback entry: an unknown name is an error the caller turns
/// into its own "not understood" reply.
#[derive(Clone)]
pub struct HandlerDispatchTable {
    handlers: HashMap<&'static str, IntentHandler>,
}

impl Default for HandlerDispatchTable {
    fn default() -> Self {
        Self {
            handlers: INTENTS.iter().copied().collect(),
        }
    }
}

impl HandlerDispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, intent_name: &str) -> bool {
        self.handlers.contains_key(intent_name)
    }

    /// Registered intent names, sorted
    pub fn intent_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler for `intent_name` and return its typed reply
    pub fn dispatch_reply(
        &self,
        intent_name: &str,
        args: Value,
        ctx: &HandlerContext,
    ) -> AssistantResult<Reply> {
        let handler = self.handlers.get(intent_name).ok_or_else(|| {
            tracing::warn!(intent = intent_name, "Unknown intent");
            AssistantError::UnknownIntent(intent_name.to_string())
        })?;
        let args = IntentArgs::from_value(args)?;

        tracing::debug!(intent = intent_name, ?args, "Dispatching intent");
        let reply = handler(&args, ctx);
        tracing::debug!(intent = intent_name, success = reply.is_success(), "Intent handled");
        Ok(reply)
    }

    /// Run the handler and render its reply in the context's language
    pub fn dispatch(
        &self,
        intent_name: &str,
        args: Value,
        ctx: &HandlerContext,
    ) -> AssistantResult<String> {
        self.dispatch_reply(intent_name, args, ctx)
            .map(|reply| reply.render(ctx.language))
    }
}
