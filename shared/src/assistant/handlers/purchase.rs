//! Purchase bill intents

use super::{ensure_page_active, PURCHASING_PAGE};
use crate::assistant::actions::UiAction;
use crate::assistant::args::IntentArgs;
use crate::assistant::context::HandlerContext;
use crate::assistant::reply::{Argument, Reply};
use crate::matcher::find_by_raw_name;

/// `startNewPurchaseBill`
pub fn start_new_purchase_bill(_args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    ensure_page_active(ctx, PURCHASING_PAGE);
    ctx.effects.dispatch_ui_action(UiAction::StartNewPurchaseBill);
    Reply::NewPurchaseBillStarted
}

/// `setPurchaseSupplier { supplierName }`
pub fn set_purchase_supplier(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(supplier_name) = args.text("supplierName") else {
        return Reply::missing(Argument::SupplierName);
    };
    ctx.effects.dispatch_ui_action(UiAction::SetPurchaseSupplier {
        supplier_name: supplier_name.clone(),
    });
    Reply::PurchaseSupplierSet { supplier_name }
}

/// `addPurchaseItem { drugName, quantity?, bonus?, purchasePrice?, lotNumber?, expiryDate? }`
///
/// The drug must already exist in one of the catalogs. Lookup is a plain
/// case-insensitive substring match on the display name, not the skeleton.
pub fn add_purchase_item(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(drug_name) = args.text("drugName") else {
        return Reply::missing(Argument::DrugName);
    };

    let Some(drug) = find_by_raw_name(&drug_name, ctx.sales_drugs())
        .or_else(|| find_by_raw_name(&drug_name, ctx.main_drugs()))
    else {
        tracing::warn!(spoken = %drug_name, "Purchase item not in any catalog");
        return Reply::DrugNotFound { drug_name };
    };

    let quantity = args.quantity("quantity");
    ctx.effects.dispatch_ui_action(UiAction::AddPurchaseItem {
        drug_id: drug.id,
        drug_name: drug.name.clone(),
        quantity,
        bonus_quantity: args.quantity("bonus"),
        purchase_price: args.amount("purchasePrice"),
        lot_number: args.text("lotNumber"),
        expiry_date: args.date("expiryDate"),
    });

    Reply::PurchaseItemAdded {
        drug_name: drug.name.clone(),
        quantity,
    }
}

/// `savePurchaseBill`
pub fn save_purchase_bill(_args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    ctx.effects.dispatch_ui_action(UiAction::SavePurchaseBill);
    Reply::PurchaseBillSaved
}
