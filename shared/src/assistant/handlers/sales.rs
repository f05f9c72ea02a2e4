//! Sales invoice intents

use super::{ensure_page_active, SALES_PAGE};
use crate::assistant::actions::UiAction;
use crate::assistant::args::IntentArgs;
use crate::assistant::context::HandlerContext;
use crate::assistant::reply::{Argument, Reply, StockWarning};
use crate::matcher::{resolve, MatchOutcome};
use crate::models::Drug;
use crate::validation::{validate_amount, validate_discount_percent, validate_stock_sufficient};

/// `startNewSale`
pub fn start_new_sale(_args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    ensure_page_active(ctx, SALES_PAGE);
    ctx.effects.dispatch_ui_action(UiAction::StartNewSale);
    Reply::NewSaleStarted
}

/// `setSaleCustomer { customerName }`
///
/// An unregistered name becomes a temporary customer for this invoice only.
pub fn set_sale_customer(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(customer_name) = args.text("customerName") else {
        return Reply::missing(Argument::CustomerName);
    };

    match ctx
        .snapshot
        .customers
        .iter()
        .find(|c| c.is_named(&customer_name))
    {
        Some(customer) => {
            ctx.effects.dispatch_ui_action(UiAction::SetCustomer {
                customer_id: customer.id,
                customer_name: customer.name.clone(),
            });
            Reply::CustomerSet {
                customer_name: customer.name.clone(),
            }
        }
        None => {
            ctx.effects.dispatch_ui_action(UiAction::SetTemporaryCustomer {
                customer_name: customer_name.clone(),
            });
            Reply::TemporaryCustomerSet { customer_name }
        }
    }
}

/// `addOrderItem { drugName, quantity, bonus?, discount? }`
pub fn add_order_item(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(drug_name) = args.text("drugName") else {
        return Reply::missing(Argument::DrugName);
    };
    let Some(quantity) = args.quantity("quantity") else {
        return Reply::missing(Argument::Quantity);
    };
    let bonus_quantity = args.quantity("bonus").unwrap_or(0);

    let drug = match resolve(&drug_name, ctx.sales_drugs()) {
        MatchOutcome::Resolved(drug) => drug,
        outcome @ MatchOutcome::Ambiguous(_) => {
            tracing::warn!(spoken = %drug_name, "Ambiguous drug name in sale");
            return Reply::Ambiguous {
                candidates: outcome.candidate_names(),
            };
        }
        MatchOutcome::NotFound => return not_in_sales_warehouse(&drug_name, ctx),
    };

    let discount_percent = match args.amount("discount") {
        Some(discount) => {
            if validate_discount_percent(discount).is_err() {
                return Reply::InvalidDiscount { discount };
            }
            discount
        }
        None => drug.discount_percent,
    };

    if validate_stock_sufficient(drug, quantity, bonus_quantity).is_err() {
        tracing::warn!(
            drug = %drug.name,
            available = drug.total_stock(),
            quantity,
            bonus_quantity,
            "Rejected sale exceeding stock"
        );
        return Reply::InsufficientStock {
            drug_name: drug.name.clone(),
            available: drug.total_stock(),
            requested: u64::from(quantity) + u64::from(bonus_quantity),
        };
    }

    ctx.effects.dispatch_ui_action(UiAction::AddOrderItem {
        drug_id: drug.id,
        drug_name: drug.name.clone(),
        quantity,
        bonus_quantity,
        unit_price: drug.unit_price,
        discount_percent,
    });

    Reply::OrderItemAdded {
        drug_name: drug.name.clone(),
        quantity,
        bonus_quantity,
        warnings: stock_warnings(drug, u64::from(quantity) + u64::from(bonus_quantity), ctx),
    }
}

/// Sales catalog had no match: point at the main warehouse if it has the drug
fn not_in_sales_warehouse(drug_name: &str, ctx: &HandlerContext) -> Reply {
    match resolve(drug_name, ctx.main_drugs()) {
        MatchOutcome::Resolved(drug) => Reply::AvailableInMainWarehouse {
            drug_name: drug.name.clone(),
            stock: drug.total_stock(),
        },
        outcome @ MatchOutcome::Ambiguous(_) => Reply::Ambiguous {
            candidates: outcome.candidate_names(),
        },
        MatchOutcome::NotFound => Reply::DrugNotFound {
            drug_name: drug_name.to_string(),
        },
    }
}

/// Low-stock and near-expiry warnings for a sale that takes `requested` units
fn stock_warnings(drug: &Drug, requested: u64, ctx: &HandlerContext) -> Vec<StockWarning> {
    let settings = &ctx.snapshot.alert_settings;
    let mut warnings = Vec::new();

    if let Some(threshold) = settings.low_stock_threshold() {
        let remaining = drug.total_stock().saturating_sub(requested);
        if remaining <= u64::from(threshold) {
            warnings.push(StockWarning::LowStock {
                remaining,
                threshold,
            });
        }
    }

    if let Some(months) = settings.expiry_window_months() {
        let expiring = drug.batches_expiring_within(ctx.today, months);
        if let Some(batch) = expiring.into_iter().min_by_key(|b| b.expiry_date) {
            warnings.push(StockWarning::NearExpiry {
                lot_number: batch.lot_number.clone(),
                expiry_date: batch.expiry_date,
            });
        }
    }

    warnings
}

/// `setPaymentAmount { amount }`
pub fn set_payment_amount(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(amount) = args.amount("amount") else {
        return Reply::missing(Argument::Amount);
    };
    if validate_amount(amount).is_err() {
        return Reply::InvalidAmount { amount };
    }
    ctx.effects
        .dispatch_ui_action(UiAction::SetPaymentAmount { amount });
    Reply::PaymentAmountSet { amount }
}

/// `saveOrder`
pub fn save_order(_args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    ctx.effects.dispatch_ui_action(UiAction::SaveOrder);
    Reply::OrderSaved
}

/// `saveAndPrintOrder`
pub fn save_and_print_order(_args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    ctx.effects.dispatch_ui_action(UiAction::SaveAndPrintOrder);
    Reply::OrderSavedAndPrinting
}

/// `addExtraCharge { description, amount }`; a zero amount counts as missing
pub fn add_extra_charge(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(description) = args.text("description") else {
        return Reply::missing(Argument::Description);
    };
    let amount = match args.amount("amount") {
        Some(amount) if amount.is_zero() => return Reply::missing(Argument::Amount),
        Some(amount) => amount,
        None => return Reply::missing(Argument::Amount),
    };
    if validate_amount(amount).is_err() {
        return Reply::InvalidAmount { amount };
    }
    ctx.effects.dispatch_ui_action(UiAction::AddExtraCharge {
        description: description.clone(),
        amount,
    });
    Reply::ExtraChargeAdded {
        description,
        amount,
    }
}

/// `removeOrderItem { drugName }`
pub fn remove_order_item(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(drug_name) = args.text("drugName") else {
        return Reply::missing(Argument::DrugName);
    };
    ctx.effects.dispatch_ui_action(UiAction::RemoveOrderItem {
        drug_name: drug_name.clone(),
    });
    Reply::OrderItemRemoved { drug_name }
}

/// `editOrderItemQuantity { drugName, newQuantity }`
pub fn edit_order_item_quantity(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(drug_name) = args.text("drugName") else {
        return Reply::missing(Argument::DrugName);
    };
    let Some(new_quantity) = args.quantity("newQuantity") else {
        return Reply::missing(Argument::NewQuantity);
    };
    ctx.effects.dispatch_ui_action(UiAction::EditOrderItemQuantity {
        drug_name: drug_name.clone(),
        new_quantity,
    });
    Reply::OrderItemQuantityEdited {
        drug_name,
        new_quantity,
    }
}
