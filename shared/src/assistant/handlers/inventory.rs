//! Warehouse intents: requisitions, listings, stock alerts

use rust_decimal::prelude::ToPrimitive;

use crate::assistant::args::IntentArgs;
use crate::assistant::context::HandlerContext;
use crate::assistant::reply::{AlertKind, Argument, ExpiringLine, Reply, RequisitionSummaryLine, StockLine};
use crate::matcher::{resolve, MatchOutcome};
use crate::models::{Drug, StockRequisition, StockRequisitionItem, Warehouse};

/// Names read out per listing page
pub const INVENTORY_PAGE_SIZE: usize = 10;

/// `createStockRequisition { items: [{ drugName, quantity }] }`
///
/// All-or-nothing: one unresolved or ambiguous line aborts the requisition.
pub fn create_stock_requisition(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let lines = args.requested_lines("items");
    if lines.is_empty() {
        return Reply::missing(Argument::RequisitionItems);
    }

    let mut items = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let (Some(drug_name), Some(quantity)) = (line.drug_name.as_deref(), line.quantity) else {
            return Reply::RequisitionLineIncomplete { position: index + 1 };
        };
        match resolve(drug_name, ctx.main_drugs()) {
            MatchOutcome::Resolved(drug) => {
                items.push(StockRequisitionItem::new(drug.id, &drug.name, quantity));
            }
            outcome @ MatchOutcome::Ambiguous(_) => {
                tracing::warn!(spoken = drug_name, "Ambiguous requisition line, nothing saved");
                return Reply::Ambiguous {
                    candidates: outcome.candidate_names(),
                };
            }
            MatchOutcome::NotFound => {
                tracing::warn!(spoken = drug_name, "Unresolved requisition line, nothing saved");
                return Reply::RequisitionDrugNotFound {
                    drug_name: drug_name.to_string(),
                };
            }
        }
    }

    let summary = items
        .iter()
        .map(|item| RequisitionSummaryLine {
            drug_name: item.drug_name.clone(),
            quantity: item.quantity_requested,
        })
        .collect();

    ctx.effects.save_requisition(StockRequisition {
        items,
        notes: ctx.requisition_notes.clone(),
    });

    Reply::RequisitionCreated { lines: summary }
}

/// `listInventoryItems { warehouse?, offset? }`
pub fn list_inventory_items(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let warehouse = args
        .text("warehouse")
        .map(|name| Warehouse::from_spoken(&name))
        .unwrap_or(Warehouse::Sales);
    let offset = args
        .amount("offset")
        .and_then(|o| o.to_usize())
        .unwrap_or(0);

    let catalog = match warehouse {
        Warehouse::Sales => ctx.sales_drugs(),
        Warehouse::Main => ctx.main_drugs(),
    };
    let in_stock: Vec<&Drug> = catalog.iter().filter(|d| d.in_stock()).collect();

    let drug_names: Vec<String> = in_stock
        .iter()
        .skip(offset)
        .take(INVENTORY_PAGE_SIZE)
        .map(|d| d.name.clone())
        .collect();
    if drug_names.is_empty() {
        return Reply::NoInventoryItems { warehouse };
    }

    let remaining = in_stock.len().saturating_sub(offset + drug_names.len());
    Reply::InventoryPage {
        warehouse,
        drug_names,
        remaining,
    }
}

/// `queryLowStockItems`: sales drugs at or below the low-stock threshold
pub fn query_low_stock_items(_args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(threshold) = ctx.snapshot.alert_settings.low_stock_threshold() else {
        return Reply::AlertDisabled {
            alert: AlertKind::LowStock,
        };
    };

    let lines: Vec<StockLine> = ctx
        .sales_drugs()
        .iter()
        .filter(|d| d.total_stock() <= u64::from(threshold))
        .map(|d| StockLine {
            drug_name: d.name.clone(),
            stock: d.total_stock(),
        })
        .collect();

    if lines.is_empty() {
        Reply::NoLowStockItems { threshold }
    } else {
        Reply::LowStockItems { lines }
    }
}

/// `queryExpiringItems`: sales batches expiring within the alert window, soonest first
pub fn query_expiring_items(_args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(months) = ctx.snapshot.alert_settings.expiry_window_months() else {
        return Reply::AlertDisabled {
            alert: AlertKind::Expiry,
        };
    };

    let mut lines: Vec<ExpiringLine> = ctx
        .sales_drugs()
        .iter()
        .flat_map(|drug| {
            drug.batches_expiring_within(ctx.today, months)
                .into_iter()
                .map(move |batch| ExpiringLine {
                    drug_name: drug.name.clone(),
                    lot_number: batch.lot_number.clone(),
                    expiry_date: batch.expiry_date,
                })
        })
        .collect();
    lines.sort_by_key(|line| line.expiry_date);

    if lines.is_empty() {
        Reply::NoExpiringItems { months }
    } else {
        Reply::ExpiringItems { lines }
    }
}
