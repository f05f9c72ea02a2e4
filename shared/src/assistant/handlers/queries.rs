//! Read-only queries: stock levels, balances, purchase history

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::assistant::args::IntentArgs;
use crate::assistant::context::HandlerContext;
use crate::assistant::reply::{Argument, Reply};
use crate::matcher::{resolve, MatchOutcome};
use crate::normalizer::normalize;

/// `queryStockLevel { drugName }`: sales warehouse first, then main
pub fn query_stock_level(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(drug_name) = args.text("drugName") else {
        return Reply::missing(Argument::DrugName);
    };

    match resolve(&drug_name, ctx.sales_drugs()) {
        MatchOutcome::Resolved(drug) => {
            return Reply::SalesStock {
                drug_name: drug.name.clone(),
                stock: drug.total_stock(),
                nearest_expiry: drug.nearest_expiry().map(|b| b.expiry_date),
            }
        }
        outcome @ MatchOutcome::Ambiguous(_) => {
            return Reply::Ambiguous {
                candidates: outcome.candidate_names(),
            }
        }
        MatchOutcome::NotFound => {}
    }

    match resolve(&drug_name, ctx.main_drugs()) {
        MatchOutcome::Resolved(drug) => Reply::MainWarehouseStock {
            drug_name: drug.name.clone(),
            stock: drug.total_stock(),
        },
        outcome @ MatchOutcome::Ambiguous(_) => Reply::Ambiguous {
            candidates: outcome.candidate_names(),
        },
        MatchOutcome::NotFound => Reply::DrugNotFound { drug_name },
    }
}

/// `queryCustomerBalance { customerName }`
///
/// Positive balances are debt, negative ones credit.
pub fn query_customer_balance(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(spoken_name) = args.text("customerName") else {
        return Reply::missing(Argument::CustomerName);
    };

    let Some(customer) = ctx
        .snapshot
        .customers
        .iter()
        .find(|c| c.name_contains(&spoken_name))
    else {
        return Reply::CustomerNotFound {
            customer_name: spoken_name,
        };
    };

    let customer_name = customer.name.clone();
    let Some(balance) = ctx.balance_of(&customer.name) else {
        return Reply::NoBalanceRecorded { customer_name };
    };

    match balance.cmp(&Decimal::ZERO) {
        Ordering::Greater => Reply::CustomerOwes {
            customer_name,
            amount: balance,
        },
        Ordering::Less => Reply::CustomerHasCredit {
            customer_name,
            amount: balance.abs(),
        },
        Ordering::Equal => Reply::CustomerSettled { customer_name },
    }
}

/// `queryPurchaseHistory { drugName, customerName }`: the customer's most recent purchase of the drug
pub fn query_purchase_history(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(drug_name) = args.text("drugName") else {
        return Reply::missing(Argument::DrugName);
    };
    let Some(customer_name) = args.text("customerName") else {
        return Reply::missing(Argument::CustomerName);
    };

    let term = normalize(&drug_name);
    let not_found = || Reply::NoPurchaseHistory {
        customer_name: customer_name.clone(),
        drug_name: drug_name.clone(),
    };
    if term.is_empty() {
        return not_found();
    }

    let wanted_customer = customer_name.to_lowercase();
    let mut orders: Vec<_> = ctx
        .snapshot
        .orders
        .iter()
        .filter(|o| o.customer_name.to_lowercase().contains(&wanted_customer))
        .collect();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    orders
        .into_iter()
        .find_map(|order| {
            order
                .items
                .iter()
                .find(|item| normalize(&item.drug_name).contains(&term))
                .map(|item| Reply::PurchaseHistoryFound {
                    customer_name: order.customer_name.clone(),
                    drug_name: item.drug_name.clone(),
                    final_price: item.final_price,
                    discount: item.discount,
                    date: order.created_at.date(),
                })
        })
        .unwrap_or_else(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::context::ContextSnapshot;
    use crate::assistant::handlers::test_support::{date, run};
    use crate::models::{Customer, Drug, Order, OrderItem};
    use crate::types::Language;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_stock_level_in_sales_warehouse() {
        let snap = ContextSnapshot {
            drugs: vec![Drug::new("Amoxicillin")
                .with_batch("A1", 6, date(2027, 6, 1))
                .with_batch("A2", 4, date(2027, 2, 1))],
            ..Default::default()
        };
        let (reply, effects) = run(query_stock_level, json!({ "drugName": "amoxicilin" }), &snap);
        assert_eq!(
            reply,
            Reply::SalesStock {
                drug_name: "Amoxicillin".to_string(),
                stock: 10,
                nearest_expiry: Some(date(2027, 2, 1)),
            }
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_stock_level_falls_back_to_main() {
        let snap = ContextSnapshot {
            drugs: vec![Drug::new("Panadol Extra")],
            main_warehouse_drugs: vec![Drug::new("Cefixime").with_batch("C", 40, date(2028, 1, 1))],
            ..Default::default()
        };
        let (reply, _) = run(query_stock_level, json!({ "drugName": "سفکسیم" }), &snap);
        assert_eq!(
            reply,
            Reply::MainWarehouseStock { drug_name: "Cefixime".to_string(), stock: 40 }
        );

        let (reply, _) = run(query_stock_level, json!({ "drugName": "zinc" }), &snap);
        assert_eq!(reply, Reply::DrugNotFound { drug_name: "zinc".to_string() });
    }

    #[test]
    fn test_stock_level_ambiguous() {
        let snap = ContextSnapshot {
            drugs: vec![Drug::new("Panadol Extra"), Drug::new("Panadol Forte")],
            ..Default::default()
        };
        let (reply, _) = run(query_stock_level, json!({ "drugName": "panadol" }), &snap);
        assert_eq!(
            reply.render(Language::Persian),
            "MULTIPLE_MATCHES_FOUND: Panadol Extra, Panadol Forte"
        );
    }

    #[test]
    fn test_stock_level_ambiguous_in_main_warehouse() {
        let snap = ContextSnapshot {
            drugs: vec![Drug::new("Cefixime").with_batch("C", 40, date(2028, 1, 1))],
            main_warehouse_drugs: vec![
                Drug::new("Panadol Extra").with_batch("M1", 30, date(2028, 1, 1)),
                Drug::new("Panadol Forte").with_batch("M2", 10, date(2028, 1, 1)),
            ],
            ..Default::default()
        };
        let (reply, effects) = run(query_stock_level, json!({ "drugName": "panadol" }), &snap);

        assert_eq!(
            reply.render(Language::English),
            "MULTIPLE_MATCHES_FOUND: Panadol Extra, Panadol Forte"
        );
        assert!(effects.actions().is_empty());
        assert!(effects.is_empty());
    }

    fn balances_snapshot() -> ContextSnapshot {
        let mut snap = ContextSnapshot {
            customers: vec![
                Customer::new("Reza Ahmadi"),
                Customer::new("Sara Karimi"),
                Customer::new("Ali Moradi"),
                Customer::new("Nima Rahimi"),
            ],
            ..Default::default()
        };
        snap.customer_balances.insert("Reza Ahmadi".to_string(), Decimal::from(500));
        snap.customer_balances.insert("Sara Karimi".to_string(), Decimal::from(-300));
        snap.customer_balances.insert("Ali Moradi".to_string(), Decimal::ZERO);
        snap
    }

    #[test]
    fn test_balance_debt_credit_settled() {
        let snap = balances_snapshot();

        let (reply, _) = run(query_customer_balance, json!({ "customerName": "reza" }), &snap);
        assert!(matches!(reply, Reply::CustomerOwes { .. }));
        let text = reply.render(Language::English);
        assert!(text.contains("owes"));
        assert!(text.contains("500"));

        let (reply, _) = run(query_customer_balance, json!({ "customerName": "Sara" }), &snap);
        assert_eq!(
            reply,
            Reply::CustomerHasCredit {
                customer_name: "Sara Karimi".to_string(),
                amount: Decimal::from(300),
            }
        );
        let text = reply.render(Language::English);
        assert!(text.contains("credit"));
        assert!(text.contains("300"));
        assert!(!text.contains("-300"));

        let (reply, _) = run(query_customer_balance, json!({ "customerName": "ali" }), &snap);
        assert_eq!(
            reply,
            Reply::CustomerSettled { customer_name: "Ali Moradi".to_string() }
        );
    }

    #[test]
    fn test_balance_failures() {
        let snap = balances_snapshot();
        let (reply, _) = run(query_customer_balance, json!({}), &snap);
        assert_eq!(reply, Reply::missing(Argument::CustomerName));

        let (reply, _) = run(query_customer_balance, json!({ "customerName": "Hassan" }), &snap);
        assert_eq!(reply, Reply::CustomerNotFound { customer_name: "Hassan".to_string() });

        let (reply, _) = run(query_customer_balance, json!({ "customerName": "nima" }), &snap);
        assert_eq!(reply, Reply::NoBalanceRecorded { customer_name: "Nima Rahimi".to_string() });
        assert!(!reply.is_success());
    }

    fn order(customer: &str, day: u32, drug: &str, final_price: i64, discount: i64) -> Order {
        Order {
            id: Uuid::new_v4(),
            customer_name: customer.to_string(),
            created_at: date(2026, 9, day).and_hms_opt(10, 0, 0).unwrap(),
            items: vec![OrderItem {
                drug_id: Uuid::new_v4(),
                drug_name: drug.to_string(),
                quantity: 1,
                bonus_quantity: 0,
                original_price: Decimal::from(final_price),
                discount: Decimal::from(discount),
                final_price: Decimal::from(final_price),
            }],
            amount_paid: Decimal::ZERO,
            total: Decimal::from(final_price),
        }
    }

    #[test]
    fn test_purchase_history_most_recent_first() {
        let snap = ContextSnapshot {
            orders: vec![
                order("Reza Ahmadi", 1, "Amoxicillin 500", 90_000, 0),
                order("Reza Ahmadi", 20, "Amoxicillin 500", 85_000, 5),
                order("Sara Karimi", 25, "Amoxicillin 500", 70_000, 10),
                order("Reza Ahmadi", 28, "Cetirizine", 40_000, 0),
            ],
            ..Default::default()
        };
        let (reply, _) = run(
            query_purchase_history,
            json!({ "drugName": "آموکسی سیلین", "customerName": "reza ahmadi" }),
            &snap,
        );
        assert_eq!(
            reply,
            Reply::PurchaseHistoryFound {
                customer_name: "Reza Ahmadi".to_string(),
                drug_name: "Amoxicillin 500".to_string(),
                final_price: Decimal::from(85_000),
                discount: Decimal::from(5),
                date: date(2026, 9, 20),
            }
        );
    }

    #[test]
    fn test_purchase_history_missing() {
        let snap = ContextSnapshot {
            orders: vec![order("Reza Ahmadi", 1, "Cetirizine", 40_000, 0)],
            ..Default::default()
        };
        let (reply, _) = run(
            query_purchase_history,
            json!({ "drugName": "amoxicillin", "customerName": "Reza" }),
            &snap,
        );
        assert!(matches!(reply, Reply::NoPurchaseHistory { .. }));

        let (reply, _) = run(query_purchase_history, json!({ "drugName": "aaa", "customerName": "Reza" }), &snap);
        assert!(matches!(reply, Reply::NoPurchaseHistory { .. }));

        let (reply, _) = run(query_purchase_history, json!({ "drugName": "amoxicillin" }), &snap);
        assert_eq!(reply, Reply::missing(Argument::CustomerName));
    }
}
