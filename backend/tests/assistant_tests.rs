//! Voice command engine tests
//!
//! Tests for command resolution and validation including:
//! - Drug name normalization (idempotence, transliteration)
//! - Catalog matching soundness
//! - Sale stock guard (never oversell)
//! - All-or-nothing stock requisitions

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use shared::assistant::{
    CommandResult, ContextSnapshot, ExecuteOptions, HandlerDispatchTable, UiAction,
};
use shared::matcher::{find_matches, AMBIGUITY_SENTINEL};
use shared::normalizer::normalize;
use shared::{Customer, Drug, Language};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn far_expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2029, 1, 1).unwrap()
}

fn run(intent: &str, args: Value, snapshot: &ContextSnapshot) -> CommandResult {
    let options = ExecuteOptions {
        today: today(),
        language: Language::English,
        requisition_notes: "voice".to_string(),
    };
    HandlerDispatchTable::new()
        .execute(intent, args, snapshot, &options)
        .unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Test the ambiguity sentinel for two Panadol variants
    #[test]
    fn test_panadol_variants_are_ambiguous() {
        let snapshot = ContextSnapshot {
            drugs: vec![
                Drug::new("Panadol Extra").with_batch("P1", 20, far_expiry()),
                Drug::new("Panadol Forte").with_batch("P2", 20, far_expiry()),
            ],
            ..Default::default()
        };
        let result = run("addOrderItem", json!({ "drugName": "panadol", "quantity": 1 }), &snapshot);

        assert!(!result.success);
        assert_eq!(
            result.message,
            format!("{}: Panadol Extra, Panadol Forte", AMBIGUITY_SENTINEL)
        );
        assert_eq!(result.message_fa, result.message_en);
        assert!(result.actions.is_empty());
    }

    /// Test insufficient stock is reported with both numbers
    #[test]
    fn test_amoxicillin_oversell_rejected() {
        let snapshot = ContextSnapshot {
            drugs: vec![Drug::new("Amoxicillin")
                .with_batch("A1", 7, far_expiry())
                .with_batch("A2", 3, far_expiry())],
            ..Default::default()
        };
        let result = run("addOrderItem", json!({ "drugName": "amoxicillin", "quantity": 12 }), &snapshot);

        assert!(!result.success);
        assert!(result.message.contains("10"));
        assert!(result.message.contains("12"));
        assert!(result.actions.is_empty());
    }

    /// Test a full sale flow emits actions in order
    #[test]
    fn test_sale_flow() {
        let snapshot = ContextSnapshot {
            drugs: vec![Drug::new("Cetirizine").with_batch("C1", 50, far_expiry())],
            customers: vec![Customer::new("Maryam Hosseini")],
            ..Default::default()
        };

        let start = run("startNewSale", Value::Null, &snapshot);
        assert_eq!(start.actions, vec![UiAction::StartNewSale]);
        assert_eq!(start.navigations, vec!["sales".to_string()]);

        let customer = run("setSaleCustomer", json!({ "customerName": "maryam hosseini" }), &snapshot);
        assert_eq!(customer.actions[0].type_name(), "SET_CUSTOMER");

        let item = run(
            "addOrderItem",
            json!({ "drugName": "ستیریزین", "quantity": 2, "bonus": 1, "discount": "10" }),
            &snapshot,
        );
        assert!(item.success);
        match &item.actions[0] {
            UiAction::AddOrderItem {
                drug_name,
                quantity,
                bonus_quantity,
                discount_percent,
                ..
            } => {
                assert_eq!(drug_name, "Cetirizine");
                assert_eq!(*quantity, 2);
                assert_eq!(*bonus_quantity, 1);
                assert_eq!(*discount_percent, Decimal::from(10));
            }
            other => panic!("Expected ADD_ORDER_ITEM, got {:?}", other),
        }

        let paid = run("setPaymentAmount", json!({ "amount": "۵۰۰۰۰" }), &snapshot);
        assert_eq!(
            paid.actions,
            vec![UiAction::SetPaymentAmount { amount: Decimal::from(50_000) }]
        );

        let saved = run("saveAndPrintOrder", Value::Null, &snapshot);
        assert_eq!(saved.actions, vec![UiAction::SaveAndPrintOrder]);
    }

    /// Test requisition with an unknown line saves nothing
    #[test]
    fn test_requisition_no_partial_save() {
        let snapshot = ContextSnapshot {
            main_warehouse_drugs: vec![Drug::new("X-Ray Contrast").with_batch("X", 9, far_expiry())],
            ..Default::default()
        };
        let result = run(
            "createStockRequisition",
            json!({ "items": [
                { "drugName": "X-Ray Contrast", "quantity": 5 },
                { "drugName": "unknown", "quantity": 1 }
            ] }),
            &snapshot,
        );

        assert!(!result.success);
        assert!(result.message.contains("unknown"));
        assert!(result.requisitions.is_empty());
    }

    /// Test balance phrasing for debt, credit and settled accounts
    #[test]
    fn test_customer_balances() {
        let mut snapshot = ContextSnapshot {
            customers: vec![
                Customer::new("Reza"),
                Customer::new("Sara"),
                Customer::new("Omid"),
            ],
            ..Default::default()
        };
        snapshot.customer_balances.insert("Reza".to_string(), Decimal::from(500));
        snapshot.customer_balances.insert("Sara".to_string(), Decimal::from(-300));
        snapshot.customer_balances.insert("Omid".to_string(), Decimal::ZERO);

        let debt = run("queryCustomerBalance", json!({ "customerName": "reza" }), &snapshot);
        assert_eq!(debt.message, "Reza owes 500.");
        assert_eq!(debt.message_fa, "Reza مبلغ 500 بدهکار است.");

        let credit = run("queryCustomerBalance", json!({ "customerName": "sara" }), &snapshot);
        assert_eq!(credit.message, "Sara has a credit of 300.");

        let settled = run("queryCustomerBalance", json!({ "customerName": "omid" }), &snapshot);
        assert_eq!(settled.message, "Omid's account is settled.");
    }

    /// Test listing 15 main-warehouse items reads the first 10
    #[test]
    fn test_main_warehouse_listing() {
        let snapshot = ContextSnapshot {
            main_warehouse_drugs: (1..=15)
                .map(|i| Drug::new(format!("Item {:02}", i)).with_batch("L", 1, far_expiry()))
                .collect(),
            ..Default::default()
        };
        let result = run("listInventoryItems", json!({ "warehouse": "اصلی" }), &snapshot);

        assert!(result.success);
        for i in 1..=10 {
            assert!(result.message.contains(&format!("Item {:02}", i)));
        }
        assert!(!result.message.contains("Item 11"));
        assert!(result.message.ends_with("There are 5 more; shall I continue?"));
    }

    /// Test the Persian reply is the default rendering language
    #[test]
    fn test_persian_rendering() {
        let snapshot = ContextSnapshot::default();
        let options = ExecuteOptions {
            today: today(),
            language: Language::Persian,
            requisition_notes: String::new(),
        };
        let result = HandlerDispatchTable::new()
            .execute("addOrderItem", json!({ "quantity": 1 }), &snapshot, &options)
            .unwrap();
        assert_eq!(result.message, "لطفاً نام دارو را بگویید.");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn drug_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Panadol", "Panadol Extra", "Amoxicillin", "Cefixime", "Cetirizine", "Ibuprofen",
        "Azithromycin", "Acetaminophen", "Metformin", "Losartan", "Omeprazole", "Salbutamol",
    ])
    .prop_map(String::from)
}

fn spoken_term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        drug_name_strategy(),
        "[a-z]{0,8}",
        "[آ-ی ]{0,8}",
    ]
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Drug>> {
    prop::collection::vec((drug_name_strategy(), prop::collection::vec(0u32..50, 0..4)), 0..6)
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(name, quantities)| {
                    quantities
                        .into_iter()
                        .enumerate()
                        .fold(Drug::new(name), |drug, (i, qty)| {
                            drug.with_batch(&format!("L{}", i), qty, far_expiry())
                        })
                })
                .collect()
        })
}

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: normalize(normalize(x)) == normalize(x)
        #[test]
        fn prop_normalize_idempotent(name in "\\PC{0,32}") {
            let once = normalize(&name);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Property: every match contains the search term; no match for an empty term
        #[test]
        fn prop_matches_are_sound(term in spoken_term_strategy(), catalog in catalog_strategy()) {
            let skeleton = normalize(&term);
            let matches = find_matches(&skeleton, &catalog);
            if skeleton.is_empty() {
                prop_assert!(matches.is_empty());
            }
            for drug in &matches {
                prop_assert!(normalize(&drug.name).contains(&skeleton));
            }
            let expected = catalog
                .iter()
                .filter(|d| !skeleton.is_empty() && d.skeleton().contains(&skeleton))
                .count();
            prop_assert_eq!(matches.len(), expected);
        }

        /// Property: ADD_ORDER_ITEM is only emitted when quantity + bonus fits the stock
        #[test]
        fn prop_never_oversell(
            catalog in catalog_strategy(),
            term in drug_name_strategy(),
            quantity in 1u32..120,
            bonus in 0u32..10,
        ) {
            let snapshot = ContextSnapshot { drugs: catalog, ..Default::default() };
            let result = run(
                "addOrderItem",
                json!({ "drugName": term, "quantity": quantity, "bonus": bonus }),
                &snapshot,
            );

            for action in &result.actions {
                if let UiAction::AddOrderItem { drug_id, quantity, bonus_quantity, .. } = action {
                    let drug = snapshot.drugs.iter().find(|d| d.id == *drug_id).unwrap();
                    prop_assert!(u64::from(*quantity) + u64::from(*bonus_quantity) <= drug.total_stock());
                }
            }
            prop_assert!(result.actions.len() <= 1);
            if result.message.starts_with(AMBIGUITY_SENTINEL) {
                prop_assert!(result.actions.is_empty());
            }
        }

        /// Property: a requisition is saved whole or not at all
        #[test]
        fn prop_requisition_all_or_nothing(
            catalog in catalog_strategy(),
            lines in prop::collection::vec((spoken_term_strategy(), 1u32..20), 1..5),
        ) {
            let snapshot = ContextSnapshot { main_warehouse_drugs: catalog, ..Default::default() };
            let items: Vec<Value> = lines
                .iter()
                .map(|(name, qty)| json!({ "drugName": name, "quantity": qty }))
                .collect();
            let result = run("createStockRequisition", json!({ "items": items }), &snapshot);

            if result.success {
                prop_assert_eq!(result.requisitions.len(), 1);
                prop_assert_eq!(result.requisitions[0].items.len(), lines.len());
            } else {
                prop_assert!(result.requisitions.is_empty());
            }
        }
    }
}
