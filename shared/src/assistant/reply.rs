//! Typed handler outcomes and their spoken rendering
//!
//! Handlers return a `Reply`; only the boundary turns it into text. Every
//! variant renders in Persian and English, except the ambiguity sentinel,
//! which callers parse and which is therefore language independent.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::matcher::ambiguity_message;
use crate::models::Warehouse;
use crate::types::Language;

/// Arguments a handler may report as missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Argument {
    Page,
    CustomerName,
    DrugName,
    Quantity,
    Amount,
    Description,
    NewQuantity,
    SupplierName,
    RequisitionItems,
}

impl Argument {
    fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Argument::Page, Language::English) => "page name",
            (Argument::Page, Language::Persian) => "نام صفحه",
            (Argument::CustomerName, Language::English) => "customer name",
            (Argument::CustomerName, Language::Persian) => "نام مشتری",
            (Argument::DrugName, Language::English) => "drug name",
            (Argument::DrugName, Language::Persian) => "نام دارو",
            (Argument::Quantity, Language::English) => "quantity",
            (Argument::Quantity, Language::Persian) => "تعداد",
            (Argument::Amount, Language::English) => "amount",
            (Argument::Amount, Language::Persian) => "مبلغ",
            (Argument::Description, Language::English) => "charge description",
            (Argument::Description, Language::Persian) => "شرح هزینه",
            (Argument::NewQuantity, Language::English) => "new quantity",
            (Argument::NewQuantity, Language::Persian) => "تعداد جدید",
            (Argument::SupplierName, Language::English) => "supplier name",
            (Argument::SupplierName, Language::Persian) => "نام تأمین‌کننده",
            (Argument::RequisitionItems, Language::English) => "items to requisition",
            (Argument::RequisitionItems, Language::Persian) => "اقلام درخواست",
        }
    }
}

/// Warning appended to a sale confirmation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StockWarning {
    LowStock { remaining: u64, threshold: u32 },
    NearExpiry { lot_number: String, expiry_date: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionSummaryLine {
    pub drug_name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLine {
    pub drug_name: String,
    pub stock: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringLine {
    pub drug_name: String,
    pub lot_number: String,
    pub expiry_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertKind {
    LowStock,
    Expiry,
}

/// Outcome of one intent handler call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Reply {
    MissingArgument { argument: Argument },
    Navigated { page: String },
    NewSaleStarted,
    CustomerSet { customer_name: String },
    TemporaryCustomerSet { customer_name: String },
    OrderItemAdded {
        drug_name: String,
        quantity: u32,
        bonus_quantity: u32,
        warnings: Vec<StockWarning>,
    },
    InsufficientStock { drug_name: String, available: u64, requested: u64 },
    InvalidDiscount { discount: Decimal },
    InvalidAmount { amount: Decimal },
    AvailableInMainWarehouse { drug_name: String, stock: u64 },
    DrugNotFound { drug_name: String },
    Ambiguous { candidates: Vec<String> },
    PaymentAmountSet { amount: Decimal },
    OrderSaved,
    OrderSavedAndPrinting,
    ExtraChargeAdded { description: String, amount: Decimal },
    OrderItemRemoved { drug_name: String },
    OrderItemQuantityEdited { drug_name: String, new_quantity: u32 },
    NewPurchaseBillStarted,
    PurchaseSupplierSet { supplier_name: String },
    PurchaseItemAdded { drug_name: String, quantity: Option<u32> },
    PurchaseBillSaved,
    RequisitionCreated { lines: Vec<RequisitionSummaryLine> },
    RequisitionLineIncomplete { position: usize },
    RequisitionDrugNotFound { drug_name: String },
    SalesStock {
        drug_name: String,
        stock: u64,
        nearest_expiry: Option<NaiveDate>,
    },
    MainWarehouseStock { drug_name: String, stock: u64 },
    CustomerNotFound { customer_name: String },
    NoBalanceRecorded { customer_name: String },
    CustomerOwes { customer_name: String, amount: Decimal },
    CustomerHasCredit { customer_name: String, amount: Decimal },
    CustomerSettled { customer_name: String },
    PurchaseHistoryFound {
        customer_name: String,
        drug_name: String,
        final_price: Decimal,
        discount: Decimal,
        date: NaiveDate,
    },
    NoPurchaseHistory { customer_name: String, drug_name: String },
    InventoryPage {
        warehouse: Warehouse,
        drug_names: Vec<String>,
        remaining: usize,
    },
    NoInventoryItems { warehouse: Warehouse },
    LowStockItems { lines: Vec<StockLine> },
    NoLowStockItems { threshold: u32 },
    ExpiringItems { lines: Vec<ExpiringLine> },
    NoExpiringItems { months: u32 },
    AlertDisabled { alert: AlertKind },
    Help,
}

impl Reply {
    pub fn missing(argument: Argument) -> Self {
        Reply::MissingArgument { argument }
    }

    /// Whether the command did what was asked
    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            Reply::MissingArgument { .. }
                | Reply::InsufficientStock { .. }
                | Reply::InvalidDiscount { .. }
                | Reply::InvalidAmount { .. }
                | Reply::AvailableInMainWarehouse { .. }
                | Reply::DrugNotFound { .. }
                | Reply::Ambiguous { .. }
                | Reply::RequisitionLineIncomplete { .. }
                | Reply::RequisitionDrugNotFound { .. }
                | Reply::CustomerNotFound { .. }
                | Reply::NoBalanceRecorded { .. }
                | Reply::NoPurchaseHistory { .. }
        )
    }

    pub fn render(&self, language: Language) -> String {
        match language {
            Language::English => self.render_en(),
            Language::Persian => self.render_fa(),
        }
    }

    fn render_en(&self) -> String {
        let lang = Language::English;
        match self {
            Reply::MissingArgument { argument } => {
                format!("Please tell me the {}.", argument.label(lang))
            }
            Reply::Navigated { page } => format!("Opening {}.", page),
            Reply::NewSaleStarted => "Started a new sale invoice.".to_string(),
            Reply::CustomerSet { customer_name } => {
                format!("Customer set to {}.", customer_name)
            }
            Reply::TemporaryCustomerSet { customer_name } => format!(
                "{} is not a registered customer; using the name for this invoice only.",
                customer_name
            ),
            Reply::OrderItemAdded {
                drug_name,
                quantity,
                bonus_quantity,
                warnings,
            } => {
                let mut text = format!("Added {} x {} to the invoice", quantity, drug_name);
                if *bonus_quantity > 0 {
                    text.push_str(&format!(" with {} bonus", bonus_quantity));
                }
                text.push('.');
                for warning in warnings {
                    text.push_str(&match warning {
                        StockWarning::LowStock { remaining, threshold } => format!(
                            " Warning: only {} will be left in stock (alert threshold {}).",
                            remaining, threshold
                        ),
                        StockWarning::NearExpiry { lot_number, expiry_date } => format!(
                            " Warning: lot {} expires on {}.",
                            lot_number, expiry_date
                        ),
                    });
                }
                text
            }
            Reply::InsufficientStock {
                drug_name,
                available,
                requested,
            } => format!(
                "Not enough stock for {}: {} available, {} requested.",
                drug_name, available, requested
            ),
            Reply::InvalidDiscount { discount } => format!(
                "A discount of {}% is not allowed; it must be between 0 and 100.",
                amount(discount)
            ),
            Reply::InvalidAmount { amount: value } => {
                format!("An amount of {} is not allowed; it cannot be negative.", amount(value))
            }
            Reply::AvailableInMainWarehouse { drug_name, stock } => format!(
                "{} is not in the sales warehouse, but the main warehouse has {}. It must be requisitioned first.",
                drug_name, stock
            ),
            Reply::DrugNotFound { drug_name } => {
                format!("I could not find a drug named {}.", drug_name)
            }
            Reply::Ambiguous { candidates } => ambiguity_message(candidates),
            Reply::PaymentAmountSet { amount: paid } => {
                format!("Payment amount set to {}.", amount(paid))
            }
            Reply::OrderSaved => "Invoice saved.".to_string(),
            Reply::OrderSavedAndPrinting => "Invoice saved and sent to the printer.".to_string(),
            Reply::ExtraChargeAdded {
                description,
                amount: charge,
            } => format!(
                "Added extra charge \"{}\" of {}.",
                description,
                amount(charge)
            ),
            Reply::OrderItemRemoved { drug_name } => {
                format!("Removed {} from the invoice.", drug_name)
            }
            Reply::OrderItemQuantityEdited {
                drug_name,
                new_quantity,
            } => format!("Changed the quantity of {} to {}.", drug_name, new_quantity),
            Reply::NewPurchaseBillStarted => "Started a new purchase bill.".to_string(),
            Reply::PurchaseSupplierSet { supplier_name } => {
                format!("Supplier set to {}.", supplier_name)
            }
            Reply::PurchaseItemAdded { drug_name, quantity } => match quantity {
                Some(q) => format!("Added {} x {} to the purchase bill.", q, drug_name),
                None => format!("Added {} to the purchase bill.", drug_name),
            },
            Reply::PurchaseBillSaved => "Purchase bill saved.".to_string(),
            Reply::RequisitionCreated { lines } => format!(
                "Requisition created for {} item(s): {}.",
                lines.len(),
                lines
                    .iter()
                    .map(|l| format!("{} ({})", l.drug_name, l.quantity))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Reply::RequisitionLineIncomplete { position } => format!(
                "Item {} of the requisition is missing a drug name or quantity; nothing was saved.",
                position
            ),
            Reply::RequisitionDrugNotFound { drug_name } => format!(
                "I could not find {} in the main warehouse; the requisition was not saved.",
                drug_name
            ),
            Reply::SalesStock {
                drug_name,
                stock,
                nearest_expiry,
            } => {
                let mut text = format!("{}: {} in the sales warehouse.", drug_name, stock);
                if let Some(date) = nearest_expiry {
                    text.push_str(&format!(" Nearest expiry: {}.", date));
                }
                text
            }
            Reply::MainWarehouseStock { drug_name, stock } => format!(
                "{} is not in the sales warehouse; the main warehouse has {}.",
                drug_name, stock
            ),
            Reply::CustomerNotFound { customer_name } => {
                format!("No customer named {} was found.", customer_name)
            }
            Reply::NoBalanceRecorded { customer_name } => {
                format!("No balance is recorded for {}.", customer_name)
            }
            Reply::CustomerOwes {
                customer_name,
                amount: owed,
            } => format!("{} owes {}.", customer_name, amount(owed)),
            Reply::CustomerHasCredit {
                customer_name,
                amount: credit,
            } => format!("{} has a credit of {}.", customer_name, amount(credit)),
            Reply::CustomerSettled { customer_name } => {
                format!("{}'s account is settled.", customer_name)
            }
            Reply::PurchaseHistoryFound {
                customer_name,
                drug_name,
                final_price,
                discount,
                date,
            } => format!(
                "{} last bought {} on {} for {} with a {}% discount.",
                customer_name,
                drug_name,
                date,
                amount(final_price),
                amount(discount)
            ),
            Reply::NoPurchaseHistory {
                customer_name,
                drug_name,
            } => format!("No purchase of {} by {} was found.", drug_name, customer_name),
            Reply::InventoryPage {
                warehouse,
                drug_names,
                remaining,
            } => {
                let mut text = format!(
                    "Items in the {}: {}.",
                    warehouse_label(*warehouse, lang),
                    drug_names.join(", ")
                );
                if *remaining > 0 {
                    text.push_str(&format!(
                        " There are {} more; shall I continue?",
                        remaining
                    ));
                }
                text
            }
            Reply::NoInventoryItems { warehouse } => format!(
                "There are no items in stock in the {}.",
                warehouse_label(*warehouse, lang)
            ),
            Reply::LowStockItems { lines } => format!(
                "Low on stock: {}.",
                lines
                    .iter()
                    .map(|l| format!("{} ({})", l.drug_name, l.stock))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Reply::NoLowStockItems { threshold } => {
                format!("No items are at or below {} in stock.", threshold)
            }
            Reply::ExpiringItems { lines } => format!(
                "Expiring soon: {}.",
                lines
                    .iter()
                    .map(|l| format!("{} lot {} ({})", l.drug_name, l.lot_number, l.expiry_date))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Reply::NoExpiringItems { months } => {
                format!("No batches expire within {} months.", months)
            }
            Reply::AlertDisabled { alert } => match alert {
                AlertKind::LowStock => "The low-stock alert is turned off.".to_string(),
                AlertKind::Expiry => "The expiry alert is turned off.".to_string(),
            },
            Reply::Help => "You can say: start a new sale, add a drug with its quantity, \
set the customer, set the payment, add an extra charge, save or print the invoice, \
start a purchase bill, add purchase items, request stock from the main warehouse, \
ask for stock levels, customer balances, purchase history, low-stock or expiring items, \
or list the inventory."
                .to_string(),
        }
    }

    fn render_fa(&self) -> String {
        let lang = Language::Persian;
        match self {
            Reply::MissingArgument { argument } => {
                format!("لطفاً {} را بگویید.", argument.label(lang))
            }
            Reply::Navigated { page } => format!("صفحه {} باز شد.", page),
            Reply::NewSaleStarted => "فاکتور فروش جدید شروع شد.".to_string(),
            Reply::CustomerSet { customer_name } => {
                format!("مشتری {} برای این فاکتور انتخاب شد.", customer_name)
            }
            Reply::TemporaryCustomerSet { customer_name } => format!(
                "{} در فهرست مشتریان نیست و فقط برای همین فاکتور ثبت شد.",
                customer_name
            ),
            Reply::OrderItemAdded {
                drug_name,
                quantity,
                bonus_quantity,
                warnings,
            } => {
                let mut text = format!("{} عدد {} به فاکتور اضافه شد", quantity, drug_name);
                if *bonus_quantity > 0 {
                    text.push_str(&format!(" (با {} عدد اشانتیون)", bonus_quantity));
                }
                text.push('.');
                for warning in warnings {
                    text.push_str(&match warning {
                        StockWarning::LowStock { remaining, threshold } => format!(
                            " هشدار: فقط {} عدد در انبار باقی می‌ماند (حد هشدار {}).",
                            remaining, threshold
                        ),
                        StockWarning::NearExpiry { lot_number, expiry_date } => format!(
                            " هشدار: بچ {} در تاریخ {} منقضی می‌شود.",
                            lot_number, expiry_date
                        ),
                    });
                }
                text
            }
            Reply::InsufficientStock {
                drug_name,
                available,
                requested,
            } => format!(
                "موجودی {} کافی نیست: موجودی {} عدد، درخواست {} عدد.",
                drug_name, available, requested
            ),
            Reply::InvalidDiscount { discount } => format!(
                "تخفیف {} درصد مجاز نیست؛ تخفیف باید بین 0 تا 100 درصد باشد.",
                amount(discount)
            ),
            Reply::InvalidAmount { amount: value } => {
                format!("مبلغ {} مجاز نیست؛ مبلغ نمی‌تواند منفی باشد.", amount(value))
            }
            Reply::AvailableInMainWarehouse { drug_name, stock } => format!(
                "{} در انبار فروش موجود نیست ولی انبار اصلی {} عدد دارد. ابتدا باید درخواست انتقال ثبت شود.",
                drug_name, stock
            ),
            Reply::DrugNotFound { drug_name } => {
                format!("دارویی با نام {} پیدا نشد.", drug_name)
            }
            Reply::Ambiguous { candidates } => ambiguity_message(candidates),
            Reply::PaymentAmountSet { amount: paid } => {
                format!("مبلغ پرداختی {} ثبت شد.", amount(paid))
            }
            Reply::OrderSaved => "فاکتور ذخیره شد.".to_string(),
            Reply::OrderSavedAndPrinting => "فاکتور ذخیره و برای چاپ ارسال شد.".to_string(),
            Reply::ExtraChargeAdded {
                description,
                amount: charge,
            } => format!(
                "هزینه اضافی «{}» به مبلغ {} اضافه شد.",
                description,
                amount(charge)
            ),
            Reply::OrderItemRemoved { drug_name } => format!("{} از فاکتور حذف شد.", drug_name),
            Reply::OrderItemQuantityEdited {
                drug_name,
                new_quantity,
            } => format!("تعداد {} به {} تغییر کرد.", drug_name, new_quantity),
            Reply::NewPurchaseBillStarted => "فاکتور خرید جدید شروع شد.".to_string(),
            Reply::PurchaseSupplierSet { supplier_name } => {
                format!("تأمین‌کننده {} انتخاب شد.", supplier_name)
            }
            Reply::PurchaseItemAdded { drug_name, quantity } => match quantity {
                Some(q) => format!("{} عدد {} به فاکتور خرید اضافه شد.", q, drug_name),
                None => format!("{} به فاکتور خرید اضافه شد.", drug_name),
            },
            Reply::PurchaseBillSaved => "فاکتور خرید ذخیره شد.".to_string(),
            Reply::RequisitionCreated { lines } => format!(
                "درخواست انتقال برای {} قلم ثبت شد: {}.",
                lines.len(),
                lines
                    .iter()
                    .map(|l| format!("{} ({})", l.drug_name, l.quantity))
                    .collect::<Vec<_>>()
                    .join("، ")
            ),
            Reply::RequisitionLineIncomplete { position } => format!(
                "قلم {} درخواست نام دارو یا تعداد ندارد؛ چیزی ثبت نشد.",
                position
            ),
            Reply::RequisitionDrugNotFound { drug_name } => format!(
                "{} در انبار اصلی پیدا نشد؛ درخواست ثبت نشد.",
                drug_name
            ),
            Reply::SalesStock {
                drug_name,
                stock,
                nearest_expiry,
            } => {
                let mut text = format!("موجودی {} در انبار فروش: {} عدد.", drug_name, stock);
                if let Some(date) = nearest_expiry {
                    text.push_str(&format!(" نزدیک‌ترین تاریخ انقضا: {}.", date));
                }
                text
            }
            Reply::MainWarehouseStock { drug_name, stock } => format!(
                "{} در انبار فروش نیست؛ موجودی انبار اصلی {} عدد است.",
                drug_name, stock
            ),
            Reply::CustomerNotFound { customer_name } => {
                format!("مشتری با نام {} پیدا نشد.", customer_name)
            }
            Reply::NoBalanceRecorded { customer_name } => {
                format!("حسابی برای {} ثبت نشده است.", customer_name)
            }
            Reply::CustomerOwes {
                customer_name,
                amount: owed,
            } => format!("{} مبلغ {} بدهکار است.", customer_name, amount(owed)),
            Reply::CustomerHasCredit {
                customer_name,
                amount: credit,
            } => format!("{} مبلغ {} بستانکار است.", customer_name, amount(credit)),
            Reply::CustomerSettled { customer_name } => {
                format!("حساب {} تسویه است.", customer_name)
            }
            Reply::PurchaseHistoryFound {
                customer_name,
                drug_name,
                final_price,
                discount,
                date,
            } => format!(
                "{} آخرین بار {} را در تاریخ {} به قیمت {} با {} درصد تخفیف خریده است.",
                customer_name,
                drug_name,
                date,
                amount(final_price),
                amount(discount)
            ),
            Reply::NoPurchaseHistory {
                customer_name,
                drug_name,
            } => format!("سابقه خرید {} برای {} پیدا نشد.", drug_name, customer_name),
            Reply::InventoryPage {
                warehouse,
                drug_names,
                remaining,
            } => {
                let mut text = format!(
                    "اقلام {}: {}.",
                    warehouse_label(*warehouse, lang),
                    drug_names.join("، ")
                );
                if *remaining > 0 {
                    text.push_str(&format!(" {} قلم دیگر هم هست؛ ادامه بدهم؟", remaining));
                }
                text
            }
            Reply::NoInventoryItems { warehouse } => format!(
                "کالای موجودی در {} نیست.",
                warehouse_label(*warehouse, lang)
            ),
            Reply::LowStockItems { lines } => format!(
                "اقلام کم‌موجود: {}.",
                lines
                    .iter()
                    .map(|l| format!("{} ({})", l.drug_name, l.stock))
                    .collect::<Vec<_>>()
                    .join("، ")
            ),
            Reply::NoLowStockItems { threshold } => {
                format!("هیچ کالایی با موجودی {} یا کمتر وجود ندارد.", threshold)
            }
            Reply::ExpiringItems { lines } => format!(
                "اقلام نزدیک به انقضا: {}.",
                lines
                    .iter()
                    .map(|l| format!("{} بچ {} ({})", l.drug_name, l.lot_number, l.expiry_date))
                    .collect::<Vec<_>>()
                    .join("، ")
            ),
            Reply::NoExpiringItems { months } => {
                format!("هیچ بچی در {} ماه آینده منقضی نمی‌شود.", months)
            }
            Reply::AlertDisabled { alert } => match alert {
                AlertKind::LowStock => "هشدار کمبود موجودی غیرفعال است.".to_string(),
                AlertKind::Expiry => "هشدار انقضا غیرفعال است.".to_string(),
            },
            Reply::Help => "می‌توانید بگویید: فروش جدید، افزودن دارو با تعداد، انتخاب مشتری، \
ثبت مبلغ پرداختی، هزینه اضافی، ذخیره یا چاپ فاکتور، فاکتور خرید جدید، افزودن قلم خرید، \
درخواست انتقال از انبار اصلی، پرسیدن موجودی، حساب مشتری، سابقه خرید، اقلام کم‌موجود یا \
نزدیک به انقضا، یا فهرست انبار."
                .to_string(),
        }
    }
}

fn warehouse_label(warehouse: Warehouse, language: Language) -> &'static str {
    match (warehouse, language) {
        (Warehouse::Sales, Language::English) => "sales warehouse",
        (Warehouse::Sales, Language::Persian) => "انبار فروش",
        (Warehouse::Main, Language::English) => "main warehouse",
        (Warehouse::Main, Language::Persian) => "انبار اصلی",
    }
}

/// Money and percentages without trailing zeros
fn amount(value: &Decimal) -> String {
    value.normalize().to_string()
}
