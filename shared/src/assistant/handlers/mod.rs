//! Intent handlers, one function per voice intent
//!
//! A handler reads its arguments and the context snapshot, emits effects
//! through the context, and returns a typed reply. It never fails: every
//! business condition is a reply.

pub mod inventory;
pub mod navigation;
pub mod purchase;
pub mod queries;
pub mod sales;

use super::args::IntentArgs;
use super::context::HandlerContext;
use super::reply::Reply;

/// Signature shared by every entry in the dispatch table
pub type IntentHandler = fn(&IntentArgs, &HandlerContext) -> Reply;

pub const SALES_PAGE: &str = "sales";
pub const PURCHASING_PAGE: &str = "purchasing";

/// Navigate to `page` unless the UI already shows it
pub(crate) fn ensure_page_active(ctx: &HandlerContext, page: &str) {
    if !ctx.is_active(page) {
        ctx.effects.navigate(page);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use serde_json::Value;

    use super::IntentHandler;
    use crate::assistant::args::IntentArgs;
    use crate::assistant::context::{ContextSnapshot, HandlerContext, RecordedEffects};
    use crate::assistant::reply::Reply;
    use crate::types::Language;

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Run one handler against `snapshot` and return its reply plus the recorded effects
    pub fn run(
        handler: IntentHandler,
        args: Value,
        snapshot: &ContextSnapshot,
    ) -> (Reply, RecordedEffects) {
        let effects = RecordedEffects::new();
        let args = IntentArgs::from_value(args).unwrap();
        let reply = {
            let ctx = HandlerContext::new(snapshot, &effects, today(), Language::English);
            handler(&args, &ctx)
        };
        (reply, effects)
    }
}
