//! Voice command engine
//!
//! `(intent, args)` pairs come in from a speech/LLM recognizer; the dispatch
//! table routes them to a handler which validates against the context
//! snapshot, emits effects and returns a reply.

pub mod actions;
pub mod args;
pub mod context;
pub mod dispatch;
pub mod handlers;
pub mod outcome;
pub mod reply;

pub use actions::UiAction;
pub use args::{IntentArgs, RequestedLine};
pub use context::{
    AssistantEffects, ContextSnapshot, Effect, HandlerContext, RecordedEffects,
    DEFAULT_REQUISITION_NOTES,
};
pub use dispatch::HandlerDispatchTable;
pub use handlers::IntentHandler;
pub use outcome::{CommandResult, ExecuteOptions};
pub use reply::{Argument, Reply, StockWarning};
