//! Navigation and help intents

use crate::assistant::args::IntentArgs;
use crate::assistant::context::HandlerContext;
use crate::assistant::reply::{Argument, Reply};

/// `navigateTo { page }`: open a page and close the assistant panel
pub fn navigate_to(args: &IntentArgs, ctx: &HandlerContext) -> Reply {
    let Some(page) = args.text("page") else {
        return Reply::missing(Argument::Page);
    };
    ctx.effects.navigate(&page);
    ctx.effects.set_assistant_open(false);
    Reply::Navigated { page }
}

/// `showHelp`
pub fn show_help(_args: &IntentArgs, _ctx: &HandlerContext) -> Reply {
    Reply::Help
}
