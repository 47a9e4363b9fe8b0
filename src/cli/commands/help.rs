//! help command - Show the command listing

use std::sync::Arc;

use anyhow::Result;

use crate::core::state::StateSnapshot;
use crate::engine::Operation;
use crate::ui::UsagePrinter;

/// Prints the full command listing.
///
/// The dispatcher answers `standup help [COMMAND]` itself; this operation
/// supplies the entry in the listing and the text for `help help`.
#[derive(Clone)]
pub struct HelpCommand {
    usage: Arc<dyn UsagePrinter>,
}

impl HelpCommand {
    pub fn new(usage: Arc<dyn UsagePrinter>) -> Self {
        Self { usage }
    }
}

impl Operation for HelpCommand {
    fn execute(&self, _tokens: &[String], _state: StateSnapshot) -> Result<()> {
        self.usage.print();
        Ok(())
    }

    fn usage(&self) -> String {
        "Prints usage for standup or for one command\n\n  standup help [COMMAND]".to_string()
    }
}
