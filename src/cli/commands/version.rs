//! version command - Show version

use anyhow::Result;

use crate::core::state::StateSnapshot;
use crate::engine::Operation;
use crate::ui::output;

/// Version line printed by `standup version`.
pub fn version_line() -> String {
    format!("standup {}", env!("CARGO_PKG_VERSION"))
}

/// Prints the version.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionCommand;

impl Operation for VersionCommand {
    fn execute(&self, _tokens: &[String], _state: StateSnapshot) -> Result<()> {
        output::value(version_line());
        Ok(())
    }

    fn usage(&self) -> String {
        "Prints version".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_has_package_version() {
        assert_eq!(version_line(), format!("standup {}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn ignores_tokens_and_state() {
        let tokens = vec!["--anything".to_string()];
        VersionCommand.execute(&tokens, StateSnapshot::default()).unwrap();
    }
}
