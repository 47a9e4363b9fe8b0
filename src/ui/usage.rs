//! ui::usage
//!
//! Usage text rendering.
//!
//! # Design
//!
//! The dispatcher talks to a [`UsagePrinter`] and never writes to the
//! terminal itself. [`ConsoleUsage`] is the stdout implementation; its
//! `render_*` methods return the text so layouts can be checked without
//! capturing output.

/// Renders the command listing and per-command help.
pub trait UsagePrinter: Send + Sync {
    /// Print the full command listing.
    fn print(&self);

    /// Print the detail for one command.
    ///
    /// # Arguments
    ///
    /// * `usage` - The command's own usage text
    /// * `command` - The command name
    fn print_command_usage(&self, usage: &str, command: &str);
}

/// Global options shown in the listing, as (flag, description).
const GLOBAL_OPTIONS: &[(&str, &str)] = &[
    ("--help, -h", "Print usage"),
    ("--version, -v", "Print version"),
    ("--state-dir <DIR>", "Directory that stores state.json"),
    ("--endpoint-override <URL>", "Override the cloud API endpoint"),
    ("--debug", "Enable debug logging"),
    ("--quiet, -q", "Minimal output"),
];

/// One line of the command listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub summary: String,
}

/// Usage printer writing to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleUsage {
    program: String,
    commands: Vec<CommandSummary>,
}

impl ConsoleUsage {
    /// Create a printer for `program` listing `commands`.
    ///
    /// Commands are listed in name order regardless of input order.
    pub fn new<'a>(
        program: impl Into<String>,
        commands: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut commands: Vec<CommandSummary> = commands
            .into_iter()
            .map(|(name, summary)| CommandSummary {
                name: name.to_string(),
                summary: summary.to_string(),
            })
            .collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            program: program.into(),
            commands,
        }
    }

    /// Render the full listing.
    pub fn render(&self) -> String {
        let mut out = String::from("Usage:\n");
        out.push_str(&format!(
            "  {} [GLOBAL OPTIONS] COMMAND [OPTIONS]\n\n",
            self.program
        ));

        out.push_str("Global Options:\n");
        let width = column_width(GLOBAL_OPTIONS.iter().map(|(flag, _)| *flag));
        for (flag, description) in GLOBAL_OPTIONS {
            out.push_str(&format!("  {:<width$}  {}\n", flag, description, width = width));
        }
        out.push('\n');

        out.push_str("Commands:\n");
        let width = column_width(self.commands.iter().map(|c| c.name.as_str()));
        for command in &self.commands {
            out.push_str(&format!(
                "  {:<width$}  {}\n",
                command.name,
                command.summary,
                width = width
            ));
        }

        out
    }

    /// Render the detail for one command.
    pub fn render_command(&self, usage: &str, command: &str) -> String {
        let mut out = format!(
            "Usage:\n  {} [GLOBAL OPTIONS] {} [OPTIONS]\n",
            self.program, command
        );

        let usage = usage.trim_end();
        if !usage.is_empty() {
            out.push('\n');
            out.push_str(usage);
            out.push('\n');
        }

        out
    }
}

impl UsagePrinter for ConsoleUsage {
    fn print(&self) {
        print!("{}", self.render());
    }

    fn print_command_usage(&self, usage: &str, command: &str) {
        print!("{}", self.render_command(usage, command));
    }
}

fn column_width<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(str::len).max().unwrap_or(0)
}
