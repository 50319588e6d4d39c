//! Text output formatting.

use launchdeck_core::{Company, Launch};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a formatter that colors output when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            use_colors: std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }

    /// Creates a formatter with colors forced on or off.
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Formats the company profile.
    pub fn format_company(&self, company: &Company) -> String {
        let mut lines = Vec::new();
        lines.push(self.paint(BOLD, &company.name));
        lines.push(format!(
            "Founded {} by {} | {} employees | valued at ${}",
            company.founded, company.founder, company.employees, company.valuation
        ));
        lines.push(format!(
            "HQ: {}, {}, {}",
            company.headquarters.address, company.headquarters.city, company.headquarters.state
        ));
        lines.push(format!(
            "{} vehicles | {} launch sites | {} test sites",
            company.vehicles, company.launch_sites, company.test_sites
        ));
        lines.push(String::new());
        lines.push(company.summary.clone());
        lines.join("\n") + "\n"
    }

    /// Formats the launch listing with an accumulation summary line.
    pub fn format_launches(&self, launches: &[Launch], total_docs: u32) -> String {
        let mut lines = Vec::new();
        lines.push(self.paint(
            DIM,
            &format!("{} of {} launches", launches.len(), total_docs),
        ));
        for launch in launches {
            lines.push(self.format_launch_row(launch));
        }
        lines.join("\n") + "\n"
    }

    fn format_launch_row(&self, launch: &Launch) -> String {
        let outcome = match launch.success {
            Some(true) => self.paint(GREEN, "ok"),
            Some(false) => self.paint(RED, "failed"),
            None if launch.upcoming => self.paint(YELLOW, "upcoming"),
            None => self.paint(DIM, "unknown"),
        };
        format!(
            "#{:<4} {}  {}  [{}]",
            launch.flight_number,
            launch.formatted_date(),
            self.paint(BOLD, &launch.name),
            outcome
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
