//! Display formatting for lint output

use console::style;

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// A lint finding with an optional values path
#[derive(Debug, Clone)]
pub struct LintIssue {
    pub severity: Severity,
    pub path: String,
    pub message: String,
}

/// Collected lint results
#[derive(Debug, Default)]
pub struct LintReport {
    pub issues: Vec<LintIssue>,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and print an error
    pub fn error(&mut self, path: &str, message: impl Into<String>) {
        self.push(Severity::Error, path, message.into());
    }

    /// Record and print a warning
    pub fn warning(&mut self, path: &str, message: impl Into<String>) {
        self.push(Severity::Warning, path, message.into());
    }

    /// Print a passing check
    pub fn ok(&self, message: impl AsRef<str>) {
        println!("  {} {}", style("✓").green(), message.as_ref());
    }

    fn push(&mut self, severity: Severity, path: &str, message: String) {
        let icon = match severity {
            Severity::Error => style("✗").red(),
            Severity::Warning => style("⚠").yellow(),
        };
        let path_display = if path.is_empty() {
            String::new()
        } else {
            format!(" at {}", style(path).dim())
        };
        println!("  {} {}{}", icon, message, path_display);

        self.issues.push(LintIssue {
            severity,
            path: path.to_string(),
            message,
        });
    }

    /// Get (errors, warnings) counts
    pub fn summary(&self) -> (usize, usize) {
        let errors = self
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        (errors, self.issues.len() - errors)
    }

    /// Print summary line
    pub fn print_summary(&self) {
        let (errors, warnings) = self.summary();
        println!();
        if errors > 0 {
            println!(
                "{} Linting failed with {} error(s) and {} warning(s)",
                style("✗").red().bold(),
                errors,
                warnings
            );
        } else if warnings > 0 {
            println!(
                "{} Linting passed with {} warning(s)",
                style("⚠").yellow().bold(),
                warnings
            );
        } else {
            println!("{} Linting passed!", style("✓").green().bold());
        }
    }
}
