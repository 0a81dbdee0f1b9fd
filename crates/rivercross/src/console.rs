//! Colorful console output for search events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Search start and end
//! - **DEBUG**: Improvements of the best total
//! - **TRACE**: Node expansions (filtered out unless `RUST_LOG` asks)

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::SolutionReport;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`, defaulting to INFO for the solver.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("rivercross") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    horse_count: Option<u64>,
    group_limit: Option<u64>,
    root_crossings: Option<u64>,
    parallel: Option<bool>,
    solutions: Option<u64>,
    best_total: Option<u64>,
    total: Option<u64>,
    crossings: Option<u64>,
    nodes: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "event" {
            self.event = Some(format!("{:?}", value).trim_matches('"').to_string());
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "horse_count" => self.horse_count = Some(value),
            "group_limit" => self.group_limit = Some(value),
            "root_crossings" => self.root_crossings = Some(value),
            "solutions" => self.solutions = Some(value),
            "best_total" => self.best_total = Some(value),
            "total" => self.total = Some(value),
            "crossings" => self.crossings = Some(value),
            "nodes" => self.nodes = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "parallel" {
            self.parallel = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "new_best" => format_new_best(v),
        "solve_end" => format_solve_end(v),
        _ => String::new(),
    }
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} Searching │ {} horses │ boat for {}",
        "▶".bright_green().bold(),
        format_count(v.horse_count.unwrap_or(0)).bright_yellow(),
        format_count(v.group_limit.unwrap_or(0)).bright_yellow(),
    );
    if v.parallel == Some(true) {
        output.push_str(&format!(
            " │ {} parallel roots",
            format_count(v.root_crossings.unwrap_or(0)).bright_magenta()
        ));
    }
    output
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "{} New best {} │ {} crossings │ {} nodes",
        "◆".bright_blue(),
        format_count(v.total.unwrap_or(0)).bright_white().bold(),
        v.crossings.unwrap_or(0),
        format_count(v.nodes.unwrap_or(0)).bright_black(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let solutions = v.solutions.unwrap_or(0);
    let status = if solutions > 0 {
        format!("best {}", format_count(v.best_total.unwrap_or(0)))
            .bright_green()
            .bold()
            .to_string()
    } else {
        "NO SOLUTION".bright_red().bold().to_string()
    };

    format!(
        "{} Search complete │ {} │ {} solutions │ {} nodes │ {} ms",
        "■".bright_cyan().bold(),
        status,
        format_count(solutions).bright_yellow(),
        format_count(v.nodes.unwrap_or(0)),
        format_count(v.duration_ms.unwrap_or(0)),
    )
}

/// Prints a colored summary of a report to stdout.
pub fn print_summary(report: &SolutionReport) {
    let mut stdout = io::stdout().lock();

    let Some(best) = report.best_total() else {
        let _ = writeln!(
            stdout,
            "{}",
            "No schedule gets every horse across within the stamina limit.".bright_red()
        );
        return;
    };

    let _ = writeln!(
        stdout,
        "{} optimal schedule(s), total time {}",
        format_count(report.num_of_solutions as u64).bright_yellow(),
        format_count(best).bright_green().bold(),
    );
    for (index, solution) in report.solutions.iter().enumerate() {
        let steps: Vec<String> = solution
            .path
            .iter()
            .enumerate()
            .map(|(step, labels)| {
                let arrow = if step % 2 == 0 { "→" } else { "←" };
                format!("{}{}", arrow, labels.join("+"))
            })
            .collect();
        let _ = writeln!(
            stdout,
            "  {:>3}. {}",
            (index + 1).bright_black(),
            steps.join(" ")
        );
    }
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("node")).is_empty());
        assert!(format_event(&EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_solve_end_without_solutions() {
        let output = format_event(&visitor("solve_end"));
        assert!(output.contains("NO SOLUTION"));
    }

    #[test]
    fn test_solve_end_groups_digits() {
        let mut v = visitor("solve_end");
        v.solutions = Some(2);
        v.best_total = Some(17);
        v.nodes = Some(1_234_567);

        let output = format_event(&v);
        assert!(output.contains("1,234,567"));
        assert!(output.contains("17"));
    }
}
