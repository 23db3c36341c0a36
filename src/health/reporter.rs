//! Table rendering for health check reports

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::runner::HealthCheckReport;

/// Renders a report as a table followed by a tally
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["System", "Status", "Duration", "Message"]);
    for (name, result) in &report.results {
        builder.push_record([
            name.as_str(),
            &result.status.label(),
            &format!("{:.2?}", result.duration),
            &result.message,
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!("{table}\n{}", summary(report))
}

fn summary(report: &HealthCheckReport) -> String {
    let mut lines = vec![
        format!("\n{}", "Summary".bold().underline()),
        format!("  Total checks: {}", report.total),
        format!("  {} Passed: {}", "✓".green(), report.passed),
    ];
    if report.warned > 0 {
        lines.push(format!("  {} Warned: {}", "⚠".yellow(), report.warned));
    }
    if report.failed > 0 {
        lines.push(format!("  {} Failed: {}", "✗".red(), report.failed));
    }

    let overall = if !report.is_healthy() {
        "Overall: UNHEALTHY".red().bold()
    } else if report.has_warnings() {
        "Overall: HEALTHY (with warnings)".yellow().bold()
    } else {
        "Overall: HEALTHY".green().bold()
    };
    lines.push(format!("\n  {overall}\n"));
    lines.join("\n")
}

/// Prints a report and any per-check details to stdout
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    for (name, result) in &report.results {
        if let Some(details) = &result.details {
            println!("\n{} Details:", name.bold());
            println!("{details}");
        }
    }
}
