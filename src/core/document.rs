//! Printable Markdown report written by `report-calc export`.

use crate::config::Config;
use crate::core::model::Calculation;
use crate::core::report::{format_average, is_pass};
use crate::utils::fs::safe_file_stem;
use chrono::NaiveDate;
use std::fmt::Write;

pub const DEFAULT_PREPARED_FOR: &str = "STUDENT";

pub fn prepared_for(student: Option<&str>) -> String {
    student
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_uppercase)
        .unwrap_or_else(|| DEFAULT_PREPARED_FOR.to_string())
}

/// en-GB long form, e.g. `19 October 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

pub fn export_file_name(prepared_for: &str, timestamp_millis: i64) -> String {
    format!(
        "Report_{}_{}.md",
        safe_file_stem(prepared_for, "Student"),
        timestamp_millis
    )
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

fn escape_cell(text: &str) -> String {
    single_line(text).replace('|', "\\|")
}

pub fn render_document(
    calc: &Calculation,
    student: Option<&str>,
    date: NaiveDate,
    cfg: &Config,
) -> String {
    let decimals = cfg.general.decimals;
    let mut output = String::new();

    let _ = writeln!(output, "# {}", cfg.report.title);
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "**PREPARED FOR: {}**  ",
        single_line(&prepared_for(student)).replace('*', "\\*")
    );
    let _ = writeln!(output, "{}", format_date(date));
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "## {} / 20 · {}",
        format_average(calc.overall.final_average, decimals),
        calc.overall.classification.label().to_uppercase()
    );
    let _ = writeln!(output);

    if calc.subjects.is_empty() {
        let _ = writeln!(output, "No subjects were scored.");
    } else {
        let _ = writeln!(output, "| SUBJECT | COEFFICIENT | GRADE |");
        let _ = writeln!(output, "|:--------|:-----------:|------:|");
        for subject in &calc.subjects {
            let name = if subject.has_activity {
                format!("{} (activity included)", escape_cell(&subject.name))
            } else {
                escape_cell(&subject.name)
            };
            let verdict = if is_pass(subject.final_average, cfg) {
                "pass"
            } else {
                "fail"
            };

            let _ = writeln!(
                output,
                "| {} | {} | {} ({}) |",
                name,
                subject.coefficient,
                format_average(subject.final_average, decimals),
                verdict
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "---");
    let _ = writeln!(output);
    let _ = writeln!(output, "_{}_", cfg.report.footer);

    output
}
