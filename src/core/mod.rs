pub mod classify;
pub mod document;
pub mod error;
pub mod model;
pub mod report;
pub mod score;
pub mod validate;

use crate::config::Config;
use crate::sheet::Sheet;
use chrono::NaiveDate;
use error::ValidationError;
use model::Calculation;

/// A scored sheet with everything the presenters need.
#[derive(Debug, Clone)]
pub struct ScoredSheet {
    pub student: Option<String>,
    pub date: NaiveDate,
    pub calculation: Calculation,
}

impl ScoredSheet {
    pub fn student(&self) -> Option<&str> {
        self.student.as_deref()
    }
}

pub fn score_sheet(
    sheet: &Sheet,
    student_override: Option<&str>,
    date: NaiveDate,
) -> Result<ScoredSheet, ValidationError> {
    let calculation = score::calculate(&sheet.to_request())?;
    let student = student_override
        .or(sheet.student.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string);

    Ok(ScoredSheet {
        student,
        date,
        calculation,
    })
}

pub fn render_json(scored: &ScoredSheet, cfg: &Config) -> serde_json::Result<String> {
    let json_report =
        report::JsonReport::new(&scored.calculation, scored.student(), scored.date, cfg);
    serde_json::to_string_pretty(&json_report)
}
