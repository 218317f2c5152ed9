use crate::config::Config;
use crate::core::classify::Classification;
use crate::core::model::{Calculation, SubjectResult};
use chrono::NaiveDate;
use colored::Colorize;
use serde::Serialize;

/// Rounds half away from zero, so `13.125` shows as `13.13` at two places.
pub fn format_average(value: f64, decimals: u8) -> String {
    let factor = 10f64.powi(i32::from(decimals));
    format!(
        "{:.*}",
        usize::from(decimals),
        (value * factor).round() / factor
    )
}

pub fn is_pass(average: f64, cfg: &Config) -> bool {
    average >= cfg.report.pass_mark
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonSubject {
    pub index: usize,
    pub name: String,
    pub coefficient: u32,
    pub has_activity: bool,
    pub exam_average: f64,
    pub final_average: f64,
    pub weighted_contribution: f64,
    pub passed: bool,
}

impl JsonSubject {
    fn new(subject: &SubjectResult, cfg: &Config) -> Self {
        Self {
            index: subject.index,
            name: subject.name.clone(),
            coefficient: subject.coefficient,
            has_activity: subject.has_activity,
            exam_average: subject.exam_average,
            final_average: subject.final_average,
            weighted_contribution: subject.weighted_contribution,
            passed: is_pass(subject.final_average, cfg),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<String>,
    pub date: NaiveDate,
    pub final_average: f64,
    pub total_coefficient: u32,
    pub classification: Classification,
    pub subjects: Vec<JsonSubject>,
}

impl JsonReport {
    pub fn new(
        calc: &Calculation,
        student: Option<&str>,
        date: NaiveDate,
        cfg: &Config,
    ) -> Self {
        Self {
            student: student.map(ToString::to_string),
            date,
            final_average: calc.overall.final_average,
            total_coefficient: calc.overall.total_coefficient,
            classification: calc.overall.classification,
            subjects: calc
                .subjects
                .iter()
                .map(|subject| JsonSubject::new(subject, cfg))
                .collect(),
        }
    }
}

pub fn print_human(calc: &Calculation, student: Option<&str>, cfg: &Config) {
    let decimals = cfg.general.decimals;

    if let Some(student) = student {
        println!("Report for {}", student.bold());
    }
    println!(
        "Final Average: {}/20 ({})",
        format_average(calc.overall.final_average, decimals).bold(),
        calc.overall.classification.colored()
    );

    if calc.subjects.is_empty() {
        return;
    }

    let name_width = calc
        .subjects
        .iter()
        .map(|subject| subject.name.chars().count())
        .max()
        .unwrap_or(0);

    println!();
    println!("{} ({})", "SUBJECTS".bold(), calc.subjects.len());
    for subject in &calc.subjects {
        let average = format_average(subject.final_average, decimals);
        let average = if is_pass(subject.final_average, cfg) {
            average.green().bold()
        } else {
            average.red().bold()
        };
        let activity = if subject.has_activity {
            format!(" {}", "• activity included".cyan())
        } else {
            String::new()
        };

        println!(
            "#{:<3} {:<width$}  coeff {:>2}  {}{}",
            subject.index,
            subject.name,
            subject.coefficient,
            average,
            activity,
            width = name_width
        );
    }

    println!();
    println!("total coefficient: {}", calc.overall.total_coefficient);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{RawEntry, ScoreRequest, SubjectConfig, SubjectRequest};
    use crate::core::score;

    fn calculation() -> Calculation {
        let mut maths = SubjectConfig::new(1);
        maths.coefficient = 2;
        maths.has_activity = true;
        let mut history = SubjectConfig::new(2);
        history.name = "History".to_string();

        score::calculate(&ScoreRequest {
            subjects: vec![
                SubjectRequest {
                    config: maths,
                    exams: vec![RawEntry::Number(16.0)],
                    activity: Some(RawEntry::Number(8.0)),
                },
                SubjectRequest {
                    config: history,
                    exams: vec![RawEntry::from("7.5")],
                    activity: None,
                },
            ],
        })
        .unwrap()
    }

    #[test]
    fn formats_with_configured_decimals() {
        assert_eq!(format_average(17.5, 2), "17.50");
        assert_eq!(format_average(13.9375, 1), "13.9");
        assert_eq!(format_average(12.0, 0), "12");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(format_average(13.125, 2), "13.13");
        assert_eq!(format_average(10.125, 2), "10.13");
        assert_eq!(format_average(0.625, 2), "0.63");
        assert_eq!(format_average(12.5, 0), "13");
    }

    #[test]
    fn blended_tie_displays_rounded_up() {
        let mut config = SubjectConfig::new(1);
        config.exam_count = 2;
        config.has_activity = true;
        let result = score::score_subject(
            &config,
            &[RawEntry::Number(12.0), RawEntry::Number(13.0)],
            Some(&RawEntry::Number(15.0)),
        )
        .unwrap();

        assert_eq!(result.final_average, 13.125);
        assert_eq!(format_average(result.final_average, 2), "13.13");
    }

    #[test]
    fn json_report_marks_pass_and_fail() {
        let calc = calculation();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let report = JsonReport::new(&calc, Some("Lina"), date, &Config::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["student"], "Lina");
        assert_eq!(json["date"], "2026-10-19");
        assert_eq!(json["total_coefficient"], 3);
        assert_eq!(json["classification"]["label"], "Good");
        assert_eq!(json["subjects"][0]["passed"], true);
        assert_eq!(json["subjects"][1]["passed"], false);
        assert_eq!(json["subjects"][1]["name"], "History");
    }

    #[test]
    fn json_report_omits_missing_student() {
        let calc = calculation();
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let json =
            serde_json::to_value(JsonReport::new(&calc, None, date, &Config::default())).unwrap();
        assert!(json.get("student").is_none());
    }
}
