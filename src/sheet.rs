use crate::core::model::{
    RawEntry, ScoreRequest, SubjectConfig, SubjectRequest, default_subject_name,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk score sheet: the student's display name plus one entry per subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<String>,
    pub subjects: Vec<SheetSubject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSubject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub coefficient: u32,
    pub exams: Vec<RawEntry>,
    pub has_activity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<RawEntry>,
}

impl Default for SheetSubject {
    fn default() -> Self {
        Self {
            name: None,
            coefficient: 1,
            exams: Vec::new(),
            has_activity: false,
            activity: None,
        }
    }
}

impl Sheet {
    /// Sheet with `count` subjects, each with one empty exam slot.
    pub fn blank(count: usize, student: Option<String>) -> Self {
        let subjects = (1..=count)
            .map(|index| SheetSubject {
                name: Some(default_subject_name(index)),
                exams: vec![RawEntry::blank()],
                ..SheetSubject::default()
            })
            .collect();

        Self { student, subjects }
    }

    pub fn to_request(&self) -> ScoreRequest {
        let subjects = self
            .subjects
            .iter()
            .enumerate()
            .map(|(idx, subject)| {
                let index = idx + 1;
                let name = subject
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(ToString::to_string)
                    .unwrap_or_else(|| default_subject_name(index));

                SubjectRequest {
                    config: SubjectConfig {
                        name,
                        coefficient: subject.coefficient,
                        exam_count: subject.exams.len(),
                        has_activity: subject.has_activity,
                        ..SubjectConfig::new(index)
                    },
                    exams: subject.exams.clone(),
                    activity: subject.activity.clone(),
                }
            })
            .collect();

        ScoreRequest { subjects }
    }

    /// Subjects that carry an activity entry the flag switches off.
    pub fn ignored_activities(&self) -> Vec<usize> {
        self.subjects
            .iter()
            .enumerate()
            .filter(|(_, subject)| !subject.has_activity && subject.activity.is_some())
            .map(|(idx, _)| idx + 1)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Toml,
    Json,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

pub fn load_sheet(path: &Path) -> Result<Sheet> {
    if !path.is_file() {
        bail!("score sheet not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading score sheet {}", path.display()))?;
    parse_sheet(&content, SheetFormat::from_path(path))
        .with_context(|| format!("failed parsing score sheet {}", path.display()))
}

pub fn parse_sheet(content: &str, format: SheetFormat) -> Result<Sheet> {
    let sheet = match format {
        SheetFormat::Toml => toml::from_str::<Sheet>(content)?,
        SheetFormat::Json => serde_json::from_str::<Sheet>(content)?,
    };
    Ok(sheet)
}

pub fn render_sheet(sheet: &Sheet, format: SheetFormat) -> Result<String> {
    match format {
        SheetFormat::Toml => {
            toml::to_string_pretty(sheet).context("failed to serialize score sheet")
        }
        SheetFormat::Json => {
            serde_json::to_string_pretty(sheet).context("failed to serialize score sheet")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    const SAMPLE: &str = r#"
student = "Karim"

[[subjects]]
name = "Maths"
coefficient = 3
exams = [12, "14.5"]
has_activity = true
activity = 16

[[subjects]]
coefficient = 1
exams = [9]
"#;

    #[test]
    fn parses_mixed_numeric_and_text_entries() {
        let sheet = parse_sheet(SAMPLE, SheetFormat::Toml).unwrap();
        assert_eq!(sheet.student.as_deref(), Some("Karim"));
        assert_eq!(sheet.subjects.len(), 2);
        assert_eq!(
            sheet.subjects[0].exams,
            vec![RawEntry::Number(12.0), RawEntry::from("14.5")]
        );
        assert_eq!(sheet.subjects[0].activity, Some(RawEntry::Number(16.0)));
        assert!(!sheet.subjects[1].has_activity);
    }

    #[test]
    fn request_fills_default_names_and_indexes() {
        let sheet = parse_sheet(SAMPLE, SheetFormat::Toml).unwrap();
        let request = sheet.to_request();
        assert_eq!(request.subjects[0].config.name, "Maths");
        assert_eq!(request.subjects[0].config.exam_count, 2);
        assert_eq!(request.subjects[1].config.index, 2);
        assert_eq!(request.subjects[1].config.name, "Subject 2");
    }

    #[test]
    fn sample_sheet_scores() {
        let sheet = parse_sheet(SAMPLE, SheetFormat::Toml).unwrap();
        let calc = score::calculate(&sheet.to_request()).unwrap();
        // Maths: (12 + 14.5) / 2 = 13.25, blended with 16 -> 13.9375
        assert!((calc.subjects[0].final_average - 13.9375).abs() < 1e-9);
        let expected = (13.9375 * 3.0 + 9.0) / 4.0;
        assert!((calc.overall.final_average - expected).abs() < 1e-9);
    }

    #[test]
    fn blank_sheet_fails_on_first_subject() {
        let sheet = Sheet::blank(3, None);
        assert_eq!(sheet.subjects.len(), 3);
        assert_eq!(sheet.subjects[2].name.as_deref(), Some("Subject 3"));

        let err = score::calculate(&sheet.to_request()).unwrap_err();
        assert_eq!(err.subject(), 1);
    }

    #[test]
    fn blank_sheet_survives_both_formats() {
        let sheet = Sheet::blank(2, Some("Lina".to_string()));
        for format in [SheetFormat::Toml, SheetFormat::Json] {
            let rendered = render_sheet(&sheet, format).unwrap();
            assert_eq!(parse_sheet(&rendered, format).unwrap(), sheet);
        }
    }

    #[test]
    fn json_sheet_is_detected_by_extension() {
        assert_eq!(
            SheetFormat::from_path(Path::new("grades.JSON")),
            SheetFormat::Json
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("grades.toml")),
            SheetFormat::Toml
        );
        assert_eq!(SheetFormat::from_path(Path::new("grades")), SheetFormat::Toml);
    }

    #[test]
    fn reports_ignored_activity_entries() {
        let sheet = parse_sheet(
            r#"
[[subjects]]
exams = [10]
activity = 12
"#,
            SheetFormat::Toml,
        )
        .unwrap();
        assert_eq!(sheet.ignored_activities(), vec![1]);
    }
}
