use crate::core::classify::classify;
use crate::core::error::ValidationError;
use crate::core::model::{
    Calculation, OverallResult, RawEntry, ScoreRequest, SubjectConfig, SubjectResult,
};
use crate::core::validate;

pub const EXAM_WEIGHT: f64 = 0.75;
pub const ACTIVITY_WEIGHT: f64 = 0.25;

pub fn score_subject(
    config: &SubjectConfig,
    exams: &[RawEntry],
    activity: Option<&RawEntry>,
) -> Result<SubjectResult, ValidationError> {
    validate::check_shape(config, exams)?;

    let scores = validate::exam_scores(config.index, exams)?;
    let exam_average = scores.iter().sum::<f64>() / scores.len() as f64;

    let final_average = if config.has_activity {
        let activity = validate::activity_score(config.index, activity)?;
        exam_average * EXAM_WEIGHT + activity * ACTIVITY_WEIGHT
    } else {
        exam_average
    };

    Ok(SubjectResult {
        index: config.index,
        name: config.name.clone(),
        coefficient: config.coefficient,
        has_activity: config.has_activity,
        exam_average,
        final_average,
        weighted_contribution: final_average * f64::from(config.coefficient),
    })
}

pub fn compute_overall(subjects: &[SubjectResult]) -> OverallResult {
    let total_weighted: f64 = subjects.iter().map(|s| s.weighted_contribution).sum();
    let total_coefficient: u32 = subjects.iter().map(|s| s.coefficient).sum();

    let final_average = if total_coefficient > 0 {
        total_weighted / f64::from(total_coefficient)
    } else {
        0.0
    };

    OverallResult {
        final_average,
        total_coefficient,
        classification: classify(final_average),
    }
}

/// All-or-nothing: the first invalid subject aborts the whole calculation.
pub fn calculate(request: &ScoreRequest) -> Result<Calculation, ValidationError> {
    let subjects = request
        .subjects
        .iter()
        .map(|subject| score_subject(&subject.config, &subject.exams, subject.activity.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Calculation {
        overall: compute_overall(&subjects),
        subjects,
    })
}
