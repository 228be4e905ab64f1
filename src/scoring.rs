use crate::error::QuizError;
use crate::model::{Catalog, Category, MAX_OPTION_VALUE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final result. Serializes to the snapshot JSON shape
/// `{ "finalScore": .., "categoryScores": { .. } }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub final_score: f64,
    pub category_scores: BTreeMap<Category, f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    NeedsImprovement,
    OnTheRightTrack,
    DoingGreat,
}

impl Tier {
    /// Thresholds apply to the unrounded score.
    pub fn from_score(score: f64) -> Self {
        if score < 4.0 {
            Tier::NeedsImprovement
        } else if score < 7.0 {
            Tier::OnTheRightTrack
        } else {
            Tier::DoingGreat
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::NeedsImprovement => {
                "You have a lot of room for improvement. Focus on building a strong personal brand to stand out in your industry."
            }
            Tier::OnTheRightTrack => {
                "You’re on the right track, but there’s still room for growth. Keep refining your personal brand to reach your goals."
            }
            Tier::DoingGreat => {
                "You’re doing great! Your personal brand is strong and well-defined. Keep up the good work!"
            }
        }
    }
}

/// Weighted score for a full response vector.
///
/// Each question adds `response * weight[category]` to its category, so a
/// category with several questions carries its weight once per question.
/// Unanswered slots (`0`) contribute nothing.
pub fn score_responses(catalog: &Catalog, responses: &[u32]) -> Result<ScoreReport, QuizError> {
    if responses.len() != catalog.len() {
        return Err(QuizError::ResponseCount {
            expected: catalog.len(),
            actual: responses.len(),
        });
    }

    let mut category_scores: BTreeMap<Category, f64> = BTreeMap::new();
    let mut max_possible = 0.0;

    for (q, &response) in catalog.questions().iter().zip(responses) {
        let weight = catalog
            .weight(q.category)
            .ok_or(QuizError::MissingWeight(q.category))?;
        *category_scores.entry(q.category).or_insert(0.0) += f64::from(response) * weight;
        max_possible += f64::from(MAX_OPTION_VALUE) * weight;
    }

    let total: f64 = category_scores.values().sum();
    let final_score = total / max_possible * 10.0;

    Ok(ScoreReport {
        final_score,
        category_scores,
    })
}

/// One line of the per-category breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub category: Category,
    pub score_out_of_five: i64,
}

impl CategoryRow {
    pub fn label(&self) -> String {
        format!("{} Score: {}/{}", self.category.label(), self.score_out_of_five, MAX_OPTION_VALUE)
    }
}

impl ScoreReport {
    /// Headline value shown as "X/10".
    pub fn rounded_score(&self) -> i64 {
        self.final_score.round() as i64
    }

    pub fn tier(&self) -> Tier {
        Tier::from_score(self.final_score)
    }

    pub fn headline(&self) -> String {
        format!("Your Personal Brand Score: {}/10", self.rounded_score())
    }

    /// Undoes the weighting for display. Categories the catalog has no weight
    /// for (possible with a stale snapshot) are skipped.
    pub fn category_rows(&self, catalog: &Catalog) -> Vec<CategoryRow> {
        self.category_scores
            .iter()
            .filter_map(|(&category, &score)| match catalog.weight(category) {
                Some(weight) => Some(CategoryRow {
                    category,
                    score_out_of_five: (score / weight).round() as i64,
                }),
                None => {
                    log::warn!("no weight for {category:?} in snapshot, skipping it");
                    None
                }
            })
            .collect()
    }
}
