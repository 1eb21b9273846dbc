//! Domain models: grading levels, book catalog entries, framework info, and the
//! assessment question bank.

use serde::{Deserialize, Serialize};

/// One rung of the proficiency ladder, expressed in every supported framework.
/// `oxford_level` is the natural key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingLevel {
  pub oxford_level: &'static str,
  pub lexile_range: &'static str,
  /// Inclusive lower bound.
  pub lexile_min: i32,
  /// Inclusive upper bound.
  pub lexile_max: i32,
  pub cefr: &'static str,
  pub china_standard: &'static str,
  pub cambridge_exam: &'static str,
  pub raz: &'static str,
  pub heinemann: &'static str,
  pub age_range: &'static str,
  pub recommended_grade: &'static str,
}

impl GradingLevel {
  pub fn contains(&self, lexile: i32) -> bool {
    lexile >= self.lexile_min && lexile <= self.lexile_max
  }

  /// Twice the distance from `lexile` to the range midpoint.
  /// Doubling keeps the comparison exact for odd-width ranges.
  pub fn midpoint_distance_x2(&self, lexile: i32) -> i64 {
    let twice_mid = self.lexile_min as i64 + self.lexile_max as i64;
    (2 * lexile as i64 - twice_mid).abs()
  }
}

/// Graded-reader series a catalog entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
  Oxford,
  #[serde(rename = "RAZ")]
  Raz,
  Heinemann,
  Cambridge,
}

/// Static catalog entry. `level` uses the series' own labeling scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecommendation {
  pub id: &'static str,
  pub series: Series,
  pub level: &'static str,
  pub title: &'static str,
  pub description: &'static str,
  /// Placeholder-art color token.
  pub cover_color: &'static str,
  pub tags: &'static [&'static str],
}

/// Content for one framework information page.
#[derive(Clone, Debug, Serialize)]
pub struct SystemInfo {
  pub id: &'static str,
  pub name: &'static str,
  pub description: &'static str,
  pub features: &'static [&'static str],
  #[serde(skip_serializing_if = "Option::is_none")]
  pub website: Option<&'static str>,
}

/// Multiple-choice option with its point value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
  pub text: String,
  pub score: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub text: String,
  #[serde(default)]
  pub options: Vec<AnswerOption>,
}
