//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Lexile / grade searches with input validation and book matching
//!   - Turning a finished assessment into a level result

use tracing::{info, instrument};

use crate::books::books_for_level;
use crate::domain::GradingLevel;
use crate::lookup::GradingTable;
use crate::protocol::{GradeSearchOut, LevelResultOut};
use crate::util::trunc_for_log;
use crate::validate::{parse_lexile_input, validate_grade_input, InputError};

/// Attach matching books to an optional level.
pub fn level_result(level: Option<&GradingLevel>) -> LevelResultOut {
  let books = level.map(books_for_level).unwrap_or_default();
  LevelResultOut {
    level: level.cloned(),
    books: books.into_iter().cloned().collect(),
  }
}

pub fn lexile_result(table: &GradingTable<'_>, value: i32) -> LevelResultOut {
  level_result(table.find_level_by_lexile(value))
}

#[instrument(level = "info", skip(table, raw), fields(raw = %trunc_for_log(raw, 32)))]
pub fn search_by_lexile(table: &GradingTable<'_>, raw: &str) -> Result<LevelResultOut, InputError> {
  let value = parse_lexile_input(raw)?;
  let result = lexile_result(table, value);
  info!(target: "lookup", value, level = ?result.level.as_ref().map(|l| l.oxford_level), books = result.books.len(), "Lexile search");
  Ok(result)
}

#[instrument(level = "info", skip(table, raw), fields(raw = %trunc_for_log(raw, 32)))]
pub fn search_by_grade(table: &GradingTable<'_>, raw: &str) -> Result<GradeSearchOut, InputError> {
  let grade = validate_grade_input(raw)?;
  let matches = table.find_levels_by_grade(grade);
  let result = level_result(matches.first().copied());
  info!(target: "lookup", %grade, matches = matches.len(), "Grade search");
  Ok(GradeSearchOut {
    matches: matches.into_iter().cloned().collect(),
    result,
  })
}

/// Route a finished assessment's estimate through the Lexile lookup.
pub fn assessment_result(table: &GradingTable<'_>, lexile: i32) -> LevelResultOut {
  let result = lexile_result(table, lexile);
  info!(target: "assessment", lexile, level = ?result.level.as_ref().map(|l| l.oxford_level), "Assessment result resolved");
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lexile_search_attaches_books() {
    let table = GradingTable::builtin();
    let out = search_by_lexile(&table, "300").unwrap();
    assert_eq!(out.level.as_ref().map(|l| l.oxford_level), Some("Level 4"));
    let ids: Vec<_> = out.books.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["ox-l4-1", "raz-e-1"]);
  }

  #[test]
  fn valid_but_uncovered_lexile_has_no_level_and_no_books() {
    let out = search_by_lexile(&GradingTable::builtin(), "1800").unwrap();
    assert!(out.level.is_none());
    assert!(out.books.is_empty());
  }

  #[test]
  fn invalid_lexile_is_rejected_before_lookup() {
    assert_eq!(search_by_lexile(&GradingTable::builtin(), "-5").unwrap_err(), InputError::Negative);
  }

  #[test]
  fn grade_search_uses_the_first_match_for_the_result_card() {
    let out = search_by_grade(&GradingTable::builtin(), "三年级").unwrap();
    assert_eq!(out.matches.len(), 3);
    assert_eq!(out.result.level.as_ref().map(|l| l.oxford_level), Some("Level 6"));
    assert!(out.result.books.iter().any(|b| b.id == "ox-l6-1"));
  }

  #[test]
  fn perfect_assessment_lands_in_the_upper_levels() {
    let out = assessment_result(&GradingTable::builtin(), 1050);
    assert_eq!(out.level.as_ref().map(|l| l.oxford_level), Some("Level 16"));
  }
}
