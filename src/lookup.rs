//! Queries over the grading table.
//!
//! Every query is total: no match is `None` or an empty `Vec`, never an error.
//! Numeric input is not validated here; see `validate` for the caller side.

use tracing::{debug, instrument};

use crate::domain::GradingLevel;
use crate::seeds::GRADING_LEVELS;

#[derive(Clone, Copy, Debug)]
pub struct GradingTable<'a> {
    levels: &'a [GradingLevel],
}

impl GradingTable<'static> {
    pub fn builtin() -> Self {
        Self::new(GRADING_LEVELS)
    }
}

impl Default for GradingTable<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> GradingTable<'a> {
    pub fn new(levels: &'a [GradingLevel]) -> Self {
        Self { levels }
    }

    pub fn levels(&self) -> &'a [GradingLevel] {
        self.levels
    }

    /// Level whose inclusive range contains `value`. With several candidates the
    /// one whose midpoint is closest wins; ties keep the earlier row.
    #[instrument(level = "debug", skip(self))]
    pub fn find_level_by_lexile(&self, value: i32) -> Option<&'a GradingLevel> {
        let best = self
            .levels
            .iter()
            .filter(|level| level.contains(value))
            .fold(None::<&'a GradingLevel>, |best, candidate| match best {
                Some(current)
                    if candidate.midpoint_distance_x2(value)
                        >= current.midpoint_distance_x2(value) =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            });
        debug!(target: "lookup", value, found = ?best.map(|l| l.oxford_level), "Lexile lookup");
        best
    }

    /// Case-sensitive substring match on `recommended_grade`. Empty input matches all.
    pub fn find_levels_by_grade(&self, grade: &str) -> Vec<&'a GradingLevel> {
        self.levels
            .iter()
            .filter(|level| level.recommended_grade.contains(grade))
            .collect()
    }

    /// Case-sensitive substring match on `cefr`. Empty input matches all.
    pub fn find_levels_by_cefr(&self, cefr: &str) -> Vec<&'a GradingLevel> {
        self.levels
            .iter()
            .filter(|level| level.cefr.contains(cefr))
            .collect()
    }

    /// Case-insensitive substring match on `cambridge_exam`.
    pub fn find_levels_by_cambridge(&self, exam: &str) -> Vec<&'a GradingLevel> {
        let needle = exam.to_lowercase();
        self.levels
            .iter()
            .filter(|level| level.cambridge_exam.to_lowercase().contains(&needle))
            .collect()
    }

    /// Exact match on the primary key.
    pub fn find_level_by_oxford(&self, level_key: &str) -> Option<&'a GradingLevel> {
        self.levels.iter().find(|level| level.oxford_level == level_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(key: &'static str, min: i32, max: i32) -> GradingLevel {
        GradingLevel {
            oxford_level: key,
            lexile_range: "",
            lexile_min: min,
            lexile_max: max,
            cefr: "A1",
            china_standard: "",
            cambridge_exam: "Movers",
            raz: "",
            heinemann: "",
            age_range: "",
            recommended_grade: "",
        }
    }

    #[test]
    fn overlapping_ranges_prefer_the_closest_midpoint() {
        let table = GradingTable::builtin();
        let found = table.find_level_by_lexile(300).map(|l| l.oxford_level);
        assert_eq!(found, Some("Level 4"));
    }

    #[test]
    fn equal_midpoint_distance_keeps_the_first_row() {
        let rows = [level("A", 0, 100), level("B", 100, 200)];
        let table = GradingTable::new(&rows);
        assert_eq!(table.find_level_by_lexile(100).map(|l| l.oxford_level), Some("A"));

        // Builtin: 200 sits on the edge of Level 2 (100-200) and Level 3 (200-300).
        let builtin = GradingTable::builtin();
        assert_eq!(builtin.find_level_by_lexile(200).map(|l| l.oxford_level), Some("Level 2"));
    }

    #[test]
    fn a_later_strictly_closer_row_replaces_the_current_best() {
        let rows = [level("wide", 0, 1000), level("narrow", 90, 110)];
        let table = GradingTable::new(&rows);
        assert_eq!(table.find_level_by_lexile(100).map(|l| l.oxford_level), Some("narrow"));
    }

    #[test]
    fn out_of_range_values_yield_none() {
        let table = GradingTable::builtin();
        assert!(table.find_level_by_lexile(-1).is_none());
        assert!(table.find_level_by_lexile(1301).is_none());
        assert!(table.find_level_by_lexile(i32::MIN).is_none());
        assert!(table.find_level_by_lexile(i32::MAX).is_none());
        assert!(GradingTable::new(&[]).find_level_by_lexile(100).is_none());
    }

    #[test]
    fn every_covered_value_resolves_to_a_closest_containing_row() {
        let table = GradingTable::builtin();
        for value in -50..=1400 {
            let matching: Vec<_> = table.levels().iter().filter(|l| l.contains(value)).collect();
            match table.find_level_by_lexile(value) {
                None => assert!(matching.is_empty(), "value {value} should match"),
                Some(found) => {
                    assert!(found.contains(value));
                    let best = found.midpoint_distance_x2(value);
                    assert!(matching.iter().all(|l| best <= l.midpoint_distance_x2(value)));
                }
            }
        }
    }

    #[test]
    fn grade_lookup_is_substring_and_order_preserving() {
        let table = GradingTable::builtin();
        let keys: Vec<_> = table
            .find_levels_by_grade("三年级")
            .iter()
            .map(|l| l.oxford_level)
            .collect();
        assert_eq!(keys, vec!["Level 6", "Level 7", "Level 8"]);
        assert_eq!(table.find_levels_by_grade("").len(), table.levels().len());
        assert!(table.find_levels_by_grade("大学").is_empty());
    }

    #[test]
    fn cefr_lookup_is_case_sensitive_substring() {
        let table = GradingTable::builtin();
        let a1 = table.find_levels_by_cefr("A1");
        // "Pre-A1" and "A1+" both contain "A1".
        assert!(a1.iter().any(|l| l.cefr == "Pre-A1"));
        assert!(a1.iter().any(|l| l.cefr == "A1+"));
        assert!(a1.iter().all(|l| l.cefr.contains("A1")));
        assert!(table.find_levels_by_cefr("a1").is_empty());
        assert_eq!(table.find_levels_by_cefr("").len(), table.levels().len());
    }

    #[test]
    fn cambridge_lookup_ignores_case() {
        let table = GradingTable::builtin();
        let upper = table.find_levels_by_cambridge("MOVERS");
        let lower = table.find_levels_by_cambridge("movers");
        assert_eq!(upper, lower);
        let keys: Vec<_> = upper.iter().map(|l| l.oxford_level).collect();
        assert_eq!(keys, vec!["Level 4", "Level 5"]);
    }

    #[test]
    fn oxford_lookup_is_exact() {
        let table = GradingTable::builtin();
        assert_eq!(table.find_level_by_oxford("Level 1+").map(|l| l.lexile_min), Some(50));
        assert!(table.find_level_by_oxford("level 1").is_none());
        assert!(table.find_level_by_oxford("Level").is_none());
    }
}
