//! Book matcher: picks catalog entries that fit a resolved grading level.

use crate::domain::{BookRecommendation, GradingLevel, Series};
use crate::seeds::BOOK_RECOMMENDATIONS;

/// Books for the given per-series labels, in catalog order.
///
/// Oxford and Heinemann require exact equality. RAZ also accepts containment in
/// either direction so range labels such as "E-F" meet single letters.
pub fn recommended_books(
  oxford_level: &str,
  raz_level: &str,
  heinemann_level: &str,
) -> Vec<&'static BookRecommendation> {
  recommended_books_in(BOOK_RECOMMENDATIONS, oxford_level, raz_level, heinemann_level)
}

pub fn recommended_books_in<'a>(
  catalog: &'a [BookRecommendation],
  oxford_level: &str,
  raz_level: &str,
  heinemann_level: &str,
) -> Vec<&'a BookRecommendation> {
  catalog
    .iter()
    .filter(|book| match book.series {
      Series::Oxford => book.level == oxford_level,
      Series::Raz => {
        book.level == raz_level || raz_level.contains(book.level) || book.level.contains(raz_level)
      }
      Series::Heinemann => book.level == heinemann_level,
      Series::Cambridge => false,
    })
    .collect()
}

pub fn books_for_level(level: &GradingLevel) -> Vec<&'static BookRecommendation> {
  recommended_books(level.oxford_level, level.raz, level.heinemann)
}
