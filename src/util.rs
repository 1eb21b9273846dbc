//! Small utility helpers used across modules.

/// Log-safe truncation for user-supplied strings.
/// Cuts on a char boundary so CJK input never splits a code point.
pub fn trunc_for_log(s: &str, max_chars: usize) -> String {
  match s.char_indices().nth(max_chars) {
    None => s.to_string(),
    Some((cut, _)) => format!("{}… ({} bytes total)", &s[..cut], s.len()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_strings_pass_through() {
    assert_eq!(trunc_for_log("三年级", 8), "三年级");
  }

  #[test]
  fn long_strings_cut_on_char_boundary() {
    assert_eq!(trunc_for_log("一二三四", 2), "一二… (12 bytes total)");
  }
}
