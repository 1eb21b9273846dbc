//! Caller-side checks for raw search input, applied before the lookups run.

use thiserror::Error;

pub const MAX_LEXILE_INPUT: i32 = 2000;

pub const KNOWN_GRADES: &[&str] = &[
  "学前", "一年级", "二年级", "三年级", "四年级", "五年级", "六年级", "初一", "初二", "初三",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
  #[error("input is empty")]
  Empty,
  #[error("{0:?} does not start with a number")]
  NotANumber(String),
  #[error("Lexile value cannot be negative")]
  Negative,
  #[error("Lexile values rarely exceed 2000L")]
  TooLarge,
  #[error("{0:?} is not a recognised school grade (e.g. 三年级)")]
  UnknownGrade(String),
  #[error("client id must be 1-64 characters of A-Z, a-z, 0-9, '-' or '_'")]
  BadClientId,
}

pub const MAX_CLIENT_ID_LEN: usize = 64;

/// Reads the leading integer of the input, so "300L" is 300 and "350.5" is 350.
/// Anything after the digits is ignored.
pub fn parse_lexile_input(raw: &str) -> Result<i32, InputError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(InputError::Empty);
  }
  let (negative, unsigned) = match trimmed.as_bytes()[0] {
    b'-' => (true, &trimmed[1..]),
    b'+' => (false, &trimmed[1..]),
    _ => (false, trimmed),
  };
  let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
  if digits_len == 0 {
    return Err(InputError::NotANumber(trimmed.to_string()));
  }
  // Overflowing digit runs are simply huge.
  let magnitude = unsigned[..digits_len].parse::<u64>().unwrap_or(u64::MAX);
  if negative && magnitude > 0 {
    Err(InputError::Negative)
  } else if magnitude > MAX_LEXILE_INPUT as u64 {
    Err(InputError::TooLarge)
  } else {
    Ok(magnitude as i32)
  }
}

/// Accepts text that contains, or is contained in, a known grade name.
pub fn validate_grade_input(raw: &str) -> Result<&str, InputError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(InputError::Empty);
  }
  let known = KNOWN_GRADES
    .iter()
    .any(|grade| trimmed.contains(grade) || grade.contains(trimmed));
  if known {
    Ok(trimmed)
  } else {
    Err(InputError::UnknownGrade(trimmed.to_string()))
  }
}

/// Client ids name preference files, so they stay within a safe alphabet.
pub fn validate_client_id(raw: &str) -> Result<&str, InputError> {
  let ok = !raw.is_empty()
    && raw.len() <= MAX_CLIENT_ID_LEN
    && raw.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
  if ok { Ok(raw) } else { Err(InputError::BadClientId) }
}
