//! Lexical extraction of the argument that follows an anchor phrase.
//!
//! Extraction never changes case; capitalization is the synthesizer's job.

const DEPARTMENT: &str = "department";

/// Recover the argument from the text after an anchor phrase.
///
/// Trims whitespace and trailing sentence punctuation. When
/// `strip_department` is set, one trailing occurrence of the word
/// "department" is removed as well. Returns `None` if nothing is left.
pub fn extract(after_anchor: &str, strip_department: bool) -> Option<String> {
  let mut text = after_anchor
    .trim()
    .trim_end_matches(['?', '.', '!'])
    .trim_end();

  if strip_department {
    text = strip_trailing_word(text, DEPARTMENT).trim_end();
  }

  (!text.is_empty()).then(|| text.to_owned())
}

/// Remove `word` from the end of `text` only if it stands as a whole word.
fn strip_trailing_word<'a>(text: &'a str, word: &str) -> &'a str {
  match text.strip_suffix(word) {
    Some(rest) if rest.is_empty() || rest.ends_with(char::is_whitespace) => rest,
    _ => text,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_trailing_department() {
    assert_eq!(extract(" engineering department", true).as_deref(), Some("engineering"));
  }

  #[test]
  fn bare_name_is_unchanged() {
    assert_eq!(extract("engineering", true).as_deref(), Some("engineering"));
  }

  #[test]
  fn strips_exactly_one_occurrence() {
    assert_eq!(
      extract("department store department", true).as_deref(),
      Some("department store")
    );
  }

  #[test]
  fn only_whole_word_is_stripped() {
    assert_eq!(extract("subdepartment", true).as_deref(), Some("subdepartment"));
  }

  #[test]
  fn trailing_punctuation_is_dropped() {
    assert_eq!(extract(" sales department?", true).as_deref(), Some("sales"));
    assert_eq!(extract("2021-01-01.", false).as_deref(), Some("2021-01-01"));
  }

  #[test]
  fn department_kept_when_not_stripping() {
    assert_eq!(
      extract("sales department", false).as_deref(),
      Some("sales department")
    );
  }

  #[test]
  fn nothing_left_is_none() {
    assert_eq!(extract("", true), None);
    assert_eq!(extract("   \t ", false), None);
    assert_eq!(extract(" department ", true), None);
    assert_eq!(extract("?", false), None);
  }
}
