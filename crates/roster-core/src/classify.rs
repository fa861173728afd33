//! Intent classification by ordered anchor-phrase containment.
//!
//! The question is lowercased and trimmed, then tested against [`PATTERNS`]
//! top to bottom. The first anchor contained anywhere in the text decides the
//! intent, so conversational filler before the anchor is tolerated.

use serde::Serialize;

use crate::{extract::extract, intent::Intent};

/// One row of the anchor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
  pub anchor: &'static str,
  pub intent: Intent,
}

/// Anchor phrases in match order.
pub const PATTERNS: &[Pattern] = &[
  Pattern { anchor: "show me all employees in the",             intent: Intent::EmployeesInDepartment },
  Pattern { anchor: "who is the manager of the",                intent: Intent::DepartmentManager },
  Pattern { anchor: "list all employees hired after",           intent: Intent::EmployeesHiredAfter },
  Pattern { anchor: "what is the total salary expense for the", intent: Intent::TotalSalaryExpense },
  Pattern { anchor: "show all employees",                       intent: Intent::AllEmployees },
  Pattern { anchor: "show all departments",                     intent: Intent::AllDepartments },
];

/// The outcome of classifying one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
  pub intent:   Intent,
  /// Present only for intents that take an argument and only if extraction
  /// left something behind.
  pub argument: Option<String>,
}

impl Classification {
  pub const fn unrecognized() -> Self {
    Self { intent: Intent::Unrecognized, argument: None }
  }
}

/// Case-fold and trim a raw question.
pub fn normalize(question: &str) -> String { question.trim().to_lowercase() }

/// Classify a raw question against [`PATTERNS`].
pub fn classify(question: &str) -> Classification {
  let text = normalize(question);

  PATTERNS
    .iter()
    .find_map(|pattern| {
      text
        .find(pattern.anchor)
        .map(|at| (pattern.intent, &text[at + pattern.anchor.len()..]))
    })
    .map(|(intent, rest)| Classification {
      intent,
      argument: if intent.needs_argument() {
        extract(rest, intent.names_department())
      } else {
        None
      },
    })
    .unwrap_or_else(Classification::unrecognized)
}
