//! Display-order transforms over the locally held contact list.
//!
//! Sorting and filtering borrow the list and never reorder or drop the
//! underlying records.

use std::cmp::Ordering;

use contacthub_core::Contact;
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
  /// By creation time, most recent first.
  #[default]
  Newest,
  Name,
  Email,
}

impl SortMode {
  /// The next mode in the `s` key cycle.
  pub fn next(self) -> Self {
    match self {
      Self::Newest => Self::Name,
      Self::Name => Self::Email,
      Self::Email => Self::Newest,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Newest => "newest",
      Self::Name => "name",
      Self::Email => "email",
    }
  }
}

/// Case-insensitive comparison, falling back to the raw text so the order is
/// total.
fn text_order(a: &str, b: &str) -> Ordering {
  a.to_lowercase()
    .cmp(&b.to_lowercase())
    .then_with(|| a.cmp(b))
}

/// `contacts` in `mode` order.
pub fn sorted(contacts: &[Contact], mode: SortMode) -> Vec<&Contact> {
  let mut view: Vec<&Contact> = contacts.iter().collect();
  match mode {
    SortMode::Newest => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    SortMode::Name => view.sort_by(|a, b| text_order(&a.name, &b.name)),
    SortMode::Email => view.sort_by(|a, b| text_order(&a.email, &b.email)),
  }
  view
}

/// Keep the contacts whose name, email or phone fuzzily match `query`.
/// An empty query keeps everything.
pub fn filtered<'a>(view: Vec<&'a Contact>, query: &str) -> Vec<&'a Contact> {
  if query.is_empty() {
    return view;
  }
  let matcher = SkimMatcherV2::default();
  view
    .into_iter()
    .filter(|c| {
      [&c.name, &c.email, &c.phone]
        .into_iter()
        .any(|text| matcher.fuzzy_match(text, query).is_some())
    })
    .collect()
}
