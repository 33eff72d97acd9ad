//! # Name Normalizer
//!
//! Turns whatever the user typed as a module name into the two canonical
//! identifiers every other component keys off:
//!
//! - `pascal` ("studly") form for class names and the backend directory
//! - `kebab` form for the frontend directory and route prefixes
//!
//! | raw            | pascal          | kebab             |
//! |----------------|-----------------|-------------------|
//! | `billing`      | `Billing`       | `billing`         |
//! | `user profile` | `UserProfile`   | `user-profile`    |
//! | `CRM`          | `CRM`           | `crm`             |
//! | `CRMSystem`    | `CRMSystem`     | `crm-system`      |
//! | `APIKey`       | `APIKey`        | `api-key`         |
//!
//! Both transforms are pure: the same input always produces the same pair.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{Result, ScaffoldError};

// A run of capitals followed by a capitalised word: "CRMSystem" -> "CRM-System".
// Must run before CASE_BOUNDARY or acronyms get split letter by letter.
#[allow(clippy::expect_used)]
static ACRONYM_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z]{2,})([A-Z][a-z])").expect("acronym boundary regex should be valid")
});

#[allow(clippy::expect_used)]
static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("case boundary regex should be valid"));

/// Canonical identifier pair for one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifiers {
    /// Studly form, e.g. `CRMSystem`
    pub pascal: String,
    /// Lowercase hyphenated form, e.g. `crm-system`
    pub kebab: String,
}

impl Identifiers {
    /// `crm_system`
    #[must_use]
    pub fn snake(&self) -> String {
        self.kebab.replace('-', "_")
    }

    /// `crmSystem`, used for variable names in generated TypeScript
    #[must_use]
    pub fn camel(&self) -> String {
        let mut words = self.kebab.split('-');
        let mut out = words.next().unwrap_or_default().to_string();
        for word in words {
            out.push_str(&capitalize(word));
        }
        out
    }

    /// Human-readable title, e.g. `Crm System`
    #[must_use]
    pub fn title(&self) -> String {
        self.kebab
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Database table name: snake form with the last word pluralised
    #[must_use]
    pub fn table_name(&self) -> String {
        table_name(&self.kebab)
    }
}

/// Normalize a raw module name into its identifier pair
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] when `raw` is empty or has no
/// alphanumeric characters.
pub fn normalize(raw: &str) -> Result<Identifiers> {
    let pascal = to_pascal_case(raw);
    if pascal.is_empty() {
        return Err(ScaffoldError::InvalidName {
            raw: raw.to_string(),
        });
    }
    let kebab = to_kebab_case(&pascal);
    Ok(Identifiers { pascal, kebab })
}

/// Capitalise each alphanumeric word and concatenate
///
/// Anything that is not a letter or digit counts as a word delimiter. The
/// tail of each word is kept as typed so embedded acronyms survive.
#[must_use]
pub fn to_pascal_case(raw: &str) -> String {
    raw.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect()
}

/// Hyphenate a studly identifier
///
/// All-caps input is only lowercased. Otherwise acronym boundaries are split
/// first, then lower-to-upper transitions, and the result is lowercased.
#[must_use]
pub fn to_kebab_case(studly: &str) -> String {
    let all_caps = studly
        .chars()
        .filter(|c| c.is_alphabetic())
        .all(char::is_uppercase);
    if all_caps {
        return studly.to_lowercase();
    }
    let split = ACRONYM_BOUNDARY.replace_all(studly, "${1}-${2}");
    let split = CASE_BOUNDARY.replace_all(&split, "${1}-${2}");
    split.to_lowercase()
}

/// Table name for a kebab identifier: `order-item` -> `order_items`
#[must_use]
pub fn table_name(kebab: &str) -> String {
    match kebab.rsplit_once('-') {
        Some((head, last)) => format!("{}_{}", head.replace('-', "_"), pluralize(last)),
        None => pluralize(kebab),
    }
}

/// Naive English pluralisation of a single lowercase word
#[must_use]
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if let Some(stem) = word.strip_suffix('y') {
        let before = stem.chars().last();
        if matches!(before, Some(c) if !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
