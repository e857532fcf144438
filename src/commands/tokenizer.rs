//! Splits command arguments into prefixed values.
//!
//! Arguments look like `PREAMBLE n=NAME e=EMAIL t=TAG1 t=TAG2`. A prefix only
//! counts when it starts the arguments or follows whitespace, so `mn=` is never
//! mistaken for `n=`.

use crate::error::CommandError;
use std::collections::HashMap;
use std::fmt;

/// An argument prefix such as `n=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n=");
pub const PREFIX_MAIN_PHONE: Prefix = Prefix::new("mn=");
pub const PREFIX_OTHER_PHONE: Prefix = Prefix::new("on=");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e=");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a=");
pub const PREFIX_TAG: Prefix = Prefix::new("t=");
pub const PREFIX_MEETING: Prefix = Prefix::new("m=");
pub const PREFIX_VENUE: Prefix = Prefix::new("v=");
pub const PREFIX_WHEN: Prefix = Prefix::new("w=");
pub const PREFIX_PERSON_INDEX: Prefix = Prefix::new("p=");
pub const PREFIX_MEETING_INDEX: Prefix = Prefix::new("i=");

/// Values found for each prefix, plus the text before the first prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// The trimmed text before the first recognized prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fail if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), CommandError> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(Prefix::as_str)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(CommandError::DuplicatePrefixes(duplicated.join(" ")))
        }
    }
}

/// Tokenize `args`, recognizing only the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| prefix_positions(args, *prefix))
        .collect();
    positions.sort_by_key(|(position, _)| *position);

    let preamble_end = positions.first().map_or(args.len(), |(position, _)| *position);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (position, prefix)) in positions.iter().enumerate() {
        let start = position + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }

    multimap
}

fn prefix_positions(args: &str, prefix: Prefix) -> Vec<(usize, Prefix)> {
    args.match_indices(prefix.as_str())
        .filter(|(position, _)| {
            *position == 0
                || args[..*position]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace)
        })
        .map(|(position, _)| (position, prefix))
        .collect()
}
