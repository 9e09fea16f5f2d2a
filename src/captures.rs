//! Match results that templates are expanded against.

use regex::{Captures, Regex};
use std::collections::HashMap;

/// The outcome of a successful match, borrowed from the haystack `'h`.
///
/// Positional slots are 1-indexed through [`MatchResult::get`]; slot 0 is the
/// whole match. The named mapping is `None` when the pattern declares no
/// named groups at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'h> {
    whole: &'h str,
    offset: usize,
    positional: Vec<Option<&'h str>>,
    groups: Option<HashMap<String, Option<&'h str>>>,
}

impl<'h> MatchResult<'h> {
    pub fn new(offset: usize, whole: &'h str) -> Self {
        Self {
            whole,
            offset,
            positional: Vec::new(),
            groups: None,
        }
    }

    /// Appends the next positional group. `None` marks a group that did not
    /// participate in the match.
    pub fn group(mut self, value: Option<&'h str>) -> Self {
        self.positional.push(value);
        self
    }

    /// Appends the next positional group and registers it under `name`.
    pub fn named(mut self, name: impl Into<String>, value: Option<&'h str>) -> Self {
        self.positional.push(value);
        self.groups
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value);
        self
    }

    /// Declares named-group capability without registering any names.
    pub fn with_named_groups(mut self) -> Self {
        self.groups.get_or_insert_with(HashMap::new);
        self
    }

    pub fn from_captures(re: &Regex, caps: &Captures<'h>) -> Self {
        let (offset, whole) = caps
            .get(0)
            .map(|m| (m.start(), m.as_str()))
            .unwrap_or((0, ""));

        let positional = (1..caps.len())
            .map(|i| caps.get(i).map(|m| m.as_str()))
            .collect();

        let mut names = re.capture_names().flatten().peekable();
        let groups = names.peek().is_some().then(|| {
            names
                .map(|name| (name.to_string(), caps.name(name).map(|m| m.as_str())))
                .collect()
        });

        Self {
            whole,
            offset,
            positional,
            groups,
        }
    }

    pub fn whole(&self) -> &'h str {
        self.whole
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns group `n`, where 0 is the whole match. Unset and missing
    /// groups both return `None`.
    pub fn get(&self, n: usize) -> Option<&'h str> {
        match n {
            0 => Some(self.whole),
            n => self.positional.get(n - 1).copied().flatten(),
        }
    }

    pub fn name(&self, name: &str) -> Option<&'h str> {
        self.groups.as_ref()?.get(name).copied().flatten()
    }

    pub fn has_named_groups(&self) -> bool {
        self.groups.is_some()
    }

    pub(crate) fn named_groups(&self) -> Option<&HashMap<String, Option<&'h str>>> {
        self.groups.as_ref()
    }

    /// Text of `source` before the match.
    pub fn pre_match<'s>(&self, source: &'s str) -> &'s str {
        let end = self.offset.min(source.len());
        source.get(..end).unwrap_or("")
    }

    /// Text of `source` after the match.
    pub fn post_match<'s>(&self, source: &'s str) -> &'s str {
        let start = self.offset.saturating_add(self.whole.len()).min(source.len());
        source.get(start..).unwrap_or("")
    }
}
