//! Entry points that run a [`Regex`] and expand a template from its match.

use crate::captures::MatchResult;
use crate::error::Result;
use crate::expand::expand;
use log::{debug, trace};
use regex::Regex;
use std::borrow::Cow;

/// Expands `template` against the first match of `re` in `source`.
///
/// ```
/// use dollar_expand::expand_regex;
/// use regex::Regex;
///
/// let re = Regex::new(r"(\d+)\s(?P<cap>\w+)").unwrap();
/// assert_eq!(
///     expand_regex("hello 123 world", &re, "$<cap> $1").as_deref(),
///     Some("world 123")
/// );
/// ```
pub fn expand_regex(source: &str, re: &Regex, template: &str) -> Option<String> {
    let caps = re.captures(source)?;
    let m = MatchResult::from_captures(re, &caps);
    expand(source, Some(&m), template)
}

/// Compiles `pattern`, then behaves like [`expand_regex`].
pub fn expand_pattern(source: &str, pattern: &str, template: &str) -> Result<Option<String>> {
    let re = Regex::new(pattern)?;
    Ok(expand_regex(source, &re, template))
}

/// Replaces the first match of `re` in `source` with the expanded template.
pub fn replace<'s>(source: &'s str, re: &Regex, template: &str) -> Cow<'s, str> {
    replacen(source, re, template, 1)
}

/// Replaces every non-overlapping match of `re` in `source` with the
/// expanded template. `` $` `` and `$'` always refer to the whole source.
pub fn replace_all<'s>(source: &'s str, re: &Regex, template: &str) -> Cow<'s, str> {
    replacen(source, re, template, 0)
}

/// `limit == 0` means no limit.
fn replacen<'s>(source: &'s str, re: &Regex, template: &str, limit: usize) -> Cow<'s, str> {
    let mut out = String::new();
    let mut last_end = 0;
    let mut count = 0;

    for caps in re.captures_iter(source) {
        if limit > 0 && count == limit {
            break;
        }
        let m = MatchResult::from_captures(re, &caps);
        out.push_str(&source[last_end..m.offset()]);
        if let Some(expanded) = expand(source, Some(&m), template) {
            out.push_str(&expanded);
        }
        trace!("replaced match at {}: {:?}", m.offset(), m.whole());
        last_end = m.offset() + m.whole().len();
        count += 1;
    }

    if count == 0 {
        return Cow::Borrowed(source);
    }

    debug!("replaced {} match(es)", count);
    out.push_str(&source[last_end..]);
    Cow::Owned(out)
}
