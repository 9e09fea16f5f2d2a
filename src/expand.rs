//! The `$` template scanner.

use crate::captures::MatchResult;
use log::{debug, trace};

/// One classified piece of template, starting at the current scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'h> {
    /// Text up to the next sigil.
    Literal(usize),
    /// `$$`
    EscapedSigil,
    /// `$&`
    WholeMatch,
    /// `` $` ``
    PreMatch,
    /// `$'`
    PostMatch,
    /// `$1`..`$9` naming a group that is set.
    Positional(&'h str),
    /// `$<name>` naming a group that is set.
    Named { value: &'h str, name_len: usize },
    /// A lone `$`.
    SigilLiteral,
    /// An unresolvable token copied as-is.
    TokenLiteral(usize),
}

impl Token<'_> {
    fn len(&self) -> usize {
        match self {
            Token::Literal(n) | Token::TokenLiteral(n) => *n,
            Token::SigilLiteral => 1,
            Token::Named { name_len, .. } => name_len + 3,
            Token::EscapedSigil
            | Token::WholeMatch
            | Token::PreMatch
            | Token::PostMatch
            | Token::Positional(_) => 2,
        }
    }
}

/// `rest` must be non-empty.
fn classify<'h>(rest: &str, m: &MatchResult<'h>) -> Token<'h> {
    let bytes = rest.as_bytes();
    if bytes[0] != b'$' {
        return Token::Literal(rest.find('$').unwrap_or(rest.len()));
    }

    match bytes.get(1).copied() {
        None => Token::SigilLiteral,
        Some(b'$') => Token::EscapedSigil,
        Some(b'&') => Token::WholeMatch,
        Some(b'`') => Token::PreMatch,
        Some(b'\'') => Token::PostMatch,
        Some(d @ b'1'..=b'9') => match m.get(usize::from(d - b'0')) {
            Some(value) => Token::Positional(value),
            None => Token::TokenLiteral(2),
        },
        Some(b'<') => match named_group(rest, m) {
            Some((value, name_len)) => Token::Named { value, name_len },
            None => {
                trace!("no named group matches at {:?}", rest);
                Token::TokenLiteral(2)
            }
        },
        Some(_) => Token::SigilLiteral,
    }
}

/// Finds the longest declared name whose `$<name>` token starts `rest`,
/// returning its value and the name length. Unset groups resolve to `None`.
fn named_group<'h>(rest: &str, m: &MatchResult<'h>) -> Option<(&'h str, usize)> {
    let inner = &rest[2..];
    let (name, value) = m
        .named_groups()?
        .iter()
        .filter(|(name, _)| {
            inner
                .strip_prefix(name.as_str())
                .is_some_and(|tail| tail.starts_with('>'))
        })
        .max_by_key(|(name, _)| name.len())?;

    value.map(|v| (v, name.len()))
}

/// Expands `template` against a match of some pattern in `source`.
///
/// Returns `None` when `m` is `None`, i.e. the pattern did not match at all.
/// Any other input expands to a string: tokens that cannot be resolved are
/// copied literally.
///
/// | Token      | Expands to                                   |
/// |------------|----------------------------------------------|
/// | `$$`       | `$`                                          |
/// | `$&`       | the whole match                              |
/// | `` $` ``   | the source text before the match             |
/// | `$'`       | the source text after the match              |
/// | `$1`..`$9` | that positional group, if set                |
/// | `$<name>`  | that named group, if declared and set        |
///
/// Only a single digit is read after `$`, so groups 10 and above cannot be
/// addressed: `$12` is group 1 followed by a literal `2`.
///
/// ```
/// use dollar_expand::{expand, MatchResult};
///
/// let source = "hello123world";
/// let m = MatchResult::new(5, "123").group(Some("123"));
///
/// assert_eq!(expand(source, Some(&m), "[$1] $$1").as_deref(), Some("[123] $1"));
/// assert_eq!(expand(source, Some(&m), "$`|$'").as_deref(), Some("hello|world"));
/// assert_eq!(expand(source, None, "$&"), None);
/// ```
pub fn expand(source: &str, m: Option<&MatchResult<'_>>, template: &str) -> Option<String> {
    let Some(m) = m else {
        debug!("no match, skipping template expansion");
        return None;
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while !rest.is_empty() {
        let token = classify(rest, m);
        match token {
            Token::Literal(len) | Token::TokenLiteral(len) => out.push_str(&rest[..len]),
            Token::EscapedSigil | Token::SigilLiteral => out.push('$'),
            Token::WholeMatch => out.push_str(m.whole()),
            Token::PreMatch => out.push_str(m.pre_match(source)),
            Token::PostMatch => out.push_str(m.post_match(source)),
            Token::Positional(value) | Token::Named { value, .. } => out.push_str(value),
        }
        rest = &rest[token.len()..];
    }

    Some(out)
}
