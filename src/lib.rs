//! Expand `$`-style replacement templates against regex match results.
//!
//! A template mixes literal text with tokens introduced by `$`: `$$`, `$&`,
//! `` $` ``, `$'`, `$1`..`$9` and `$<name>`. Tokens that cannot be resolved
//! against the match are kept as literal text.
//!
//! # Example
//!
//! ```
//! use dollar_expand::{expand, MatchResult};
//! use regex::Regex;
//!
//! let source = "---123 hello 456---";
//! let re = Regex::new(r"(\d+) (\w+) (?P<n>\d+)").unwrap();
//! let caps = re.captures(source).unwrap();
//! let m = MatchResult::from_captures(&re, &caps);
//!
//! // One match, several templates
//! assert_eq!(expand(source, Some(&m), "$2 $<n>").as_deref(), Some("hello 456"));
//! assert_eq!(expand(source, Some(&m), "$$1 = $1").as_deref(), Some("$1 = 123"));
//! assert_eq!(expand(source, Some(&m), "$`$'").as_deref(), Some("------"));
//! ```

mod captures;
mod error;
mod expand;
mod replace;

pub use captures::MatchResult;
pub use error::{Error, Result};
pub use expand::expand;
pub use replace::{expand_pattern, expand_regex, replace, replace_all};
