use anyhow::{Context, Result};
use dollar_expand::{expand, expand_regex, MatchResult};
use regex::Regex;

fn run(source: &str, pattern: &str, template: &str) -> Result<Option<String>> {
    let re = Regex::new(pattern).context("failed to compile test pattern")?;
    Ok(expand_regex(source, &re, template))
}

#[test]
fn test_insert_positional() -> Result<()> {
    assert_eq!(run("hello123world", r"(\d+)", "$1")?.as_deref(), Some("123"));
    Ok(())
}

#[test]
fn test_insert_named_capture_group() -> Result<()> {
    assert_eq!(
        run("hello123world", r"(?P<num>\d+)", "$<num>")?.as_deref(),
        Some("123")
    );
    Ok(())
}

#[test]
fn test_insert_matched() -> Result<()> {
    assert_eq!(run("hello123world", r"\d+", "$&")?.as_deref(), Some("123"));
    Ok(())
}

#[test]
fn test_insert_preceding() -> Result<()> {
    assert_eq!(run("hello123world", r"\d+", "$`")?.as_deref(), Some("hello"));
    Ok(())
}

#[test]
fn test_insert_following() -> Result<()> {
    assert_eq!(run("hello123world", r"\d+", "$'")?.as_deref(), Some("world"));
    Ok(())
}

#[test]
fn test_pre_whole_post_rebuild_source() -> Result<()> {
    let source = "one two one two";
    assert_eq!(run(source, r"t\w+", "$`$&$'")?.as_deref(), Some(source));
    Ok(())
}

#[test]
fn test_ignore_double_sigil() -> Result<()> {
    assert_eq!(
        run("hello123world", r"(\d+)", "1 $1 $$1 $$$1 $$<num>")?.as_deref(),
        Some("1 123 $1 $123 $<num>")
    );
    Ok(())
}

#[test]
fn test_ignore_unmatched_positional() -> Result<()> {
    assert_eq!(run("hello123world", r"\d+", "$2")?.as_deref(), Some("$2"));
    assert_eq!(run("hello123world", r"(\d+)", "$2")?.as_deref(), Some("$2"));
    Ok(())
}

#[test]
fn test_ignore_unmatched_named() -> Result<()> {
    assert_eq!(
        run("hello123world", r"(?P<yes>\d+)", "$<no>")?.as_deref(),
        Some("$<no>")
    );
    Ok(())
}

#[test]
fn test_unset_alternation_groups_stay_literal() -> Result<()> {
    let out = run("dog", r"(?P<c>cat)|(?P<d>dog)", "$1/$2 $<c>/$<d>")?;
    assert_eq!(out.as_deref(), Some("$1/dog $<c>/dog"));
    Ok(())
}

#[test]
fn test_null_if_no_match() -> Result<()> {
    assert_eq!(run("hello123world", "abc", "$&")?, None);
    Ok(())
}

#[test]
fn test_repeated_match_text_uses_offset() -> Result<()> {
    // the match text also occurs earlier in the source
    assert_eq!(run("ab-ab", r"ab$", "[$`|$']")?.as_deref(), Some("[ab-|]"));
    Ok(())
}

#[test]
fn test_kitchen_sink() -> Result<()> {
    let template = r#"$$& = $&
$$`= $`
$$'= $'
$$1 = $1
$$2 = $2
$$3 = $3
$$4 = $4
$$5 = $5
$$<n> = $<n>
$$<w> = $<w>"#;
    let expected = r#"$& = 123 hello 456 world 789
$`= ---
$'= ---
$1 = 123
$2 = hello
$3 = 456
$4 = world
$5 = 789
$<n> = 456
$<w> = world"#;

    let actual = run(
        "---123 hello 456 world 789---",
        r"(\d+)\s(\w+)\s(?P<n>\d+)\s(?P<w>\w+)\s(\d+)",
        template,
    )?;
    assert_eq!(actual.as_deref(), Some(expected));
    Ok(())
}

#[test]
fn test_one_match_many_templates() -> Result<()> {
    let source = "key=value";
    let re = Regex::new(r"(?P<k>\w+)=(?P<v>\w+)")?;
    let caps = re.captures(source).context("expected a match")?;
    let m = MatchResult::from_captures(&re, &caps);

    assert_eq!(expand(source, Some(&m), "$<v>=$<k>").as_deref(), Some("value=key"));
    assert_eq!(expand(source, Some(&m), "$2 ($1)").as_deref(), Some("value (key)"));
    assert_eq!(expand(source, Some(&m), "no tokens").as_deref(), Some("no tokens"));
    Ok(())
}
