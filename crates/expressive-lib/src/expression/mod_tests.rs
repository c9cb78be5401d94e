use super::*;

#[test]
fn empty_expression() -> Result<()> {
    let expr = Expression::new();

    assert_eq!(expr.to_regex_string()?, "/(?:)/");
    assert!(expr.flags().is_empty());
    assert!(expr.is_closed());
    Ok(())
}

#[test]
fn flags_render_in_canonical_order() -> Result<()> {
    let expr = Expression::new()
        .sticky()
        .unicode()
        .single_line()
        .line_by_line()
        .case_insensitive()
        .allow_multiple_matches()
        .with_indices()
        .sticky();

    insta::assert_snapshot!(expr.to_regex_string()?, @"/(?:)/dgimsuy");
    Ok(())
}

#[test]
fn every_call_returns_an_independent_value() -> Result<()> {
    let base = Expression::new().digit();
    let words = base.word();
    let chars = base.char('x');

    assert_eq!(base.compile()?.source(), r"\d");
    assert_eq!(words.compile()?.source(), r"\d\w");
    assert_eq!(chars.compile()?.source(), r"\dx");
    Ok(())
}

#[test]
fn failed_call_leaves_receiver_usable() -> Result<()> {
    let pending = Expression::new().optional()?;

    assert!(pending.one_or_more().is_err());
    assert_eq!(pending.digit().compile()?.source(), r"\d?");
    Ok(())
}

#[test]
fn compile_is_repeatable() -> Result<()> {
    let expr = Expression::new()
        .start_of_input()?
        .at_least(3)?
        .digit()
        .string("hello")?
        .any_char()
        .string("world")?
        .range('0', '9')?
        .end_of_input()?;

    let first = expr.to_regex_string()?;
    assert_eq!(first, expr.to_regex_string()?);
    assert_eq!(expr.to_regex()?.to_string(), first);
    insta::assert_snapshot!(first, @r"/^\d{3,}hello.world[0-9]$/");
    Ok(())
}

#[test]
fn compile_requires_closed_frames() {
    let expr = Expression::new().capture().any_of().digit();

    assert_eq!(expr.compile(), Err(Error::UnclosedFrame { kind: "any_of" }));
    insta::assert_snapshot!(expr.compile().unwrap_err(), @r#"cannot compute the value of a not yet fully specified regex object (try adding a .end() call to match the "any_of")"#);
}

#[test]
fn compile_rejects_dangling_quantifier() -> Result<()> {
    let expr = Expression::new().digit().one_or_more()?;

    assert_eq!(
        expr.compile(),
        Err(Error::DanglingQuantifier {
            kind: "root",
            quantifier: "one_or_more",
        })
    );
    Ok(())
}

#[test]
fn introspection() -> Result<()> {
    let expr = Expression::new()
        .capture()
        .digit()
        .end()?
        .named_capture("year")?
        .digit()
        .end()?
        .named_capture("month")?;

    assert_eq!(expr.capture_count(), 3);
    assert_eq!(expr.named_groups().collect::<Vec<_>>(), ["year", "month"]);
    assert!(!expr.is_closed());
    assert!(expr.end()?.is_closed());
    Ok(())
}

#[test]
fn matches_through_engine() -> Result<()> {
    let regex = Expression::new()
        .start_of_input()?
        .named_capture("year")?
        .exactly(4)?
        .digit()
        .end()?
        .char('-')
        .named_capture("month")?
        .exactly(2)?
        .digit()
        .end()?
        .end_of_input()?
        .to_regex()?;

    assert!(regex.is_match("2024-06"));
    assert!(!regex.is_match("2024-6"));

    let m = regex.find("1999-12").unwrap();
    assert_eq!(m.named_group("month"), Some(5..7));
    Ok(())
}

#[test]
fn expressions_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expression>();
    assert_send_sync::<Pattern>();
    assert_send_sync::<SubexpressionOptions>();
}
