use indoc::indoc;

use crate::{Expression, Result, SubexpressionOptions};

#[test]
fn printer_closed_tree() -> Result<()> {
    let expr = Expression::new()
        .start_of_input()?
        .capture()
        .one_or_more()?
        .digit()
        .end()?
        .named_capture("tail")?
        .string("ab")?
        .end()?
        .end_of_input()?;

    let res = expr.printer().dump();

    insta::assert_snapshot!(res, @r#"
    Root
      StartOfInput
      Capture
        Quantified +
          Digit
      NamedCapture tail
        String "ab"
      EndOfInput
    "#);
    Ok(())
}

#[test]
fn printer_open_frames() -> Result<()> {
    let expr = Expression::new()
        .case_insensitive()
        .named_capture("year")?
        .any_of()
        .char('a')
        .range('0', '9')?
        .optional()?;

    let res = expr
        .printer()
        .with_flags(true)
        .with_names(true)
        .with_pending(true)
        .dump();

    insta::assert_snapshot!(res, @r"
    Flags(i)
    Names(year)
    Root
      NamedCapture year (open)
        AnyOf (open)
          Char 'a'
          Range '0'-'9'
          pending optional
    ");
    Ok(())
}

#[test]
fn printer_hides_pending_by_default() -> Result<()> {
    let expr = Expression::new().digit().optional()?;

    assert_eq!(expr.printer().dump(), "Root\n  Digit\n");
    Ok(())
}

#[test]
fn printer_subexpression() -> Result<()> {
    let inner = Expression::new()
        .start_of_input()?
        .capture()
        .word()
        .end()?
        .backreference(1)?;
    let expr = Expression::new()
        .capture()
        .digit()
        .end()?
        .subexpression(&inner, &SubexpressionOptions::default())?;

    let expected = indoc! {r"
        Root
          Capture
            Digit
          Subexpression
            Noop
            Capture
              Word
            Backreference 2
    "};
    assert_eq!(expr.printer().dump(), expected);
    Ok(())
}

#[test]
fn printer_literal_payloads() -> Result<()> {
    let expr = Expression::new()
        .anything_but_chars("xy")?
        .control_char('m')?
        .hex_code("7F")?
        .unicode_property("Script=Latin")?
        .one_or_more_lazy()?
        .named_capture("n")?
        .digit()
        .end()?
        .named_backreference("n")?;

    insta::assert_snapshot!(expr.printer().with_flags(true).dump(), @r#"
    Flags(u)
    Root
      AnythingButChars "xy"
      ControlChar M
      HexCode 7F
      UnicodeProperty Script=Latin
      Quantified +?
        NamedCapture n
          Digit
      NamedBackreference n
    "#);
    Ok(())
}

#[test]
fn printer_payloadless_composites() -> Result<()> {
    let expr = Expression::new()
        .word_boundary()?
        .any_of()
        .char('a')
        .digit()
        .end()?
        .anything_but()
        .char('b')
        .end()?
        .assert_ahead()
        .tab()
        .end()?
        .assert_not_behind()
        .null_byte()
        .end()?;

    insta::assert_snapshot!(expr.printer().dump(), @r"
    Root
      WordBoundary
      AnyOf
        Char 'a'
        Digit
      AnythingBut
        Char 'b'
      AssertAhead
        Tab
      AssertNotBehind
        NullByte
    ");
    Ok(())
}
