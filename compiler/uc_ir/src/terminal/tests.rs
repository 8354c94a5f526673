use super::*;
use crate::Reduction;
use pretty_assertions::assert_eq;

fn token(text: &str, line: u32, offset: u32) -> Reduction {
    Reduction::new().with_symbol(text, Position::new(line, offset))
}

// Int

#[test]
fn test_int_from_token() {
    let mut ctx = token("42", 1, 0);
    let int = Int::from_token(&mut ctx).unwrap();
    assert_eq!(*int.value(), 42);
    assert_eq!(int.position(), Position::new(1, 0));
    assert_eq!(ctx.position(), Some(Position::new(1, 0)));
    assert_eq!(int.to_string(), "Int::42");
}

#[test]
fn test_int_parse_exact() {
    assert_eq!(Int::parse("0").unwrap(), 0);
    assert_eq!(Int::parse("-17").unwrap(), -17);
    assert_eq!(Int::parse("9223372036854775807").unwrap(), i64::MAX);
}

#[test]
fn test_int_rejects_non_numeric() {
    let mut ctx = token("4x2", 3, 12);
    let err = Int::from_token(&mut ctx).unwrap_err();
    assert!(matches!(
        &err,
        AstError::LexicalCoercion { symbol: "Int", text, .. } if text == "4x2"
    ));
    // Position is captured before coercion runs
    assert_eq!(err.position(), Some(Position::new(3, 12)));
    assert_eq!(ctx.position(), Some(Position::new(3, 12)));
}

#[test]
fn test_int_rejects_overflow() {
    assert!(matches!(
        Int::parse("9223372036854775808"),
        Err(AstError::LexicalCoercion { .. })
    ));
    assert!(Int::parse("").is_err());
}

// Char

#[test]
fn test_char_from_token() {
    let mut ctx = token("'a'", 1, 0);
    let c = Char::from_token(&mut ctx).unwrap();
    assert_eq!(*c.value(), 'a');
    assert_eq!(c.position(), Position::new(1, 0));
    assert_eq!(c.text_value(), "'a'");
    assert_eq!(c.to_string(), "Char::'a'");
}

#[test]
fn test_char_escapes() {
    assert_eq!(Char::parse(r"'\n'").unwrap(), '\n');
    assert_eq!(Char::parse(r"'\''").unwrap(), '\'');
    assert_eq!(Char::parse(r"'\\'").unwrap(), '\\');

    let newline = Char::new('\n', Position::START);
    assert_eq!(newline.text_value(), r"'\n'");
    let quote = Char::new('\'', Position::START);
    assert_eq!(quote.text_value(), r"'\''");
}

#[test]
fn test_char_double_quote_is_not_escaped() {
    let plain = Char::parse("'\"'").unwrap();
    assert_eq!(plain, '"');
    assert_eq!(Char::parse(r#"'\"'"#).unwrap(), '"');
    assert_eq!(Char::new(plain, Position::START).text_value(), "'\"'");
}

#[test]
fn test_char_lone_backslash() {
    assert_eq!(Char::parse(r"'\'").unwrap(), '\\');
}

#[test]
fn test_char_rejects_malformed() {
    for text in ["a", "''", "'ab'", "'a", r"'\q'", r"'\ab'", "'"] {
        assert!(
            matches!(Char::parse(text), Err(AstError::LexicalCoercion { .. })),
            "expected `{text}` to be rejected"
        );
    }
}

// Ident / String

#[test]
fn test_ident_identity() {
    let mut ctx = token("counter", 2, 8);
    let ident = Ident::from_token(&mut ctx).unwrap();
    assert_eq!(ident.name(), "counter");
    assert_eq!(ident.position(), Position::new(2, 8));
    assert_eq!(ident.to_string(), "Ident::counter");
}

#[test]
fn test_string_keeps_delimiters() {
    let mut ctx = token("\"hi\"", 5, 40);
    let s = Str::from_token(&mut ctx).unwrap();
    assert_eq!(s.value(), "\"hi\"");
    assert_eq!(s.text_value(), r#""\"hi\"""#);
}

#[test]
fn test_string_quotes_bare_text() {
    let s = Str::new("hello".to_owned(), Position::START);
    assert_eq!(s.to_string(), "String::\"hello\"");
}

// TypeSpec

#[test]
fn test_type_spec_members() {
    for (keyword, expected) in TypeSpec::KEYWORDS.iter().zip(TypeSpec::ALL) {
        let mut ctx = token(keyword, 1, 0);
        let spec = TypeSpec::from_token(&mut ctx).unwrap();
        assert_eq!(spec, expected);
        assert_eq!(spec.keyword(), *keyword);
        assert_eq!(ctx.position(), Some(Position::new(1, 0)));
    }
    assert_eq!(TypeSpec::Int.to_string(), "TypeSpec::int");
}

#[test]
fn test_type_spec_rejects_unknown() {
    let mut ctx = token("float", 4, 2);
    let err = TypeSpec::from_token(&mut ctx).unwrap_err();
    assert!(matches!(err, AstError::EnumMembership { .. }));
    assert_eq!(err.position(), Some(Position::new(4, 2)));

    // Exact match only
    assert!("Int".parse::<TypeSpec>().is_err());
    assert!(" int".parse::<TypeSpec>().is_err());
    assert_eq!("char".parse::<TypeSpec>(), Ok(TypeSpec::Char));
}

// Operator

#[test]
fn test_operator_records_position() {
    let mut ctx = token("+", 1, 2);
    let op = Operator::from_token(&mut ctx, PositionCapture::Record).unwrap();
    assert_eq!(op.lexeme(), "+");
    assert_eq!(op.position(), Some(Position::new(1, 2)));
    assert_eq!(ctx.position(), Some(Position::new(1, 2)));
    assert_eq!(op.to_string(), "Operator::+");
}

#[test]
fn test_operator_skip_leaves_context_alone() {
    let mut ctx = token("-", 6, 3);
    let op = Operator::from_token(&mut ctx, PositionCapture::Skip).unwrap();
    assert_eq!(op.position(), None);
    assert_eq!(ctx.position(), None);
}

#[test]
fn test_empty_production_is_index_error() {
    let mut ctx = Reduction::new();
    assert_eq!(
        Ident::from_token(&mut ctx),
        Err(AstError::PositionIndex { index: 1, len: 0 })
    );
    assert_eq!(
        Operator::from_token(&mut ctx, PositionCapture::Skip),
        Err(AstError::PositionIndex { index: 1, len: 0 })
    );
}

mod proptest_terminals {
    use super::super::{Char, Ident, Int, LocatedTerminal, Terminal};
    use crate::{Position, Reduction};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn int_parse_is_exact(n in any::<i64>()) {
            prop_assert_eq!(Int::parse(&n.to_string()), Ok(n));
        }

        #[test]
        fn char_wrap_then_strip_is_identity(c in any::<char>()) {
            let wrapped = Char::new(c, Position::START).text_value().into_owned();
            prop_assert_eq!(Char::parse(&wrapped), Ok(c));
        }

        #[test]
        fn char_strip_then_wrap_is_identity(
            c in any::<char>().prop_filter("needs an escape", |c| {
                !matches!(c, '\'' | '\\') && !c.is_control()
            }),
        ) {
            let text = format!("'{c}'");
            let parsed = Char::parse(&text);
            prop_assert_eq!(parsed.clone(), Ok(c));
            if let Ok(value) = parsed {
                let rewrapped = Char::new(value, Position::START).text_value().into_owned();
                prop_assert_eq!(rewrapped, text);
            }
        }

        #[test]
        fn construct_twice_is_equal(
            name in "[a-z_][a-z0-9_]{0,12}",
            line in 1u32..10_000,
            offset in 0u32..1_000_000,
        ) {
            let pos = Position::new(line, offset);
            let mut first = Reduction::new().with_symbol(name.as_str(), pos);
            let mut second = Reduction::new().with_symbol(name.as_str(), pos);
            prop_assert_eq!(Ident::from_token(&mut first), Ident::from_token(&mut second));
        }
    }
}
