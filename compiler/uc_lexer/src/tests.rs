use super::*;
use pretty_assertions::assert_eq;
use uc_ir::{capture_position, Production};

fn kinds_and_text(source: &str) -> Vec<(TokenKind, &str)> {
    lex(source)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

#[test]
fn test_lex_expression() {
    assert_eq!(
        kinds_and_text("x + 1"),
        [
            (TokenKind::Ident, "x"),
            (TokenKind::Operator, "+"),
            (TokenKind::Int, "1"),
        ]
    );
}

#[test]
fn test_lex_literals_keep_raw_text() {
    assert_eq!(
        kinds_and_text(r#"'a' '\n' "hi" 007"#),
        [
            (TokenKind::Char, "'a'"),
            (TokenKind::Char, r"'\n'"),
            (TokenKind::Str, "\"hi\""),
            (TokenKind::Int, "007"),
        ]
    );
}

#[test]
fn test_lex_keywords_vs_identifiers() {
    assert_eq!(
        kinds_and_text("int integer void return float"),
        [
            (TokenKind::TypeKeyword, "int"),
            (TokenKind::Ident, "integer"),
            (TokenKind::TypeKeyword, "void"),
            (TokenKind::Keyword, "return"),
            (TokenKind::Ident, "float"),
        ]
    );
}

#[test]
fn test_lex_longest_operator() {
    assert_eq!(
        kinds_and_text("a<=b==c&&!d"),
        [
            (TokenKind::Ident, "a"),
            (TokenKind::Operator, "<="),
            (TokenKind::Ident, "b"),
            (TokenKind::Operator, "=="),
            (TokenKind::Ident, "c"),
            (TokenKind::Operator, "&&"),
            (TokenKind::Operator, "!"),
            (TokenKind::Ident, "d"),
        ]
    );
}

#[test]
fn test_positions_track_lines_and_offsets() {
    let tokens = lex("int x;\n  x = 42;").unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| t.position.as_tuple()).collect();
    assert_eq!(
        positions,
        [(1, 0), (1, 4), (1, 5), (2, 9), (2, 11), (2, 13), (2, 15)]
    );
}

#[test]
fn test_offsets_count_bytes_not_chars() {
    let tokens = lex("s = \"é\";\n  x").unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| t.position.as_tuple()).collect();
    // `é` is two bytes, and offsets do not restart at a new line.
    assert_eq!(positions, [(1, 0), (1, 2), (1, 4), (1, 8), (2, 12)]);
}

#[test]
fn test_comments_are_skipped_and_counted() {
    let tokens = lex("a /* one\ntwo */ b // tail\nc").unwrap();
    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.text, t.position.line))
        .collect();
    assert_eq!(summary, [("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn test_block_comment_forms() {
    assert_eq!(
        kinds_and_text("a /* x */ b"),
        [(TokenKind::Ident, "a"), (TokenKind::Ident, "b")]
    );
    assert_eq!(
        kinds_and_text("a /**/ b"),
        [(TokenKind::Ident, "a"), (TokenKind::Ident, "b")]
    );
    assert_eq!(
        kinds_and_text("x/* ** / * */-/***/y"),
        [
            (TokenKind::Ident, "x"),
            (TokenKind::Operator, "-"),
            (TokenKind::Ident, "y"),
        ]
    );
}

#[test]
fn test_block_comments_do_not_nest() {
    // The first `*/` closes the comment; the rest is ordinary input.
    assert_eq!(
        kinds_and_text("/* a /* b */ c */"),
        [
            (TokenKind::Ident, "c"),
            (TokenKind::Operator, "*"),
            (TokenKind::Operator, "/"),
        ]
    );
}

#[test]
fn test_unterminated_block_comment() {
    let err = lex("a = 1; /* open\nstill open").unwrap_err();
    assert_eq!(
        err,
        LexError::UnterminatedComment {
            position: Position::new(1, 7),
            end: Position::new(2, 25),
        }
    );
    assert_eq!(err.position(), Some(Position::new(1, 7)));
    assert_eq!(
        err.to_string(),
        "unterminated block comment starting at 1:7"
    );
}

#[test]
fn test_unrecognized_input() {
    let err = lex("x = $y").unwrap_err();
    assert_eq!(
        err,
        LexError::Unrecognized {
            text: "$".to_owned(),
            position: Position::new(1, 4),
        }
    );
    assert_eq!(err.position(), Some(Position::new(1, 4)));
    assert_eq!(err.to_string(), "unrecognized input `$` at 1:4");
}

#[test]
fn test_token_production_indices() {
    let tokens = lex("f ( y )").unwrap();
    let mut ctx = TokenProduction::new(&tokens);
    assert_eq!(ctx.len(), 4);
    assert_eq!(ctx.text(1), Some("f"));
    assert_eq!(ctx.text(0), None);
    assert_eq!(ctx.lexpos(3), Some(4));
    assert_eq!(ctx.lineno(5), None);

    assert_eq!(capture_position(&mut ctx, 3), Ok(Position::new(1, 4)));
    assert_eq!(ctx.position(), Some(Position::new(1, 4)));
}

#[test]
fn test_to_reduction_matches_token_production() {
    let tokens = lex("v [ 0 ]").unwrap();
    let owned = to_reduction(&tokens);
    let borrowed = TokenProduction::new(&tokens);
    assert_eq!(owned.len(), borrowed.len());
    for i in 1..=owned.len() {
        assert_eq!(owned.text(i), borrowed.text(i));
        assert_eq!(owned.lineno(i), borrowed.lineno(i));
        assert_eq!(owned.lexpos(i), borrowed.lexpos(i));
    }
}
