use super::*;

fn binary_reduction() -> Reduction {
    Reduction::new()
        .with_symbol("x", Position::new(1, 0))
        .with_symbol("+", Position::new(1, 2))
        .with_symbol("1", Position::new(2, 6))
}

#[test]
fn test_capture_default_index() {
    let mut ctx = binary_reduction();
    let pos = capture_position(&mut ctx, DEFAULT_SYMBOL_INDEX);
    assert_eq!(pos, Ok(Position::new(1, 0)));
    assert_eq!(ctx.position(), Some(Position::new(1, 0)));
}

#[test]
fn test_capture_other_index() {
    let mut ctx = binary_reduction();
    assert_eq!(capture_position(&mut ctx, 3), Ok(Position::new(2, 6)));
    assert_eq!(ctx.position(), Some(Position::new(2, 6)));
}

#[test]
fn test_capture_first_symbol_ignores_later_symbols() {
    let mut short = Reduction::new().with_symbol("x", Position::new(4, 31));
    let mut long = Reduction::new()
        .with_symbol("x", Position::new(4, 31))
        .with_symbol("=", Position::new(9, 80));
    assert_eq!(
        capture_position(&mut short, 1),
        capture_position(&mut long, 1)
    );
}

#[test]
fn test_capture_out_of_range() {
    let mut ctx = binary_reduction();
    assert_eq!(
        capture_position(&mut ctx, 4),
        Err(AstError::PositionIndex { index: 4, len: 3 })
    );
    assert_eq!(
        capture_position(&mut ctx, 0),
        Err(AstError::PositionIndex { index: 0, len: 3 })
    );
    // Failed capture leaves the result slot untouched
    assert_eq!(ctx.position(), None);
}

#[test]
fn test_capture_empty_production() {
    let mut ctx = Reduction::new();
    assert!(ctx.is_empty());
    assert_eq!(
        capture_position(&mut ctx, DEFAULT_SYMBOL_INDEX),
        Err(AstError::PositionIndex { index: 1, len: 0 })
    );
}

#[test]
fn test_symbol_text() {
    let ctx = binary_reduction();
    assert_eq!(symbol_text(&ctx, 2), Ok("+"));
    assert_eq!(
        symbol_text(&ctx, 9),
        Err(AstError::PositionIndex { index: 9, len: 3 })
    );
}

#[test]
fn test_capture_through_trait_object() {
    let mut ctx = binary_reduction();
    let dyn_ctx: &mut dyn Production = &mut ctx;
    assert_eq!(capture_position(dyn_ctx, 2), Ok(Position::new(1, 2)));
    assert_eq!(ctx.position(), Some(Position::new(1, 2)));
}
