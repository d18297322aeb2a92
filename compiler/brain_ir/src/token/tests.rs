use super::*;
use pretty_assertions::assert_eq;

#[test]
fn same_kind_ignores_payload() {
    assert!(TokenKind::Int(1).same_kind(&TokenKind::Int(2)));
    assert!(!TokenKind::Int(1).same_kind(&TokenKind::Minus));
}

#[test]
fn display_is_suitable_for_diagnostics() {
    assert_eq!(TokenKind::ColonEq.to_string(), "`:=`");
    assert_eq!(TokenKind::Int(12).to_string(), "integer `12`");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
}

#[test]
fn token_list_kinds() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Write, Span::new(0, 5)));
    list.push(Token::new(TokenKind::Eof, Span::point(5)));

    assert_eq!(list.kinds(), vec![TokenKind::Write, TokenKind::Eof]);
    assert_eq!(format!("{:?}", list.get(0)), "Some(Write @ 0..5)");
}
