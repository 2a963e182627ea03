use classdeps::parsing::{TokenCursor, TokenKind, parse_type};
use classdeps::tokenize;

#[test]
fn test_header_token_kinds() {
    let kinds: Vec<TokenKind> = tokenize("public abstract class Foo extends Bar<T> {")
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Public,
            TokenKind::Abstract,
            TokenKind::Class,
            TokenKind::Identifier,
            TokenKind::Extends,
            TokenKind::Identifier,
            TokenKind::Lt,
            TokenKind::Identifier,
            TokenKind::Gt,
            TokenKind::LBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_positions_reset_per_line() {
    let tokens = tokenize("class A {\n\tint x;\n}");
    let int = tokens.iter().find(|t| t.kind == TokenKind::Int).unwrap();
    assert_eq!((int.line, int.column), (2, 2));
    let close = tokens.iter().find(|t| t.kind == TokenKind::RBrace).unwrap();
    assert_eq!((close.line, close.column), (3, 1));
}

#[test]
fn test_unknown_characters_never_fail() {
    let tokens = tokenize("class # A ~ {");
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Other).count(),
        2
    );
}

#[test]
fn test_cursor_reads_eof_forever() {
    let mut cursor = TokenCursor::new(tokenize("x"));
    cursor.advance();
    for _ in 0..3 {
        assert!(cursor.at_end());
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
    }
}

#[test]
fn test_generic_types_round_trip() {
    for text in [
        "int",
        "String[]",
        "List<String>",
        "Map<String, List<? extends Number>>",
        "Map<K, V>[][]",
        "Comparator<? super T>",
        "java.util.Map.Entry<String, Integer>",
    ] {
        let mut cursor = TokenCursor::new(tokenize(text));
        let parsed = parse_type(&mut cursor).unwrap();
        assert_eq!(parsed.as_str(), text);
        assert!(cursor.at_end(), "{text} left tokens behind");
    }
}
