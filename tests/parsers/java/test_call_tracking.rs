use classdeps::parsing::{TokenCursor, TokenKind, track_calls};
use classdeps::{MethodCall, tokenize};

fn track(body: &str) -> Vec<MethodCall> {
    let mut cursor = TokenCursor::new(tokenize(body));
    let calls = track_calls(&mut cursor).expect("body should scan");
    assert!(cursor.at_end(), "tracker must consume the whole body");
    calls
}

#[test]
fn test_statement_level_calls_in_source_order() {
    let calls = track(
        r#"{
        userService.getUsers();
        this.validate();
        logAccess();
    }"#,
    );

    let rendered: Vec<String> = calls.iter().map(|c| c.qualified_name()).collect();
    assert_eq!(
        rendered,
        vec!["userService.getUsers", "this.validate", "logAccess"]
    );
    let lines: Vec<u32> = calls.iter().map(|c| c.line).collect();
    assert_eq!(lines, vec![2, 3, 4]);
    assert_eq!(calls[1].receiver.as_deref(), Some("this"));
    assert_eq!(calls[2].receiver, None);
}

#[test]
fn test_calls_in_control_flow() {
    let calls = track(
        r#"{
        try {
            while (queue.hasNext()) {
                handler.handle(item);
            }
        } catch (Exception e) {
            logger.error(e);
        } finally {
            cleanup();
        }
    }"#,
    );
    let rendered: Vec<String> = calls.iter().map(|c| c.qualified_name()).collect();
    // `queue.hasNext()` sits inside the `while` condition's parentheses, which
    // are not a call group, so it is still reported
    assert_eq!(
        rendered,
        vec!["queue.hasNext", "handler.handle", "logger.error", "cleanup"]
    );
}

#[test]
fn test_nested_argument_calls_are_a_known_gap() {
    let calls = track("{ repository.save(mapper.toEntity(dto)); }");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].qualified_name(), "repository.save");
}

#[test]
fn test_strings_and_comments_do_not_produce_calls() {
    let calls = track(
        r#"{
        // fake.call();
        /* other.call(); */
        String s = "text.call()";
        real();
    }"#,
    );
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method_name, "real");
}

#[test]
fn test_cursor_stops_after_matching_brace() {
    let mut cursor = TokenCursor::new(tokenize("{ a(); { b(); } } tail();"));
    let calls = track_calls(&mut cursor).unwrap();
    assert_eq!(calls.len(), 2);
    assert!(cursor.check(TokenKind::Identifier));
    assert_eq!(cursor.current().text, "tail");
}

#[test]
fn test_body_must_start_with_brace() {
    let mut cursor = TokenCursor::new(tokenize("run();"));
    assert!(track_calls(&mut cursor).is_err());
}
