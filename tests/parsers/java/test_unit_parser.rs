use crate::common::{call_shapes, find_method, load_fixture, parse_fixture};
use classdeps::error::ParseError;
use classdeps::types::{Modifier, UnitKind, Visibility};
use classdeps::{parse_source, tokenize};

#[test]
fn test_service_header() {
    let unit = parse_fixture("com/example/service/UserService.java");

    assert_eq!(unit.package.as_deref(), Some("com.example.service"));
    assert_eq!(unit.kind, UnitKind::Class);
    assert_eq!(unit.name, "UserService");
    assert_eq!(unit.qualified_name(), "com.example.service.UserService");
    assert_eq!(unit.access, Some(Visibility::Public));
    assert!(unit.modifiers.is_empty());
    assert_eq!(unit.superclass.as_ref().map(|s| s.as_str()), Some("BaseService"));

    let interfaces: Vec<&str> = unit.interfaces.iter().map(|i| i.as_str()).collect();
    assert_eq!(interfaces, vec!["Auditable", "Comparable<UserService>"]);

    assert_eq!(
        unit.imports,
        vec![
            "com.example.repository.UserRepository",
            "com.example.model.User",
            "java.util.List",
        ]
    );
    assert!(unit.dependencies.is_empty(), "resolution has not run yet");
}

#[test]
fn test_service_members() {
    let unit = parse_fixture("com/example/service/UserService.java");

    // Constructor and fields contribute nothing
    let names: Vec<&str> = unit.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["getUsers", "audit", "findUser", "validate", "compareTo"]);

    let get_users = find_method(&unit, "getUsers").unwrap();
    assert_eq!(get_users.access, Some(Visibility::Public));
    assert_eq!(get_users.return_type.as_str(), "List<User>");
    assert!(get_users.parameters.is_empty());

    let find_user = find_method(&unit, "findUser").unwrap();
    assert_eq!(find_user.access, Some(Visibility::Protected));
    assert_eq!(find_user.signature(), "findUser(long id)");

    let validate = find_method(&unit, "validate").unwrap();
    assert_eq!(validate.access, Some(Visibility::Private));
    assert!(validate.calls.is_empty(), "`new` is not a call");
}

#[test]
fn test_service_calls() {
    let unit = parse_fixture("com/example/service/UserService.java");

    assert_eq!(
        call_shapes(&unit, "getUsers"),
        vec![
            (None, "validate".to_string()),
            (Some("userRepository".to_string()), "findAll".to_string()),
        ]
    );
    assert_eq!(
        call_shapes(&unit, "audit"),
        vec![
            (Some("this".to_string()), "log".to_string()),
            (Some("super".to_string()), "audit".to_string()),
            (Some("formatter".to_string()), "format".to_string()),
        ]
    );
    assert_eq!(unit.call_count(), 6);
}

#[test]
fn test_interface_extends_list() {
    let unit = parse_fixture("com/example/repository/UserRepository.java");

    assert_eq!(unit.kind, UnitKind::Interface);
    assert!(unit.superclass.is_none());
    let interfaces: Vec<&str> = unit.interfaces.iter().map(|i| i.as_str()).collect();
    assert_eq!(interfaces, vec!["Repository<User, Long>", "AutoCloseable"]);
    assert_eq!(unit.imports, vec!["com.example.model.User", "java.util.*"]);

    // `default void close()` has no access modifier and is skipped
    let names: Vec<&str> = unit.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["findAll", "findById"]);
    assert!(unit.methods.iter().all(|m| m.calls.is_empty()));
}

#[test]
fn test_final_class_with_nested_type() {
    let unit = parse_fixture("com/example/model/User.java");

    assert!(unit.modifiers.contains(&Modifier::Final));
    let names: Vec<&str> = unit.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["getName", "hasRole"], "Builder members are not hoisted");
    assert_eq!(
        call_shapes(&unit, "hasRole"),
        vec![(Some("Arrays".to_string()), "asList".to_string())]
    );
}

#[test]
fn test_enum_with_constant_bodies() {
    let unit = parse_fixture("com/example/model/Status.java");

    assert_eq!(unit.kind, UnitKind::Enum);
    let names: Vec<&str> = unit.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["label"]);
    assert_eq!(
        call_shapes(&unit, "label"),
        vec![(Some("code".to_string()), "toUpperCase".to_string())]
    );
}

#[test]
fn test_malformed_header_reports_line() {
    let source = load_fixture("com/example/service/Broken.java");
    let err = parse_source(&source.text, source.file_path).unwrap_err();

    assert_eq!(err.line(), 3);
    assert!(matches!(err, ParseError::Syntax { .. }));
    assert!(err.to_string().contains("type name"));
}

#[test]
fn test_missing_type_keyword() {
    let err = parse_source("package a;\n\npublic Thing {}", "Thing.java").unwrap_err();
    assert_eq!(err.line(), 3);
    assert!(err.to_string().contains("'class', 'interface' or 'enum'"));
}

#[test]
fn test_unterminated_body() {
    let err = parse_source("public class A {\n  public void f() {\n", "A.java").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn test_missing_parameter_list_close() {
    let err = parse_source("class A {\n public void f(int a {\n }\n}", "A.java").unwrap_err();
    assert_eq!(err.line(), 2);
}

#[test]
fn test_parse_unit_from_tokens() {
    let tokens = tokenize("class Empty { }");
    let unit = classdeps::parsing::parse_unit(tokens, "Empty.java").unwrap();
    assert_eq!(unit.name, "Empty");
    assert!(unit.access.is_none());
    assert!(unit.methods.is_empty());
}
