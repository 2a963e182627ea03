use crate::common::{dependency_names, parse_fixture};
use classdeps::parsing::parse_source;
use classdeps::resolve_dependencies;

#[test]
fn test_import_resolves_receiver_to_class_name() {
    let mut units = vec![
        parse_fixture("com/example/service/UserService.java"),
        parse_fixture("com/example/repository/UserRepository.java"),
    ];
    resolve_dependencies(&mut units);

    let service = &units[0];
    assert!(service.dependencies.contains("UserRepository"));
    assert!(!service.dependencies.contains("userRepository"));
    assert_eq!(
        dependency_names(service),
        vec![
            "Auditable",
            "BaseService",
            "Comparable",
            "Formatter",
            "UserRepository"
        ]
    );

    assert_eq!(
        dependency_names(&units[1]),
        vec!["AutoCloseable", "Repository"]
    );
}

#[test]
fn test_no_unit_depends_on_itself() {
    let source = r#"
package app;
public class Widget {
    public void draw() {
        render();
        this.render();
        widget.render();
    }
    private void render() { }
}
"#;
    let mut units = vec![parse_source(source, "Widget.java").unwrap()];
    resolve_dependencies(&mut units);
    assert!(units[0].dependencies.is_empty());
}

#[test]
fn test_same_package_and_fallback_guesses() {
    let orders = parse_source(
        "package shop;\npublic class Orders { public void place() { billing.charge(); mailer.send(); } }",
        "Orders.java",
    )
    .unwrap();
    let billing = parse_source("package shop;\npublic class Billing { }", "Billing.java").unwrap();

    let mut units = vec![orders, billing];
    resolve_dependencies(&mut units);

    // Billing lives in the same package; Mailer is only a guess
    assert_eq!(dependency_names(&units[0]), vec!["Billing", "Mailer"]);
    assert!(units[1].dependencies.is_empty());
}

#[test]
fn test_resolution_is_repeatable() {
    let mut units = vec![
        parse_fixture("com/example/service/UserService.java"),
        parse_fixture("com/example/model/User.java"),
        parse_fixture("com/example/model/Status.java"),
    ];
    resolve_dependencies(&mut units);
    let first: Vec<_> = units.iter().map(|u| u.dependencies.clone()).collect();

    resolve_dependencies(&mut units);
    let second: Vec<_> = units.iter().map(|u| u.dependencies.clone()).collect();

    assert_eq!(first, second);
}

#[test]
fn test_units_without_package_or_imports() {
    let mut units = vec![
        parse_source("class A { public void f() { helper.run(); } }", "A.java").unwrap(),
    ];
    resolve_dependencies(&mut units);
    assert_eq!(dependency_names(&units[0]), vec!["Helper"]);
}
