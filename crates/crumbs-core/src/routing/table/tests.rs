use super::*;

const SITE: &str = r#"
[[routes]]
name = "front"
path = "/node"
title = "Welcome"

[[routes]]
name = "blog.index"
path = "/blog"
title = "Blog"

[[routes]]
name = "blog.year"
path = "/blog/{year}"
title = "{year} Archive"
requirements = { year = '^\d{4}$' }

[[routes]]
name = "blog.post"
path = "/blog/{year}/{slug}"

[[routes]]
name = "admin"
path = "/admin"
access = "forbidden"

[[routes]]
name = "secret"
path = "/secret"
access = "denied"

[[routes]]
name = "webhook"
path = "/hooks/{id}"
methods = ["POST"]

[[aliases]]
alias = "/about"
path = "/node/1"

[[aliases]]
alias = "/news/"
path = "/blog"
"#;

fn table() -> RouteTable {
    RouteTable::from_toml_str(SITE).unwrap()
}

#[test]
fn counts() {
    let t = table();
    assert_eq!(t.route_count(), 7);
    assert_eq!(t.alias_count(), 2);
}

#[test]
fn matches_literal_route_with_title() {
    let r = table().match_path("/blog").unwrap();
    assert_eq!(r.route_name(), "blog.index");
    assert_eq!(r.internal_path(), "/blog");
    assert_eq!(r.title(), Some("Blog"));
    assert!(r.is_access_allowed());
}

#[test]
fn substitutes_captures_into_title() {
    let r = table().match_path("/blog/2024/").unwrap();
    assert_eq!(r.route_name(), "blog.year");
    assert_eq!(r.internal_path(), "/blog/2024");
    assert_eq!(r.title(), Some("2024 Archive"));
}

#[test]
fn route_without_title() {
    let r = table().match_path("/blog/2024/my-post").unwrap();
    assert_eq!(r.route_name(), "blog.post");
    assert_eq!(r.title(), None);
}

#[test]
fn failure_kinds() {
    let t = table();
    let kind = |p: &str| t.match_path(p).unwrap_err().kind;
    assert_eq!(kind("/missing"), MatchFailureKind::NotFound);
    assert_eq!(kind("/blog/latest"), MatchFailureKind::ParamInvalid);
    assert_eq!(kind("/hooks/7"), MatchFailureKind::MethodNotAllowed);
    assert_eq!(kind("/secret"), MatchFailureKind::AccessDenied);
}

#[test]
fn forbidden_route_matches_without_access() {
    let r = table().match_path("/admin").unwrap();
    assert!(!r.is_access_allowed());
}

#[test]
fn aliases_are_processed() {
    let t = table();
    assert_eq!(t.process_inbound("/about"), "/node/1");
    assert_eq!(t.process_inbound("/news"), "/blog");
    assert_eq!(t.process_inbound("/blog/2024/"), "/blog/2024");
}

#[test]
fn empty_table_is_valid() {
    let t = RouteTable::from_toml_str("").unwrap();
    assert_eq!(t.route_count(), 0);
    assert_eq!(
        t.match_path("/").unwrap_err().kind,
        MatchFailureKind::NotFound
    );
}

#[test]
fn duplicate_route_rejected() {
    let data = r#"
        [[routes]]
        name = "a"
        path = "/a"
        [[routes]]
        name = "a"
        path = "/b"
    "#;
    assert!(matches!(
        RouteTable::from_toml_str(data),
        Err(TableError::DuplicateRoute(name)) if name == "a"
    ));
}

#[test]
fn duplicate_alias_rejected() {
    let data = r#"
        [[aliases]]
        alias = "/x"
        path = "/a"
        [[aliases]]
        alias = "/x/"
        path = "/b"
    "#;
    assert!(matches!(
        RouteTable::from_toml_str(data),
        Err(TableError::DuplicateAlias(_))
    ));
}

#[test]
fn requirement_for_unknown_param_rejected() {
    let data = r#"
        [[routes]]
        name = "a"
        path = "/a/{id}"
        requirements = { nid = "\\d+" }
    "#;
    assert!(matches!(
        RouteTable::from_toml_str(data),
        Err(TableError::UnknownRequirementParam { .. })
    ));
}

#[test]
fn invalid_regex_rejected() {
    let data = r#"
        [[routes]]
        name = "a"
        path = "/a/{id}"
        requirements = { id = "(" }
    "#;
    assert!(matches!(
        RouteTable::from_toml_str(data),
        Err(TableError::InvalidRequirement { .. })
    ));
}

#[test]
fn unknown_access_value_is_parse_error() {
    let data = r#"
        [[routes]]
        name = "a"
        path = "/a"
        access = "maybe"
    "#;
    assert!(matches!(
        RouteTable::from_toml_str(data),
        Err(TableError::Parse(_))
    ));
}

#[test]
fn load_reports_missing_file() {
    let err = RouteTable::load(Path::new("/nonexistent/routes.toml")).unwrap_err();
    assert!(matches!(err, TableError::Read { .. }));
}
