#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(planner_route::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!planner_route::VERSION.is_empty());
}
