#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(planner::VERSION, env!("CARGO_PKG_VERSION"));
    assert_eq!(planner::VERSION, planner::layout::VERSION);
    assert_eq!(planner::VERSION, planner::route::VERSION);
}
