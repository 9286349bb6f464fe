use planner_model::{
    Block, Connection, Endpoint, Plan, Point, PortGeometry, Rect, ResourceRole, Size,
};

fn sample_plan() -> Plan {
    let mut plan = Plan::new();
    plan.insert_block(
        Block::new("db")
            .with_bounds(0.0, 0.0, 200.0, 150.0)
            .with_provider("postgres")
            .with_provider("metrics"),
    );
    plan.insert_block(
        Block::new("api")
            .with_bounds(400.0, 100.0, 200.0, 150.0)
            .with_consumer("users")
            .with_provider("rest"),
    );
    plan.insert_block(
        Block::new("web")
            .with_bounds(800.0, 0.0, 200.0, 150.0)
            .with_consumer("api"),
    );
    plan.add_connection(Connection::new(
        Endpoint::new("db", "postgres"),
        Endpoint::new("api", "users"),
    ));
    plan.add_connection(Connection::new(
        Endpoint::new("api", "rest"),
        Endpoint::new("web", "api"),
    ));
    plan
}

#[test]
fn add_connection_deduplicates_by_id() {
    let mut plan = sample_plan();
    let again = Connection::between(
        Endpoint::new("api", "users"),
        ResourceRole::Consumer,
        Endpoint::new("db", "postgres"),
        ResourceRole::Provider,
    )
    .unwrap();
    assert!(!plan.add_connection(again));
    assert_eq!(plan.connections.len(), 2);
}

#[test]
fn edges_collapse_parallel_connections() {
    let mut plan = sample_plan();
    plan.add_connection(Connection::new(
        Endpoint::new("db", "metrics"),
        Endpoint::new("api", "users"),
    ));
    let edges = plan.edges();
    assert_eq!(edges.len(), 2);
    assert!(edges.contains("db", "api"));
    assert!(edges.contains("api", "web"));
}

#[test]
fn removing_a_block_cascades_to_its_connections() {
    let mut plan = sample_plan();
    let removed = plan.remove_block("api").unwrap();
    assert_eq!(removed.id, "api");
    assert!(plan.connections.is_empty());
    assert_eq!(
        plan.blocks.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["db", "web"]
    );
    assert!(plan.remove_block("api").is_none());
}

#[test]
fn remove_connection_by_id() {
    let mut plan = sample_plan();
    let removed = plan.remove_connection("api::rest->web::api").unwrap();
    assert_eq!(removed.consumer.block_id, "web");
    assert_eq!(plan.connections.len(), 1);
    assert!(plan.connection("api::rest->web::api").is_none());
}

#[test]
fn obstacles_skip_the_dragged_block_and_pad() {
    let plan = sample_plan();
    let obstacles = plan.obstacles(Some("api"), 10.0);
    assert_eq!(obstacles.len(), 2);
    assert_eq!(obstacles[0].id, "db");
    assert_eq!(obstacles[0].rect, Rect::new(-10.0, -10.0, 220.0, 170.0));
    assert_eq!(obstacles[1].id, "web");
}

#[test]
fn port_points_sit_on_block_edges() {
    let plan = sample_plan();
    let geometry = PortGeometry::default();

    let provider = plan
        .port_point(&Endpoint::new("db", "metrics"), ResourceRole::Provider, &geometry)
        .unwrap();
    assert_eq!(provider, Point::new(200.0, 70.0 + 1.5 * 40.0));

    let consumer = plan
        .port_point(&Endpoint::new("api", "users"), ResourceRole::Consumer, &geometry)
        .unwrap();
    assert_eq!(consumer, Point::new(400.0, 100.0 + 70.0 + 20.0));
}

#[test]
fn unknown_ports_have_no_point() {
    let plan = sample_plan();
    let geometry = PortGeometry::default();
    assert!(plan
        .port_point(&Endpoint::new("db", "nope"), ResourceRole::Provider, &geometry)
        .is_none());
    assert!(plan
        .port_point(&Endpoint::new("db", "postgres"), ResourceRole::Consumer, &geometry)
        .is_none());
    assert!(plan
        .port_point(&Endpoint::new("ghost", "x"), ResourceRole::Consumer, &geometry)
        .is_none());
}

#[test]
fn move_and_resize_update_bounds() {
    let mut plan = sample_plan();
    assert!(plan.move_block("web", Point::new(10.0, 20.0)));
    assert!(plan.resize_block("web", Size::new(50.0, 60.0)));
    assert_eq!(plan.block("web").unwrap().bounds(), Rect::new(10.0, 20.0, 50.0, 60.0));
    assert!(!plan.move_block("ghost", Point::new(0.0, 0.0)));
}

#[test]
fn plan_deserializes_from_camel_case_json() {
    let json = r#"{
        "blocks": {
            "db": { "id": "db", "left": 5, "top": 6, "providers": [{ "name": "pg" }] }
        },
        "connections": [
            { "provider": { "blockId": "db", "resourceName": "pg" },
              "consumer": { "blockId": "api", "resourceName": "users" } }
        ]
    }"#;
    let plan: Plan = serde_json::from_str(json).unwrap();
    let db = plan.block("db").unwrap();
    assert_eq!(db.position(), Point::new(5.0, 6.0));
    assert_eq!(db.providers.len(), 1);
    assert_eq!(plan.connections[0].id(), "db::pg->api::users");
}
