use super::*;

fn names<'a>(routes: &[&'a Route]) -> Vec<&'a str> {
    routes.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn literal_segments_beat_params() {
    let table = RouteTable::campus();

    let mine = table.resolve("/tickets/my").unwrap();
    assert_eq!(mine.route.name, "my-tickets");
    assert!(mine.params.is_empty());

    let detail = table.resolve("/tickets/42").unwrap();
    assert_eq!(detail.route.name, "ticket-detail");
    assert_eq!(detail.params.get("id").map(String::as_str), Some("42"));
}

#[test]
fn resolve_ignores_query_fragment_and_slashes() {
    let table = RouteTable::campus();

    let hit = table.resolve("/grade/exams/9/?tab=rank#top").unwrap();
    assert_eq!(hit.route.name, "grade-exam");
    assert_eq!(hit.params.get("examId").map(String::as_str), Some("9"));

    assert_eq!(table.resolve("/?from=banner").unwrap().route.name, "home");
    assert!(table.resolve("/tickets/1/extra").is_none());
    assert!(table.resolve("/nowhere").is_none());
}

#[test]
fn permission_implies_auth() {
    let route = Route::new("/admin/x", "x", "X").permission("x.manage");
    assert!(route.requires_auth);
    assert_eq!(route.permission.as_deref(), Some("x.manage"));
}

#[test]
fn breadcrumbs_walk_root_to_leaf() {
    let table = RouteTable::campus();

    assert_eq!(
        names(&table.breadcrumbs("admin-ticket-review")),
        vec!["home", "admin", "admin-tickets", "admin-ticket-detail", "admin-ticket-review"]
    );
    assert_eq!(names(&table.breadcrumbs("home")), vec!["home"]);
    assert!(table.breadcrumbs("missing").is_empty());
}

#[test]
fn campus_table_is_well_formed() {
    let routes = RouteTable::campus().routes().to_vec();
    assert!(RouteTable::new(routes).is_ok());
}

#[test]
fn new_rejects_duplicates_and_orphans() {
    let dup = RouteTable::new(vec![Route::new("/", "home", "Home"), Route::new("/x", "home", "X")]);
    assert_eq!(dup.unwrap_err(), RouteError::DuplicateName("home".into()));

    let orphan = RouteTable::new(vec![Route::new("/x", "x", "X").parent("ghost")]);
    assert_eq!(
        orphan.unwrap_err(),
        RouteError::UnknownParent { route: "x".into(), parent: "ghost".into() }
    );
}

#[test]
fn breadcrumbs_stop_on_parent_cycle() {
    let table = RouteTable::new(vec![
        Route::new("/a", "a", "A").parent("b"),
        Route::new("/b", "b", "B").parent("a"),
    ])
    .unwrap();

    let trail = table.breadcrumbs("a");
    assert!(trail.len() <= 3);
    assert_eq!(trail.last().unwrap().name, "a");
}
