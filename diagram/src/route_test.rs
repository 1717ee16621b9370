use super::*;

// =============================================================
// Fixed routes
// =============================================================

#[test]
fn fixed_paths_resolve_exactly() {
    assert_eq!(RouteTable::resolve("/"), Some(Route::Home));
    assert_eq!(RouteTable::resolve("/login"), Some(Route::Login));
    assert_eq!(RouteTable::resolve("/signup"), Some(Route::SignUp));
    assert_eq!(RouteTable::resolve("/app"), Some(Route::App));
    assert_eq!(RouteTable::resolve("/error"), Some(Route::Error));
    assert_eq!(RouteTable::resolve("/yjstest"), Some(Route::YjsTest));
}

#[test]
fn login_resolves_to_login_page_only() {
    assert_eq!(RouteTable::page_for("/login"), Some(Page::Login));
    assert_ne!(RouteTable::page_for("/login"), Some(Page::Editor));
}

#[test]
fn trailing_slash_query_and_fragment_are_ignored() {
    assert_eq!(RouteTable::resolve("/login/"), Some(Route::Login));
    assert_eq!(RouteTable::resolve("/signup?next=/app"), Some(Route::SignUp));
    assert_eq!(RouteTable::resolve("/app#top"), Some(Route::App));
    assert_eq!(RouteTable::resolve("/?x=1"), Some(Route::Home));
}

// =============================================================
// Document wildcard
// =============================================================

#[test]
fn app_and_document_id_both_render_editor() {
    assert_eq!(RouteTable::page_for("/app"), Some(Page::Editor));
    assert_eq!(RouteTable::page_for("/anyDocId123"), Some(Page::Editor));
    assert_eq!(
        RouteTable::resolve("/anyDocId123"),
        Some(Route::Document { doc_id: "anyDocId123".into() })
    );
}

#[test]
fn wildcard_takes_first_segment() {
    let route = RouteTable::resolve("/abc/def").unwrap();
    assert_eq!(route.doc_id(), Some("abc"));
    assert_eq!(RouteTable::resolve("/abc/").and_then(|r| r.doc_id().map(str::to_owned)), Some("abc".into()));
}

#[test]
fn fixed_routes_are_case_sensitive() {
    assert_eq!(RouteTable::resolve("/Login"), Some(Route::Document { doc_id: "Login".into() }));
}

#[test]
fn fixed_prefix_with_suffix_is_a_document() {
    assert_eq!(RouteTable::resolve("/application").and_then(|r| r.doc_id().map(str::to_owned)), Some("application".into()));
}

#[test]
fn relative_paths_do_not_resolve() {
    assert_eq!(RouteTable::resolve("login"), None);
    assert_eq!(RouteTable::resolve(""), None);
}

// =============================================================
// Route helpers
// =============================================================

#[test]
fn patterns_are_in_precedence_order() {
    let patterns: Vec<_> = RouteTable::patterns().collect();
    assert_eq!(patterns, ["/", "/login", "/signup", "/app", "/error", "/yjstest", "/:doc_id"]);
}

#[test]
fn paths_round_trip_through_resolve() {
    let routes = [
        Route::Home,
        Route::Login,
        Route::SignUp,
        Route::App,
        Route::Error,
        Route::YjsTest,
        Route::Document { doc_id: "d42".into() },
    ];
    for route in routes {
        assert_eq!(RouteTable::resolve(&route.path()), Some(route));
    }
}

#[test]
fn only_wildcard_carries_doc_id() {
    assert_eq!(Route::App.doc_id(), None);
    assert_eq!(Route::Document { doc_id: "x".into() }.page(), Page::Editor);
}
