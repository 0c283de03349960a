//! Integration tests for rhtmx-navigator
//!
//! Tests are organized by feature area:
//! - ParamValue wire form
//! - Route wire form and accessors
//! - Registry (collisions, resolve, removal)
//! - Coordinator (current route, observers)
//! - Features and the navigation context

use maud::{html, Markup};
use pretty_assertions::assert_eq;
use rhtmx_navigator::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Hotel {
    id: String,
    rating: f64,
}

// ============================================================================
// ParamValue
// ============================================================================

#[test]
fn test_param_value_round_trip() {
    let params = vec![
        ParamValue::from("Bookify"),
        ParamValue::Int(42),
        ParamValue::Int(i64::MIN),
        ParamValue::Double(3.14),
        ParamValue::Double(5.0),
        ParamValue::Bool(true),
        ParamValue::Bool(false),
        ParamValue::json(&HashMap::from([("key", "value")])).unwrap(),
        ParamValue::Object(vec![0x00, 0xff, 0x10, 0x80, 0x7f]),
        ParamValue::Object(Vec::new()),
    ];

    for param in params {
        let json = serde_json::to_string(&param).unwrap();
        let decoded: ParamValue = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, param);

        assert_eq!(ParamValue::decode(param.encode().unwrap()).unwrap(), param);
    }
}

#[test]
fn test_numeric_looking_string_keeps_its_variant() {
    let value = ParamValue::from("42");
    let decoded = ParamValue::decode(value.encode().unwrap()).unwrap();
    assert_eq!(decoded, ParamValue::String("42".to_string()));
}

#[test]
fn test_base64_looking_strings_come_back_as_objects() {
    let empty = ParamValue::decode(ParamValue::from("").encode().unwrap()).unwrap();
    assert_eq!(empty, ParamValue::Object(Vec::new()));

    let test = ParamValue::decode(ParamValue::from("test").encode().unwrap()).unwrap();
    assert_eq!(test, ParamValue::Object(vec![181, 235, 45]));

    let plain = ParamValue::decode(ParamValue::from("Bookify").encode().unwrap()).unwrap();
    assert_eq!(plain, ParamValue::from("Bookify"));
}

#[test]
fn test_param_value_decode_failure() {
    let err = serde_json::from_str::<ParamValue>("null").unwrap_err();
    assert!(err.to_string().contains("base64 object payload"));

    assert!(matches!(
        ParamValue::decode(serde_json::json!({"nested": true})),
        Err(NavError::Decoding(_))
    ));
}

#[test]
fn test_as_string_projection() {
    assert_eq!(ParamValue::from("Hi").as_string(), Some("Hi".to_string()));
    assert_eq!(ParamValue::Int(5).as_string(), Some("5".to_string()));
    assert_eq!(ParamValue::Double(4.9).as_string(), Some("4.9".to_string()));
    assert_eq!(ParamValue::Bool(true).as_string(), Some("true".to_string()));
    assert_eq!(ParamValue::Object(b"{}".to_vec()).as_string(), None);
}

// ============================================================================
// Route
// ============================================================================

#[test]
fn test_route_round_trip() {
    let route = Route::new("/booking")
        .with_param("id", 555)
        .with_param("confirmed", true)
        .with_source(RouteSource::InApp)
        .with_presentation(PresentationStyle::Sheet);

    let json = route.to_json().unwrap();
    let decoded = Route::from_json(&json).unwrap();
    assert_eq!(decoded, route);
}

#[test]
fn test_route_round_trip_with_object_param() {
    let hotel = Hotel {
        id: "H001".to_string(),
        rating: 4.8,
    };
    let route = Route::new("/hotel/details")
        .with_param("hotel", ParamValue::json(&hotel).unwrap())
        .with_source(RouteSource::Deeplink)
        .with_presentation(PresentationStyle::FullScreen);

    let decoded = Route::from_json(&route.to_json().unwrap()).unwrap();
    assert_eq!(decoded, route);
    assert_eq!(decoded.decode::<Hotel>("hotel"), Some(hotel));
}

#[test]
fn test_route_wire_format() {
    let json = r#"{
        "path": "/booking",
        "params": {"id": 555, "note": "late arrival", "vip": false, "total": 120.5},
        "source": "deeplink",
        "presentation": "modal"
    }"#;

    let route = Route::from_json(json).unwrap();
    assert_eq!(route.path(), "/booking");
    assert_eq!(route.int("id"), Some(555));
    assert_eq!(route.string("note"), Some("late arrival".to_string()));
    assert_eq!(route.bool("vip"), Some(false));
    assert_eq!(route.double("total"), Some(120.5));
    assert_eq!(route.source(), RouteSource::Deeplink);
    assert_eq!(route.presentation(), PresentationStyle::Modal);
}

#[test]
fn test_route_wire_format_rejects_unknown_presentation() {
    let json = r#"{"path": "/x", "source": "inApp", "presentation": "popover"}"#;
    assert!(matches!(Route::from_json(json), Err(NavError::Decoding(_))));
}

#[test]
fn test_route_accessor_type_mismatch() {
    let route = Route::new("/cart").with_param("count", 5);
    assert_eq!(route.string("count"), None);
    assert_eq!(route.int("count"), Some(5));
}

#[test]
fn test_routes_as_set_members() {
    let mut seen = std::collections::HashSet::new();
    seen.insert(Route::new("/a").with_param("x", 1));
    seen.insert(Route::new("/a").with_param("x", 1));
    seen.insert(Route::new("/a").with_param("x", 2));
    assert_eq!(seen.len(), 2);
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_collision_keeps_first_factory() {
    init_tracing();
    let mut registry: RouteRegistry<String> = RouteRegistry::new();
    registry.register("/home", || "first".to_string()).unwrap();

    let err = registry.register("/home", || "second".to_string()).unwrap_err();
    assert_eq!(err, NavError::DuplicateRoute("/home".to_string()));
    assert_eq!(registry.resolve("/home"), Some("first".to_string()));

    registry
        .register_with("/home", true, || "third".to_string())
        .unwrap();
    assert_eq!(registry.resolve("/home"), Some("third".to_string()));
}

#[test]
fn test_registry_resolve_miss() {
    let registry: RouteRegistry<String> = RouteRegistry::new();
    assert_eq!(registry.resolve("/unregistered"), None);
}

#[test]
fn test_registry_invokes_factory_on_every_resolve() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut registry = RouteRegistry::new();
    registry
        .register("/counter", move || counter.fetch_add(1, Ordering::SeqCst) + 1)
        .unwrap();

    assert_eq!(registry.resolve("/counter"), Some(1));
    assert_eq!(registry.resolve("/counter"), Some(2));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_registry_remove_contains_clear() {
    let mut registry: RouteRegistry<String> = RouteRegistry::new();
    registry.register("/b", || "b".to_string()).unwrap();
    registry.register("/a", || "a".to_string()).unwrap();
    registry.register("/c", || "c".to_string()).unwrap();

    assert_eq!(registry.all_paths(), vec!["/a", "/b", "/c"]);
    assert!(registry.contains("/b"));

    assert!(registry.remove("/b"));
    assert!(!registry.remove("/b"));
    assert!(!registry.contains("/b"));
    assert_eq!(registry.len(), 2);

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.all_paths().is_empty());
}

#[test]
fn test_registry_rejects_empty_path() {
    let mut registry: RouteRegistry<String> = RouteRegistry::new();
    assert_eq!(
        registry.register("", || String::new()),
        Err(NavError::EmptyPath)
    );
}

#[test]
fn test_registry_is_shareable_behind_a_lock() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RouteRegistry<Markup>>();
    assert_send_sync::<NavigationCoordinator>();
}

// ============================================================================
// Coordinator
// ============================================================================

#[test]
fn test_coordinator_replaces_current_route() {
    let coordinator = NavigationCoordinator::new();
    assert!(coordinator.current_route().is_none());

    coordinator.navigate(Route::new("/first"));
    coordinator.navigate_to("/second", None, PresentationStyle::Sheet);

    let current = coordinator.current_route().unwrap();
    assert_eq!(current.path(), "/second");
    assert_eq!(current.source(), RouteSource::InApp);
    assert_eq!(current.presentation(), PresentationStyle::Sheet);

    coordinator.reset();
    assert!(coordinator.current_route().is_none());
}

#[test]
fn test_coordinator_navigate_to_with_params() {
    let coordinator = NavigationCoordinator::new();
    let params = RouteParams::from([("id".to_string(), ParamValue::Int(7))]);

    coordinator.navigate_to("/item", Some(params), PresentationStyle::Push);
    assert_eq!(coordinator.current_route().unwrap().int("id"), Some(7));
}

#[tokio::test]
async fn test_coordinator_notifies_observers() {
    let coordinator = NavigationCoordinator::new();
    let mut watcher = coordinator.subscribe();

    let route = Route::new("/checkout").with_presentation(PresentationStyle::FullScreen);
    coordinator.navigate(route.clone());

    watcher.changed().await.unwrap();
    assert_eq!(watcher.borrow_and_update().clone(), Some(route.clone()));

    // Same route again still counts as a navigation
    coordinator.navigate(route);
    assert!(watcher.has_changed().unwrap());
}

#[test]
fn test_destination_view_falls_back_to_not_found() {
    let coordinator = NavigationCoordinator::new();
    let mut registry: RouteRegistry<Markup> = RouteRegistry::new();
    registry
        .register("/about", || html! { h1 { "About" } })
        .unwrap();

    let found = coordinator.destination_view(&registry, &Route::new("/about"));
    assert_eq!(found.into_string(), "<h1>About</h1>");

    let missing = coordinator.destination_view(&registry, &Route::new("/nowhere"));
    assert!(missing.into_string().contains("Route not found: /nowhere"));
}

// ============================================================================
// Features & Context
// ============================================================================

struct HotelFeature;

impl RoutableFeature<String> for HotelFeature {
    fn name(&self) -> &str {
        "hotel"
    }

    fn routes(&self) -> Vec<(String, RouteFactory<String>)> {
        vec![
            ("/hotel/list".to_string(), route_factory(|| "Hotels".to_string())),
            ("/hotel/details".to_string(), route_factory(|| "Hotel".to_string())),
        ]
    }
}

struct ConflictingFeature;

impl RoutableFeature<String> for ConflictingFeature {
    fn routes(&self) -> Vec<(String, RouteFactory<String>)> {
        vec![("/hotel/list".to_string(), route_factory(|| "Other".to_string()))]
    }
}

#[test]
fn test_register_features() {
    let mut nav: NavigationContext<String> = NavigationContext::default();
    let count = nav.register_features(&[&HotelFeature]).unwrap();

    assert_eq!(count, 2);
    assert_eq!(nav.registry().all_paths(), vec!["/hotel/details", "/hotel/list"]);
}

#[test]
fn test_register_features_reports_conflict() {
    let mut nav: NavigationContext<String> = NavigationContext::default();
    let err = nav
        .register_features(&[&HotelFeature, &ConflictingFeature])
        .unwrap_err();

    assert_eq!(err, NavError::DuplicateRoute("/hotel/list".to_string()));
    assert_eq!(nav.registry().resolve("/hotel/list"), Some("Hotels".to_string()));
}

#[test]
fn test_context_open_url_navigates() {
    init_tracing();
    let mut nav: NavigationContext<String> = NavigationContext::default();
    nav.register_features(&[&HotelFeature]).unwrap();

    let route = nav.open_url("bookify://hotel/details?id=101").unwrap();
    assert_eq!(nav.coordinator().current_route(), Some(route.clone()));
    assert_eq!(nav.destination(&route), "Hotel");
    assert_eq!(nav.current_destination(), Some("Hotel".to_string()));
}

#[test]
fn test_context_ignored_url_leaves_current_route() {
    let nav: NavigationContext<String> = NavigationContext::default();
    nav.coordinator().navigate(Route::new("/home"));

    assert!(nav.open_url("bookify://").is_none());
    assert_eq!(nav.coordinator().current_route().unwrap().path(), "/home");
}

#[test]
fn test_context_uses_configured_schemes() {
    let config: NavigatorConfig = toml::from_str("[deeplink]\nschemes = [\"bookify\"]").unwrap();
    let nav: NavigationContext<String> = NavigationContext::new(config);

    assert!(nav.open_url("https://hotel/details").is_none());
    assert!(nav.open_url("bookify://hotel/details").is_some());
}

#[test]
fn test_context_reset() {
    let mut nav: NavigationContext<String> = NavigationContext::default();
    nav.register_features(&[&HotelFeature]).unwrap();
    nav.open_url("bookify://hotel/list");

    nav.reset();
    assert!(nav.registry().is_empty());
    assert!(nav.coordinator().current_route().is_none());
    assert_eq!(nav.current_destination(), None);
}
