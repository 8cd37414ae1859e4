use http::Method;
use restroute::argument::{ArgumentBuilder, BooleanType, IntegerType, StringType};
use restroute::host::{HostRequest, HostResponse};
use restroute::registration::{HostRoute, RouteHost, RouteManager, RouteRegistrar};
use restroute::route::{Route, RouteBuilder, RouteGroup};
use restroute::RouteError;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Host adapter that records everything it is handed.
#[derive(Default)]
struct RecordingHost {
    routes: Vec<HostRoute>,
}

impl RouteHost for RecordingHost {
    fn register(&mut self, route: HostRoute) {
        self.routes.push(route);
    }
}

fn noop_handler(_request: &HostRequest) -> HostResponse {
    HostResponse::no_content()
}

#[test]
fn test_from_route_defers_until_execute() {
    let mut manager = RouteManager::new();
    manager.from_route(
        Route::new(Method::GET, "items")
            .namespace("acme/v1")
            .callback(noop_handler),
    );
    assert_eq!(manager.len(), 1);

    let mut host = RecordingHost::default();
    let registered = manager.execute(&mut host).unwrap();
    assert_eq!(registered, 1);
    assert!(manager.is_empty());

    let route = &host.routes[0];
    assert_eq!(route.namespace, "acme/v1");
    assert_eq!(route.route, "/items");
    assert_eq!(route.options.methods, "GET");
    assert!(!route.override_existing);

    // Executing again registers nothing; the queue was drained.
    let mut second = RecordingHost::default();
    assert_eq!(manager.execute(&mut second).unwrap(), 0);
    assert!(second.routes.is_empty());
}

#[test]
fn test_registered_args_carry_serialized_schemas() {
    let mut manager = RouteManager::new();
    manager.from_route(
        Route::new(Method::GET, "items")
            .namespace("acme/v1")
            .argument(IntegerType::on("page", |page| page.minimum(1).default(json!(1))))
            .callback(noop_handler),
    );

    let mut host = RecordingHost::default();
    manager.execute(&mut host).unwrap();

    let args = &host.routes[0].options.args;
    let page = args["page"].to_json().unwrap();
    assert_eq!(page, json!({"type": "integer", "minimum": 1, "default": 1}));
}

#[test]
fn test_route_arguments_override_group_arguments_by_key() {
    let group = RouteGroup::new("acme/v1", "items")
        .argument(BooleanType::new("id"))
        .get_with(noop_handler, |route| route.argument(StringType::new("id")))
        .post(noop_handler);

    let mut manager = RouteManager::new();
    manager.from_group(&group).unwrap();

    let mut host = RecordingHost::default();
    manager.execute(&mut host).unwrap();
    assert_eq!(host.routes.len(), 2);

    for route in &host.routes {
        let id = route.options.args["id"].to_json().unwrap();
        match route.options.methods.as_str() {
            // The member route re-declared `id` as a string: route wins.
            "GET" => assert_eq!(id, json!({"type": "string"})),
            // The sibling keeps the group default.
            "POST" => assert_eq!(id, json!({"type": "boolean"})),
            other => panic!("unexpected method {other}"),
        }
    }
}

#[test]
fn test_flattened_routes_inherit_namespace_and_path() {
    let group = RouteGroup::new("acme/v1", "items/{id}")
        .get(noop_handler)
        .delete(noop_handler);

    let mut manager = RouteManager::new();
    manager.from_group(&group).unwrap();

    let mut host = RecordingHost::default();
    manager.execute(&mut host).unwrap();

    for route in &host.routes {
        assert_eq!(route.namespace, "acme/v1");
        assert_eq!(route.route, "/items/(?P<id>[@a-zA-Z0-9&.?:\\-_=#]+)");
    }
    let methods: Vec<&str> = host.routes.iter().map(|r| r.options.methods.as_str()).collect();
    assert_eq!(methods, vec!["GET", "DELETE"]);
}

#[test]
fn test_group_auth_runs_before_route_auth() {
    let calls: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let group_calls = Arc::clone(&calls);
    let route_calls = Arc::clone(&calls);

    let group = RouteGroup::new("acme/v1", "items")
        .authentication(move |_| {
            group_calls.lock().unwrap().push("group");
            true
        })
        .get_with(noop_handler, |route| {
            route.authentication(move |_| {
                route_calls.lock().unwrap().push("route");
                true
            })
        });

    let mut manager = RouteManager::new();
    manager.from_group(&group).unwrap();
    let mut host = RecordingHost::default();
    manager.execute(&mut host).unwrap();

    let permission = &host.routes[0].options.permission_callback;
    assert!(permission(&HostRequest::default()));
    assert_eq!(*calls.lock().unwrap(), vec!["group", "route"]);
}

#[test]
fn test_permission_callback_composition() {
    let registrar = RouteRegistrar::new();

    // Zero callbacks: always allow.
    let open = Route::new(Method::GET, "open").callback(noop_handler);
    assert!(registrar.compose_permission_callback(&open)(&HostRequest::default()));

    // Conjunction short-circuits on the first failure, in order.
    let calls: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&calls);
    let second = Arc::clone(&calls);
    let guarded = Route::new(Method::GET, "guarded")
        .authentication(move |_| {
            first.lock().unwrap().push("first");
            false
        })
        .authentication(move |_| {
            second.lock().unwrap().push("second");
            true
        })
        .callback(noop_handler);
    assert!(!registrar.compose_permission_callback(&guarded)(
        &HostRequest::default()
    ));
    assert_eq!(*calls.lock().unwrap(), vec!["first"]);
}

#[test]
fn test_group_with_handlerless_member_fails_flattening() {
    let group = RouteGroup::new("acme/v1", "items")
        .get(noop_handler)
        .add_route(Route::new(Method::POST, "items").namespace("acme/v1"));

    let mut manager = RouteManager::new();
    let err = manager.from_group(&group).unwrap_err();
    match err {
        RouteError::CallbackNotDefined {
            method,
            namespace,
            route,
        } => {
            assert_eq!(method, "POST");
            assert_eq!(namespace, "acme/v1");
            assert_eq!(route, "/items");
        }
        other => panic!("unexpected error {other}"),
    }
    // Nothing from the failing group was queued.
    assert!(manager.is_empty());
}

#[test]
fn test_unsupported_method_fails_execute() {
    let mut manager = RouteManager::new();
    manager.from_route(Route::new(Method::OPTIONS, "items").callback(noop_handler));

    let mut host = RecordingHost::default();
    let err = manager.execute(&mut host).unwrap_err();
    assert!(matches!(err, RouteError::InvalidHttpMethod(method) if method == "OPTIONS"));
    assert!(host.routes.is_empty());
}

#[test]
fn test_handlerless_route_fails_execute() {
    let mut manager = RouteManager::new();
    manager.from_route(Route::new(Method::GET, "items").namespace("acme/v1"));

    let mut host = RecordingHost::default();
    let err = manager.execute(&mut host).unwrap_err();
    assert!(matches!(err, RouteError::CallbackNotDefined { .. }));
    assert!(host.routes.is_empty());
}

#[test]
fn test_error_messages_identify_the_route() {
    let err = RouteError::CallbackNotDefined {
        method: "GET".to_string(),
        namespace: "acme/v1".to_string(),
        route: "/items".to_string(),
    };
    assert_eq!(err.to_string(), "callback not defined for [GET] acme/v1/items");

    let err = RouteError::InvalidHttpMethod("OPTIONS".to_string());
    assert_eq!(err.to_string(), "OPTIONS is not a supported HTTP method");
}
