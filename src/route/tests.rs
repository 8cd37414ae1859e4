use super::*;
use crate::argument::{BooleanType, StringType};
use crate::host::HostResponse;
use http::Method;

#[test]
fn test_path_gains_leading_slash() {
    let route = Route::new(Method::GET, "without");
    assert_eq!(route.get_route(), "/without");
}

#[test]
fn test_path_normalization_is_idempotent_for_plain_paths() {
    let route = Route::new(Method::GET, "/with");
    assert_eq!(route.get_route(), "/with");
}

#[test]
fn test_curly_tokens_rewrite_to_named_capture_groups() {
    let route = Route::new(Method::GET, "curlies/{a}/{b}");
    assert_eq!(
        route.get_route(),
        "/curlies/(?P<a>[@a-zA-Z0-9&.?:\\-_=#]+)/(?P<b>[@a-zA-Z0-9&.?:\\-_=#]+)"
    );
}

#[test]
fn test_colon_tokens_rewrite_to_named_capture_groups() {
    let route = Route::new(Method::GET, "named/:a");
    assert_eq!(route.get_route(), "/named/(?P<a>[@a-zA-Z0-9&.?:\\-_=#]+)");
}

#[test]
fn test_full_patterns_pass_through_untouched() {
    let pattern = r"^/items/(?P<id>\d+)$";
    let route = Route::new(Method::GET, pattern);
    assert_eq!(route.get_route(), pattern);
}

#[test]
fn test_rewritten_paths_are_not_rewritten_again() {
    let once = Route::new(Method::GET, "named/:a");
    let twice = Route::new(Method::GET, once.get_route());
    assert_eq!(once.get_route(), twice.get_route());
}

#[test]
fn test_arguments_replace_by_key_and_auth_appends() {
    let route = Route::new(Method::GET, "/items")
        .argument(BooleanType::new("id"))
        .argument(StringType::new("id"))
        .authentication(|_| true)
        .authentication(|_| false);

    assert_eq!(route.get_arguments().len(), 1);
    assert_eq!(
        route.get_arguments()["id"].get_type(),
        crate::argument::ArgumentType::String
    );
    assert_eq!(route.get_authentication().len(), 2);
}

#[test]
fn test_with_method_keeps_everything_but_the_method() {
    let route = Route::new(Method::GET, "/items")
        .namespace("acme/v1")
        .argument(StringType::new("id"))
        .authentication(|_| true)
        .callback(|_| HostResponse::no_content());

    let cloned = route.with_method(Method::DELETE);
    assert_eq!(cloned.get_method(), &Method::DELETE);
    assert_eq!(cloned.get_route(), route.get_route());
    assert_eq!(cloned.get_namespace(), "acme/v1");
    assert_eq!(cloned.get_arguments().len(), 1);
    assert_eq!(cloned.get_authentication().len(), 1);
    assert!(cloned.has_callback());
}

#[test]
fn test_group_declares_one_route_per_method() {
    let group = RouteGroup::new("acme/v1", "/items")
        .get(|_| HostResponse::ok(serde_json::json!([])))
        .post(|_| HostResponse::new(201));

    assert!(group.has_routes());
    assert_eq!(group.get_routes().len(), 2);
    assert!(group.method_exists("get"));
    assert!(group.method_exists("POST"));
    assert!(!group.method_exists("delete"));

    let get = group.route_for(&Method::GET).unwrap();
    assert_eq!(get.get_namespace(), "acme/v1");
    assert_eq!(get.get_route(), "/items");
    assert!(get.has_callback());
}

#[test]
fn test_group_member_configuration_stays_per_route() {
    let group = RouteGroup::new("acme/v1", "/items")
        .get_with(
            |_| HostResponse::no_content(),
            |route| route.argument(StringType::new("id")).authentication(|_| true),
        )
        .post(|_| HostResponse::no_content());

    let get = group.route_for(&Method::GET).unwrap();
    let post = group.route_for(&Method::POST).unwrap();
    assert_eq!(get.get_arguments().len(), 1);
    assert_eq!(get.get_authentication().len(), 1);
    assert!(post.get_arguments().is_empty());
    assert!(post.get_authentication().is_empty());
}

#[test]
fn test_factory_stamps_namespace_on_routes_and_groups() {
    let factory = RouteFactory::new("acme/v1");

    let route = factory.get("/items/:id", |_| HostResponse::no_content());
    assert_eq!(route.get_namespace(), "acme/v1");
    assert_eq!(route.get_method(), &Method::GET);
    assert!(route.has_callback());

    let group = factory.group_builder("/items", |group| {
        group.put(|_| HostResponse::no_content())
    });
    assert_eq!(group.get_namespace(), "acme/v1");
    assert!(group.method_exists("put"));
}

#[test]
fn test_supported_methods_are_the_five_verbs() {
    assert_eq!(
        *SUPPORTED_METHODS,
        [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE
        ]
    );
}
