//! Partner record aliasing over HTTP.

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::{Value, json};

mod support;

use support::{call, init_app};

#[rstest]
#[case(json!({ "id": 1, "name": "Alice" }))]
#[case(json!({ "id": 1, "fullName": "Alice" }))]
#[case(json!({ "id": "1", "name": "Alice" }))]
#[actix_web::test]
async fn either_key_normalises_to_the_same_wire_output(#[case] body: Value) {
    let app = init_app().await;
    let reply = call(&app, TestRequest::post().uri("/external-users").set_json(body)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!({ "id": 1, "name": "Alice" }));
}

#[rstest]
#[actix_web::test]
async fn internal_view_uses_full_name_key() {
    let app = init_app().await;
    let reply = call(
        &app,
        TestRequest::post()
            .uri("/external-users?view=internal")
            .set_json(json!({ "id": 1, "name": "Alice" })),
    )
    .await;
    assert_eq!(reply.body, json!({ "id": 1, "fullName": "Alice" }));
}

#[rstest]
#[actix_web::test]
async fn alias_demo_is_reachable_despite_user_id_route() {
    let app = init_app().await;
    let reply = call(&app, TestRequest::get().uri("/users/alias-demo")).await;
    assert_eq!(reply.status, StatusCode::OK);
    insta::assert_json_snapshot!(reply.body["by_alias"], @r#"
    {
      "id": 1,
      "name": "Bob"
    }
    "#);
    assert_eq!(reply.body["regular"], json!({ "id": 1, "fullName": "Bob" }));
}

#[rstest]
#[case(json!({ "id": 1.5, "name": "Alice" }), "id")]
#[case(json!({ "id": true, "name": "Alice" }), "id")]
#[case(json!({ "id": 1, "name": ["Alice"] }), "name")]
#[actix_web::test]
async fn wrongly_typed_fields_are_type_mismatches(#[case] body: Value, #[case] field: &str) {
    let app = init_app().await;
    let reply = call(&app, TestRequest::post().uri("/external-users").set_json(body)).await;
    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    let violation = &reply.body["details"]["violations"][0];
    assert_eq!(violation["kind"], "type_mismatch");
    assert_eq!(violation["field"], field);
}
