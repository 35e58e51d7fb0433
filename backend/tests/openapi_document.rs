//! The published OpenAPI document covers every route.

use rstest::rstest;
use userlab::ApiDoc;
use utoipa::OpenApi;

#[rstest]
fn document_serialises_with_expected_operations() {
    let doc = ApiDoc::openapi();
    let json = doc.to_json().expect("document serialises");
    for operation in [
        "createUser",
        "listUsers",
        "getUser",
        "createExternalUser",
        "aliasDemo",
        "welcome",
        "getRoadmap",
        "getStage",
    ] {
        assert!(json.contains(operation), "missing operation {operation}");
    }
}

#[rstest]
fn validation_failures_are_documented_as_422() {
    let doc = ApiDoc::openapi();
    let create_user = doc
        .paths
        .paths
        .get("/users")
        .and_then(|item| item.post.as_ref())
        .expect("POST /users");
    assert!(create_user.responses.responses.contains_key("422"));
}
