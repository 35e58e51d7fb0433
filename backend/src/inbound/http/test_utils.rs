//! Test helpers for inbound HTTP components.

use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::{App, test, web};
use serde_json::Value;

use crate::Trace;
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::test_support::memory_state;

/// Status, headers and JSON body of a test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Application exposing every API route over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}

/// Call an initialised service and decode the JSON body; empty bodies decode
/// to `null`.
pub async fn call<S>(app: &S, req: test::TestRequest) -> TestResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Send a single request to a fresh application over [`memory_state`].
pub async fn send(req: test::TestRequest) -> TestResponse {
    let app = test::init_service(test_app(memory_state())).await;
    call(&app, req).await
}
