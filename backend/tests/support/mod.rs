//! Shared helpers for HTTP integration tests.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::{App, test, web};
use serde_json::Value;
use userlab::Trace;
use userlab::inbound::http::configure;
use userlab::test_support::memory_state;

/// Status, headers and decoded JSON body of a response.
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Initialise an application over a fresh in-memory store.
pub async fn init_app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(memory_state()))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

/// Call the application and decode the body as JSON.
pub async fn call<S>(app: &S, req: test::TestRequest) -> Reply
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
    Reply {
        status,
        headers,
        body,
    }
}
