//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error() -> Error {
    Error::internal("예상치 못한 에러가 발생했습니다. 관리자에게 문의해 주세요.")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "sql": "select * from products" }))
}

async fn envelope_of(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("envelope is JSON");
    (status, header, body)
}

#[rstest]
#[case(Error::invalid_request("x"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("x"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("x"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("x"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("x"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("x"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn envelope_has_numeric_status_and_code() {
    let error = Error::conflict("이미 등록된 상품입니다.").with_details(json!({ "name": "A" }));

    let (status, header, body) = envelope_of(&error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(header.is_none());
    assert_eq!(
        body,
        json!({
            "status": 409,
            "message": "이미 등록된 상품입니다.",
            "code": "conflict",
            "details": { "name": "A" },
        })
    );
}

#[rstest]
#[actix_web::test]
async fn internal_errors_drop_details_but_keep_trace_id(internal_error: Error) {
    let (status, header, body) = envelope_of(&internal_error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["status"], json!(500));
    assert_eq!(body["traceId"], json!(TRACE_ID));
    assert!(body.get("details").is_none());
}

#[rstest]
#[case(Locale::Ko, "요청 본문을 해석할 수 없습니다.")]
#[case(Locale::En, "Request body could not be parsed.")]
fn malformed_bodies_become_localised_invalid_requests(
    #[case] locale: Locale,
    #[case] expected: &str,
) {
    let error = json_error(JsonPayloadError::ContentType, locale);
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), expected);
}

#[rstest]
#[actix_web::test]
async fn json_error_handler_answers_in_the_configured_locale() {
    let handler = json_error_handler(Locale::En);
    let request = actix_web::test::TestRequest::default().to_http_request();
    let response = handler(JsonPayloadError::ContentType, &request).error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body())
        .await
        .expect("body bytes");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["status"], json!(400));
    assert_eq!(body["message"], "Request body could not be parsed.");
    assert_eq!(body["details"]["code"], "malformed_body");
}
