//! HTTP adapter mapping for domain errors.
//!
//! Every failure leaves the service as the same envelope:
//! `{ "status": <number>, "message", "code", "traceId"?, "details"? }`.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::domain::{Error, ErrorCode, Locale, Message, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Wire shape of an error response.
#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    status: u16,
    #[serde(flatten)]
    error: &'a Error,
}

/// Internal errors keep their (already generic) message but lose details.
fn redact_if_internal(error: &Error) -> Error {
    if !matches!(error.code(), ErrorCode::InternalError) {
        return error.clone();
    }
    let redacted = Error::internal(error.message());
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        let body = redact_if_internal(self);
        builder.json(ErrorEnvelope {
            status: status.as_u16(),
            error: &body,
        })
    }
}

/// Invalid-request error for a body that is not parseable JSON.
pub fn malformed_body(locale: Locale) -> Error {
    Error::invalid_request(locale.text(Message::MalformedBody))
        .with_details(json!({ "code": "malformed_body" }))
}

/// Map JSON body extraction failures (bad syntax, wrong content type, size
/// limit) into the invalid-request envelope.
pub fn json_error(err: JsonPayloadError, locale: Locale) -> Error {
    warn!(error = %err, "rejected request body");
    malformed_body(locale)
}

/// `JsonConfig` error handler bound to `locale`.
pub fn json_error_handler(
    locale: Locale,
) -> impl Fn(JsonPayloadError, &HttpRequest) -> actix_web::Error + Send + Sync + 'static {
    move |err, _req| json_error(err, locale).into()
}

#[cfg(test)]
mod tests;
