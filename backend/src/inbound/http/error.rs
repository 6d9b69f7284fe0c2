//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the `{success:false, ...}` envelope
//! and matching status codes.

use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::debug;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned when a request body cannot be decoded.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Failure envelope.
///
/// Field validation failures carry `errors`; every other failure carries a
/// single `message`.
#[derive(Debug, Serialize)]
struct FailureBody<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [String]>,
}

impl<'a> From<&'a Error> for FailureBody<'a> {
    fn from(error: &'a Error) -> Self {
        if error.errors().is_empty() {
            Self {
                success: false,
                message: Some(error.message()),
                errors: None,
            }
        } else {
            Self {
                success: false,
                message: None,
                errors: Some(error.errors()),
            }
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(FailureBody::from(self))
    }
}

/// Error handler for `web::JsonConfig` rendering the failure envelope.
pub fn json_body_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected JSON request body");
    Error::invalid_request(INVALID_BODY_MESSAGE).into()
}

/// Error handler for `web::FormConfig` rendering the failure envelope.
pub fn form_body_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected form request body");
    Error::invalid_request(INVALID_BODY_MESSAGE).into()
}
