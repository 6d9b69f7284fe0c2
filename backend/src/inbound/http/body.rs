//! Request body extraction accepting JSON or URL-encoded forms.

use actix_web::dev::Payload;
use actix_web::{Either, FromRequest, HttpMessage, HttpRequest, http::header, web};
use futures_util::future::{LocalBoxFuture, ready};
use serde::de::DeserializeOwned;

/// Body extractor accepting `application/json` or
/// `application/x-www-form-urlencoded` payloads of the same shape.
///
/// Decoding failures surface through the `JsonConfig` error handler, which
/// renders `400 {success:false, message:'Invalid request body.'}`.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

/// Unwrap whichever representation was supplied.
pub fn into_payload<T>(body: JsonOrForm<T>) -> T {
    match body {
        Either::Left(web::Json(payload)) => payload,
        Either::Right(web::Form(payload)) => payload,
    }
}

/// Submission body for the write endpoints.
///
/// An empty body, or one whose content type is neither JSON nor a form,
/// yields `T::default()` so the handler reports missing fields. Declared
/// JSON or form bodies that fail to decode are rejected as [`JsonOrForm`]
/// rejects them.
#[derive(Debug)]
pub struct RequestBody<T>(pub T);

impl<T> RequestBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn is_decodable(req: &HttpRequest) -> bool {
    let declared_empty = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim() == "0");
    if declared_empty {
        return false;
    }

    let content_type = req.content_type();
    content_type.eq_ignore_ascii_case("application/json")
        || content_type.eq_ignore_ascii_case("application/x-www-form-urlencoded")
        || content_type.to_ascii_lowercase().ends_with("+json")
}

impl<T> FromRequest for RequestBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !is_decodable(req) {
            return Box::pin(ready(Ok(Self(T::default()))));
        }

        let body = JsonOrForm::<T>::from_request(req, payload);
        Box::pin(async move {
            body.await
                .map(|body| Self(into_payload(body)))
                .map_err(Into::into)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    #[case(TestRequest::post(), false)]
    #[case(TestRequest::post().insert_header(("content-type", "text/plain")), false)]
    #[case(
        TestRequest::post()
            .insert_header(("content-type", "application/json"))
            .insert_header(("content-length", "0")),
        false
    )]
    #[case(TestRequest::post().insert_header(("content-type", "application/json")), true)]
    #[case(
        TestRequest::post().insert_header(("content-type", "application/json; charset=utf-8")),
        true
    )]
    #[case(
        TestRequest::post().insert_header(("content-type", "application/x-www-form-urlencoded")),
        true
    )]
    #[case(
        TestRequest::post().insert_header(("content-type", "application/merge-patch+json")),
        true
    )]
    fn decodable_bodies_are_recognised(#[case] req: TestRequest, #[case] expected: bool) {
        assert_eq!(is_decodable(&req.to_http_request()), expected);
    }
}
