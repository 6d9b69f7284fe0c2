//! Contact form HTTP handlers.
//!
//! ```text
//! POST /contact
//! GET  /submissions
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Contact, ContactDraft, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::ack::AckResponse;
use crate::inbound::http::body::RequestBody;
use crate::inbound::http::schemas::{ErrorSchema, ValidationErrorSchema};
use crate::inbound::http::state::HttpState;

/// Acknowledgement for a stored submission.
pub const CONTACT_THANKS_MESSAGE: &str = "Thank you for contacting us!";

/// Contact form payload. Absent fields are reported by validation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Ada")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "When is the best time to visit Lisbon?")]
    pub message: Option<String>,
}

/// Stored submission as listed by `GET /submissions`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// RFC 3339 timestamp assigned by the store.
    pub submitted_at: String,
}

impl From<Contact> for ContactResponse {
    fn from(value: Contact) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            email: value.email,
            message: value.message,
            submitted_at: value.submitted_at.to_rfc3339(),
        }
    }
}

fn parse_contact_request(payload: ContactRequest) -> Result<ContactDraft, Error> {
    ContactDraft::validate(
        payload.name.as_deref(),
        payload.email.as_deref(),
        payload.message.as_deref(),
    )
    .map_err(|violations| {
        Error::validation(violations.iter().map(ToString::to_string).collect())
    })
}

/// Validate and store a contact submission.
#[utoipa::path(
    post,
    path = "/contact",
    description = "Accepts JSON or URL-encoded form bodies. Every violated rule is reported.",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submission stored", body = AckResponse),
        (status = 400, description = "Validation failed", body = ValidationErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["contact"],
    operation_id = "submitContact"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    body: RequestBody<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_contact_request(body.into_inner())?;
    state.contacts.submit(draft).await?;
    Ok(HttpResponse::Ok().json(AckResponse::ok(CONTACT_THANKS_MESSAGE)))
}

/// List every submission, newest first.
#[utoipa::path(
    get,
    path = "/submissions",
    responses(
        (status = 200, description = "Submissions, newest first", body = [ContactResponse]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["contact"],
    operation_id = "listSubmissions"
)]
#[get("/submissions")]
pub async fn list_submissions(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ContactResponse>>> {
    let contacts = state.contacts_query.list_submissions().await?;
    Ok(web::Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

#[cfg(test)]
#[path = "contact_tests.rs"]
mod tests;
