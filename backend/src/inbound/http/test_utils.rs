//! Test helpers for inbound HTTP components.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};

use crate::inbound::http::error::{form_body_error, json_body_error};
use crate::inbound::http::state::HttpState;

/// Build an application with the body error handlers and the given state.
///
/// Callers register the handlers under test on the returned `App`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_body_error))
        .app_data(web::FormConfig::default().error_handler(form_body_error))
}
