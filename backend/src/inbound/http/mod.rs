//! HTTP inbound adapter exposing REST endpoints.

pub mod ack;
pub mod body;
pub mod contact;
pub mod error;
pub mod favourites;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register the body error handlers and every API route.
///
/// Callers provide `web::Data<HttpState>` and `web::Data<HealthState>`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use travel_backend::inbound::http::{configure, health::HealthState};
/// use travel_backend::test_support::in_memory_http_state;
///
/// let (state, _, _) = in_memory_http_state();
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_body_error))
        .app_data(web::FormConfig::default().error_handler(error::form_body_error))
        .service(health::root)
        .service(health::ready)
        .service(health::live)
        .service(contact::submit_contact)
        .service(contact::list_submissions)
        .service(favourites::add_favourite)
        .service(favourites::list_favourites)
        .service(favourites::delete_favourite);
}
