//! Tests for favourites HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ErrorCode;
use crate::inbound::http::test_utils::test_app;
use crate::test_support::in_memory_http_state;

macro_rules! favourites_app {
    ($state:expr) => {
        actix_test::init_service(
            test_app($state)
                .service(add_favourite)
                .service(list_favourites)
                .service(delete_favourite),
        )
        .await
    };
}

fn add_request(body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().uri("/favourites").set_json(body)
}

#[rstest]
#[case(json!({}))]
#[case(json!({"name": "Paris"}))]
#[case(json!({"description": "City of lights"}))]
#[case(json!({"name": "", "description": "City of lights"}))]
#[actix_web::test]
async fn missing_fields_are_rejected_without_writing(#[case] body: Value) {
    let (state, _, favourites) = in_memory_http_state();
    let app = favourites_app!(state);

    let res = actix_test::call_service(&app, add_request(body).to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"success": false, "message": "Name and description are required."})
    );
    assert!(favourites.is_empty());
}

#[actix_web::test]
async fn bare_post_reports_missing_fields() {
    let (state, _, favourites) = in_memory_http_state();
    let app = favourites_app!(state);

    let req = actix_test::TestRequest::post().uri("/favourites").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Name and description are required."));
    assert!(favourites.is_empty());
}

#[actix_web::test]
async fn whitespace_only_description_is_stored() {
    let (state, _, favourites) = in_memory_http_state();
    let app = favourites_app!(state);

    let req = add_request(json!({"name": "Paris", "description": "   "})).to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(favourites.count_named("Paris"), 1);
}

#[actix_web::test]
async fn duplicate_name_conflicts_and_keeps_one_record() {
    let (state, _, favourites) = in_memory_http_state();
    let app = favourites_app!(state);
    let paris = json!({"name": "Paris", "description": "City of lights"});

    let first = actix_test::call_service(&app, add_request(paris.clone()).to_request()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(first).await;
    assert_eq!(body, json!({"success": true, "message": FAVOURITE_ADDED_MESSAGE}));

    let second = actix_test::call_service(&app, add_request(paris).to_request()).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(second).await;
    assert_eq!(body["message"], json!("This place is already in your favourites."));

    assert_eq!(favourites.count_named("Paris"), 1);
}

#[actix_web::test]
async fn form_encoded_favourite_is_accepted() {
    let (state, _, favourites) = in_memory_http_state();
    let app = favourites_app!(state);

    let req = actix_test::TestRequest::post()
        .uri("/favourites")
        .set_form([("name", "Kyoto"), ("description", "Temples")])
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(favourites.count_named("Kyoto"), 1);
}

#[actix_web::test]
async fn listing_is_newest_first_and_delete_removes() {
    let (state, _, favourites) = in_memory_http_state();
    let app = favourites_app!(state);

    for name in ["Lisbon", "Oslo"] {
        let res = actix_test::call_service(
            &app,
            add_request(json!({"name": name, "description": "Trip"})).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let listed: Vec<FavouriteResponse> = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/favourites").to_request(),
    )
    .await;
    let names: Vec<&str> = listed.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Oslo", "Lisbon"]);

    let uri = format!("/favourites/{}", listed[0].id);
    let res = actix_test::call_service(&app, actix_test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"success": true, "message": FAVOURITE_DELETED_MESSAGE}));

    assert_eq!(favourites.len(), 1);
    assert_eq!(favourites.count_named("Oslo"), 0);
}

#[actix_web::test]
async fn deleting_unknown_id_still_succeeds() {
    let (state, _, _) = in_memory_http_state();
    let app = favourites_app!(state);

    let uri = format!("/favourites/{}", uuid::Uuid::new_v4());
    let res = actix_test::call_service(&app, actix_test::TestRequest::delete().uri(&uri).to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn deleting_malformed_id_reports_server_error() {
    let (state, _, _) = in_memory_http_state();
    let app = favourites_app!(state);

    let req = actix_test::TestRequest::delete()
        .uri("/favourites/not-a-uuid")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"success": false, "message": "Server error while deleting favourite."})
    );
}

#[rstest]
#[case("POST")]
#[case("GET")]
#[actix_web::test]
async fn store_outage_maps_to_operation_message(#[case] method: &str) {
    let (state, _, favourites) = in_memory_http_state();
    favourites.set_unavailable(true);
    let app = favourites_app!(state);

    let (req, expected) = match method {
        "POST" => (
            add_request(json!({"name": "Paris", "description": "City"})),
            "Server error while saving favourite.",
        ),
        _ => (
            actix_test::TestRequest::get().uri("/favourites"),
            "Server error while fetching favourites.",
        ),
    };
    let res = actix_test::call_service(&app, req.to_request()).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], json!(expected));
}

#[rstest]
fn parse_favourite_id_maps_to_internal_error() {
    let err = parse_favourite_id("42").expect_err("malformed");
    assert_eq!(err.code(), ErrorCode::InternalError);
}
