//! Tests for the department HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::inbound::http::test_utils::{MockPorts, in_memory_state, test_app};

#[rstest]
#[actix_web::test]
async fn rename_scenario_round_trips_over_http() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/Department")
            .set_json(json!({"name": "HR"}))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let location = created
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_owned();

    let renamed: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri(&location)
            .set_json(json!({"name": "People"}))
            .to_request(),
    )
    .await;
    assert_eq!(renamed["name"], "People");

    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri(&location).to_request(),
    )
    .await;
    assert_eq!(fetched, renamed);
}

#[rstest]
#[actix_web::test]
async fn duplicate_name_differing_in_case_answers_409() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    for (name, expected) in [("HR", StatusCode::CREATED), ("hr", StatusCode::CONFLICT)] {
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/Department")
                .set_json(json!({"name": name}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
    }
}

#[rstest]
#[case(json!({}), "One or more validation errors occurred.")]
#[case(json!({"name": null}), "One or more validation errors occurred.")]
#[case(json!({"name": ""}), "Department name is required.")]
#[actix_web::test]
async fn invalid_bodies_answer_400(#[case] body: Value, #[case] message: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/Department")
            .set_json(body)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(res).await;
    assert_eq!(payload["message"], message);
}

#[rstest]
#[actix_web::test]
async fn unknown_id_answers_404_for_every_operation() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let requests = [
        actix_test::TestRequest::get().uri("/api/Department/ghost"),
        actix_test::TestRequest::put()
            .uri("/api/Department/ghost")
            .set_json(json!({"name": "Ops"})),
        actix_test::TestRequest::delete().uri("/api/Department/ghost"),
    ];

    for request in requests {
        let res = actix_test::call_service(&app, request.to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let payload: Value = actix_test::read_body_json(res).await;
        assert_eq!(payload["message"], "Department with ID ghost not found.");
    }
}

#[rstest]
#[actix_web::test]
async fn service_conflict_maps_to_409_with_details() {
    let mut ports = MockPorts::default();
    ports
        .departments
        .expect_update_department()
        .times(1)
        .return_once(|_, _| {
            Err(Error::conflict("Department with this name already exists."))
        });
    let app = actix_test::init_service(test_app(ports.into())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/Department/1")
            .set_json(json!({"name": "IT"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[rstest]
#[actix_web::test]
async fn empty_list_is_an_empty_array() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let body: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/Department").to_request(),
    )
    .await;
    assert_eq!(body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn lower_case_routes_reach_the_same_records() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/department")
            .set_json(json!({"name": "Legal"}))
            .to_request(),
    )
    .await;
    let id = created["id"].as_str().expect("id assigned");

    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/DEPARTMENT/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched, created);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/department/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}
