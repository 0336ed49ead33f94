//! Tests for the create_ship endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use starport::{controller::ship::create_ship, model::ship::ShipDto};

use super::*;

/// Expect 200 OK with the persisted ship and its derived rating
#[tokio::test]
async fn success_with_created_ship() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let result = create_ship(State(test.app_state()), Json(mock_payload())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let ship: ShipDto = serde_json::from_slice(&bytes).unwrap();

    assert!(ship.id > 0);
    assert_eq!(ship.name, "Falcon");
    assert_eq!(ship.rating, 2.0);

    Ok(())
}

/// Expect 400 BAD REQUEST for a payload missing required fields
#[tokio::test]
async fn bad_request_for_incomplete_payload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let mut payload = mock_payload();
    payload.planet = None;

    let result = create_ship(State(test.app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 BAD REQUEST for an out-of-range speed
#[tokio::test]
async fn bad_request_for_out_of_range_speed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let mut payload = mock_payload();
    payload.speed = Some(1.5);

    let result = create_ship(State(test.app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 INTERNAL SERVER ERROR when the ship table is missing
#[tokio::test]
async fn error_when_table_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_ship(State(test.app_state()), Json(mock_payload())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
