//! Tests for the edit_ship endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use starport::{
    controller::ship::edit_ship,
    model::ship::{ShipDto, ShipPayloadDto},
};

use super::*;

/// Expect 200 OK with the recomputed rating after a speed-only edit
#[tokio::test]
async fn success_with_partial_edit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_table()
        .with_ship(mock_ship("Falcon"))
        .build()
        .await?;

    let payload = ShipPayloadDto {
        speed: Some(0.8),
        ..Default::default()
    };

    let result = edit_ship(State(test.app_state()), Path("1".to_string()), Json(payload)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let ship: ShipDto = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(ship.name, "Falcon");
    assert_eq!(ship.speed, 0.8);
    assert_eq!(ship.rating, 3.2);

    Ok(())
}

/// Expect 404 NOT FOUND when editing an unknown ID
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let result = edit_ship(
        State(test.app_state()),
        Path("42".to_string()),
        Json(ShipPayloadDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 BAD REQUEST for an out-of-range incoming field
#[tokio::test]
async fn bad_request_for_out_of_range_field() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_table()
        .with_ship(mock_ship("Falcon"))
        .build()
        .await?;

    let payload = ShipPayloadDto {
        crew_size: Some(10_000),
        ..Default::default()
    };

    let result = edit_ship(State(test.app_state()), Path("1".to_string()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 BAD REQUEST for a malformed ID
#[tokio::test]
async fn bad_request_for_malformed_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let result = edit_ship(
        State(test.app_state()),
        Path("0".to_string()),
        Json(ShipPayloadDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
