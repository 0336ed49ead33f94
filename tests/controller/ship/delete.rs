//! Tests for the delete_ship endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use starport::controller::ship::{delete_ship, get_ship};

use super::*;

/// Expect 200 OK and the ship gone afterwards
#[tokio::test]
async fn success_removes_ship() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_table()
        .with_ship(mock_ship("Falcon"))
        .build()
        .await?;

    let result = delete_ship(State(test.app_state()), Path("1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_ship(State(test.app_state()), Path("1".to_string())).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 NOT FOUND when deleting an unknown ID
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let result = delete_ship(State(test.app_state()), Path("42".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 BAD REQUEST for a malformed ID
#[tokio::test]
async fn bad_request_for_malformed_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let result = delete_ship(State(test.app_state()), Path("falcon".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
