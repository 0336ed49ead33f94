//! Tests for the get_ship endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use starport::{controller::ship::get_ship, model::ship::ShipDto};

use super::*;

/// Expect 200 OK with the stored ship
#[tokio::test]
async fn success_with_stored_ship() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_table()
        .with_ship(mock_ship("Falcon"))
        .build()
        .await?;

    let result = get_ship(State(test.app_state()), Path("1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let ship: ShipDto = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(ship.id, 1);
    assert_eq!(ship.name, "Falcon");
    assert_eq!(ship.prod_date, prod_date(3000).and_utc().timestamp_millis());

    Ok(())
}

/// Expect 404 NOT FOUND for an unknown ID
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let result = get_ship(State(test.app_state()), Path("42".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 BAD REQUEST for malformed IDs
#[tokio::test]
async fn bad_request_for_malformed_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    for raw in ["0", "  0  ", "falcon", ""] {
        let result = get_ship(State(test.app_state()), Path(raw.to_string())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "ID {raw:?}");
    }

    Ok(())
}
