mod create;
mod delete;
mod edit;
mod get;

use starport::model::ship::ShipPayloadDto;
use starport_test_utils::prelude::*;

/// Fully-populated valid payload matching the standard mock ship values.
fn mock_payload() -> ShipPayloadDto {
    ShipPayloadDto {
        name: Some("Falcon".to_string()),
        planet: Some("Earth".to_string()),
        ship_type: Some(entity::ship::ShipType::Transport),
        prod_date: Some(prod_date(3000).and_utc().timestamp_millis()),
        is_used: Some(false),
        speed: Some(0.5),
        crew_size: Some(10),
    }
}
