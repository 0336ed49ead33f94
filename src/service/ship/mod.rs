//! Ship service layer.
//!
//! Business logic for the ship registry: payload validation, derived rating
//! computation, field-wise merge on edit, existence-gated operations, and
//! identifier parsing. Persistence goes through [`ShipRepository`].

pub mod filter;


use chrono::{DateTime, Datelike, NaiveDateTime};
use entity::ship;
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    data::ship::ShipRepository,
    error::{ship::ShipError, Error},
    model::ship::{PageParams, ShipFilterParams, ShipOrder, ShipPayloadDto, SortDirection},
};

const NAME_LEN_MAX: usize = 50;
const YEAR_MIN: i32 = 2800;
const YEAR_MAX: i32 = 3019;
const SPEED_MIN: f64 = 0.01;
const SPEED_MAX: f64 = 0.99;
const CREW_MIN: i32 = 0;
const CREW_MAX: i32 = 9999;

const DEFAULT_PAGE_SIZE: u64 = 3;

/// Service for ship registry operations.
pub struct ShipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipService<'a> {
    /// Creates a new instance of ShipService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of ships matching the filter parameters.
    ///
    /// Defaults: page 0, page size 3, ordered by ID ascending.
    pub async fn list(
        &self,
        filter: &ShipFilterParams,
        page: &PageParams,
    ) -> Result<Vec<ship::Model>, Error> {
        let condition = filter::build_condition(filter)?;

        let order = page.order.unwrap_or(ShipOrder::Id);
        let direction = page.direction.unwrap_or(SortDirection::Asc);
        let page_number = page.page_number.unwrap_or(0);
        let page_size = page.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

        let ship_repository = ShipRepository::new(self.db);

        Ok(ship_repository
            .find_page(
                condition,
                order.column(),
                direction.order(),
                page_number,
                page_size,
            )
            .await?)
    }

    /// Counts all ships matching the filter parameters.
    pub async fn count(&self, filter: &ShipFilterParams) -> Result<u64, Error> {
        let condition = filter::build_condition(filter)?;

        let ship_repository = ShipRepository::new(self.db);
        let ships = ship_repository.find_all(condition).await?;

        Ok(ships.len() as u64)
    }

    /// Creates a ship from a draft payload.
    ///
    /// All required fields must be present and within range; `isUsed` defaults
    /// to false when omitted. The rating is derived server-side before the
    /// ship is persisted.
    pub async fn create(&self, payload: ShipPayloadDto) -> Result<ship::Model, Error> {
        validate_payload(&payload)?;

        let ShipPayloadDto {
            name: Some(name),
            planet: Some(planet),
            ship_type: Some(ship_type),
            prod_date: Some(prod_ms),
            is_used,
            speed: Some(speed),
            crew_size: Some(crew_size),
        } = payload
        else {
            return Err(ShipError::Validation("missing required field".to_string()).into());
        };

        let prod_date = millis_to_datetime(prod_ms)?;
        let is_used = is_used.unwrap_or(false);
        let rating = compute_rating(speed, is_used, prod_date.year());

        let ship = ship::ActiveModel {
            name: ActiveValue::Set(name),
            planet: ActiveValue::Set(planet),
            ship_type: ActiveValue::Set(ship_type),
            prod_date: ActiveValue::Set(prod_date),
            is_used: ActiveValue::Set(is_used),
            speed: ActiveValue::Set(speed),
            crew_size: ActiveValue::Set(crew_size),
            rating: ActiveValue::Set(rating),
            ..Default::default()
        };

        let ship_repository = ShipRepository::new(self.db);

        Ok(ship_repository.insert(ship).await?)
    }

    /// Edits a ship, overwriting only the fields present in the payload.
    ///
    /// Validation covers the incoming partial values and runs before the
    /// existence check, so a malformed payload yields a validation failure
    /// even for an unknown ID. The rating is recomputed from the merged
    /// values on every edit.
    pub async fn edit(&self, id: i64, payload: ShipPayloadDto) -> Result<ship::Model, Error> {
        validate_payload(&payload)?;

        let ship_repository = ShipRepository::new(self.db);

        let current = ship_repository
            .find_by_id(id)
            .await?
            .ok_or(ShipError::NotFound(id))?;

        let prod_date = match payload.prod_date {
            Some(ms) => millis_to_datetime(ms)?,
            None => current.prod_date,
        };
        let is_used = payload.is_used.unwrap_or(current.is_used);
        let speed = payload.speed.unwrap_or(current.speed);
        let rating = compute_rating(speed, is_used, prod_date.year());

        let merged = ship::ActiveModel {
            id: ActiveValue::Unchanged(current.id),
            name: ActiveValue::Set(payload.name.unwrap_or(current.name)),
            planet: ActiveValue::Set(payload.planet.unwrap_or(current.planet)),
            ship_type: ActiveValue::Set(payload.ship_type.unwrap_or(current.ship_type)),
            prod_date: ActiveValue::Set(prod_date),
            is_used: ActiveValue::Set(is_used),
            speed: ActiveValue::Set(speed),
            crew_size: ActiveValue::Set(payload.crew_size.unwrap_or(current.crew_size)),
            rating: ActiveValue::Set(rating),
        };

        Ok(ship_repository.update(merged).await?)
    }

    /// Returns the ship with the given ID, or NotFound.
    pub async fn get(&self, id: i64) -> Result<ship::Model, Error> {
        let ship_repository = ShipRepository::new(self.db);

        ship_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ShipError::NotFound(id).into())
    }

    /// Deletes the ship with the given ID, or fails with NotFound.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let ship_repository = ShipRepository::new(self.db);

        if !ship_repository.exists_by_id(id).await? {
            return Err(ShipError::NotFound(id).into());
        }

        ship_repository.delete_by_id(id).await?;

        Ok(())
    }

    /// Parses a raw path segment into a ship ID.
    ///
    /// Absent, empty, and "0" (after trimming) inputs are rejected, as is
    /// anything that fails numeric parsing.
    pub fn parse_id(raw: Option<&str>) -> Result<i64, ShipError> {
        let raw =
            raw.ok_or_else(|| ShipError::Validation("ship ID is required".to_string()))?;

        if raw.is_empty() || raw.trim() == "0" {
            return Err(ShipError::Validation(format!("invalid ship ID {raw:?}")));
        }

        raw.parse::<i64>()
            .map_err(|_| ShipError::Validation(format!("invalid ship ID {raw:?}")))
    }
}

/// Checks range constraints on whichever payload fields are present.
///
/// Absent fields pass; create enforces presence separately.
fn validate_payload(payload: &ShipPayloadDto) -> Result<(), ShipError> {
    if let Some(ms) = payload.prod_date {
        let year = millis_to_datetime(ms)?.year();

        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(ShipError::Validation(format!(
                "production year {year} outside [{YEAR_MIN}, {YEAR_MAX}]"
            )));
        }
    }

    if let Some(name) = payload.name.as_deref() {
        if name.is_empty() || name.chars().count() > NAME_LEN_MAX {
            return Err(ShipError::Validation(format!(
                "name length outside [1, {NAME_LEN_MAX}]"
            )));
        }
    }

    if let Some(planet) = payload.planet.as_deref() {
        if planet.is_empty() || planet.chars().count() > NAME_LEN_MAX {
            return Err(ShipError::Validation(format!(
                "planet length outside [1, {NAME_LEN_MAX}]"
            )));
        }
    }

    if let Some(speed) = payload.speed {
        if !(SPEED_MIN..=SPEED_MAX).contains(&speed) {
            return Err(ShipError::Validation(format!(
                "speed {speed} outside [{SPEED_MIN}, {SPEED_MAX}]"
            )));
        }
    }

    if let Some(crew_size) = payload.crew_size {
        if !(CREW_MIN..=CREW_MAX).contains(&crew_size) {
            return Err(ShipError::Validation(format!(
                "crew size {crew_size} outside [{CREW_MIN}, {CREW_MAX}]"
            )));
        }
    }

    Ok(())
}

/// Derived ship rating, rounded half-up to two decimals.
///
/// The denominator is at least 1 because the validator caps the production
/// year at 3019.
fn compute_rating(speed: f64, is_used: bool, prod_year: i32) -> f64 {
    let k = if is_used { 0.5 } else { 1.0 };
    let raw = (80.0 * speed * k) / f64::from(YEAR_MAX - prod_year + 1);

    (raw * 100.0).round() / 100.0
}

/// Converts epoch milliseconds to a UTC datetime.
fn millis_to_datetime(ms: i64) -> Result<NaiveDateTime, ShipError> {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| ShipError::Validation(format!("timestamp {ms} out of range")))
}
