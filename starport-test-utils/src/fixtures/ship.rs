//! Factory functions for generating ship fixtures.
//!
//! Provides in-memory active models with standard test values plus helpers
//! for inserting them into a test database.

use chrono::{NaiveDate, NaiveDateTime};
use entity::ship::{self, ShipType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Midnight UTC on January 1st of the given year.
pub fn prod_date(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Create a ship active model with standard test values.
///
/// The rating matches what the service would derive for these values:
/// `80 * 0.5 * 1.0 / (3019 - 3000 + 1) = 2.0`.
pub fn mock_ship(name: &str) -> ship::ActiveModel {
    ship::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        planet: ActiveValue::Set("Earth".to_string()),
        ship_type: ActiveValue::Set(ShipType::Transport),
        prod_date: ActiveValue::Set(prod_date(3000)),
        is_used: ActiveValue::Set(false),
        speed: ActiveValue::Set(0.5),
        crew_size: ActiveValue::Set(10),
        rating: ActiveValue::Set(2.0),
        ..Default::default()
    }
}

pub struct ShipFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a prepared active model.
    pub async fn insert(&self, ship: ship::ActiveModel) -> Result<ship::Model, DbErr> {
        ship.insert(self.db).await
    }

    /// Insert a ship with standard mock values under the given name.
    pub async fn insert_mock(&self, name: &str) -> Result<ship::Model, DbErr> {
        self.insert(mock_ship(name)).await
    }
}
