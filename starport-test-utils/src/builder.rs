//! Declarative test builder.
//!
//! Configuration methods are chained and queued, then executed during the
//! final `build()` call: tables first, then fixtures.

use entity::ship;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_ship_table: bool,
    ships: Vec<ship::ActiveModel>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_ship_table: false,
            ships: Vec::new(),
        }
    }

    /// Add the ship table to the test database.
    pub fn with_ship_table(mut self) -> Self {
        self.include_ship_table = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be
    /// executed during `build()`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue a ship fixture to be inserted during `build()`.
    pub fn with_ship(mut self, ship: ship::ActiveModel) -> Self {
        self.ships.push(ship);
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();

        if self.include_ship_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::Ship));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for ship in self.ships {
            setup.ships().insert(ship).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
