use entity::ship;
use sea_orm::{
    ActiveModelTrait, Condition, DatabaseConnection, DbErr, DeleteResult, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ShipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All ships matching the condition, in store-native order
    pub async fn find_all(&self, condition: Condition) -> Result<Vec<ship::Model>, DbErr> {
        entity::prelude::Ship::find()
            .filter(condition)
            .all(self.db)
            .await
    }

    /// One page of ships matching the condition, ordered by the given column
    pub async fn find_page(
        &self,
        condition: Condition,
        order_by: ship::Column,
        direction: Order,
        page_number: u64,
        page_size: u64,
    ) -> Result<Vec<ship::Model>, DbErr> {
        entity::prelude::Ship::find()
            .filter(condition)
            .order_by(order_by, direction)
            .paginate(self.db, page_size)
            .fetch_page(page_number)
            .await
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        Ok(entity::prelude::Ship::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ship::Model>, DbErr> {
        entity::prelude::Ship::find_by_id(id).one(self.db).await
    }

    /// Insert a new ship, returning the persisted row with its assigned ID
    pub async fn insert(&self, ship: ship::ActiveModel) -> Result<ship::Model, DbErr> {
        ship.insert(self.db).await
    }

    /// Update an existing ship identified by its primary key
    pub async fn update(&self, ship: ship::ActiveModel) -> Result<ship::Model, DbErr> {
        ship.update(self.db).await
    }

    /// Deletes a ship
    ///
    /// Returns OK regardless of the ship existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_id(&self, id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ship::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
