//! Data access for the items table, kept separate from the entity
//! definition. Every function is a single auto-committed statement.

use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set};

use crate::database::{connector, items, DB};

pub async fn list_all(db: &DB) -> Result<Vec<items::Model>, DbErr> {
    items::Entity::find().all(db).await
}

pub async fn insert(db: &DB, name: String, description: String) -> Result<items::Model, DbErr> {
    let item = items::ActiveModel {
        name: Set(name),
        description: Set(Some(description)),
        ..Default::default()
    };
    item.insert(db).await
}

pub async fn find_by_id(db: &DB, id: i32) -> Result<Option<items::Model>, DbErr> {
    items::Entity::find_by_id(id).one(db).await
}

/// Returns whether a row was actually removed.
pub async fn delete_by_id(db: &DB, id: i32) -> Result<bool, DbErr> {
    let result = items::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn ping(db: &DB) -> Result<(), DbErr> {
    connector::ping(db).await
}
