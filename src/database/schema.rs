use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, Statement};

use crate::database::DB;

/// Create the items table if it does not exist yet. There is no migration
/// versioning; the schema is a single table.
pub async fn ensure_schema(db: &DB) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        DatabaseBackend::Postgres,
        "CREATE TABLE IF NOT EXISTS items (\
            id SERIAL PRIMARY KEY, \
            name VARCHAR(100) NOT NULL, \
            description VARCHAR(500)\
        )",
    ))
    .await?;
    Ok(())
}
