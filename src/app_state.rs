use crate::config::Config;
use sea_orm::DatabaseConnection;

// Shared across workers through `web::Data`'s Arc; the state itself is not
// Clone because `DatabaseConnection` is not Clone when SeaORM's mock
// backend is compiled in.
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
