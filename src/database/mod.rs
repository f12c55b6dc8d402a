pub mod connector;
pub mod items;
pub mod repository;
pub mod schema;

pub use connector::{DB, connect_with_settings};
pub use schema::ensure_schema;
