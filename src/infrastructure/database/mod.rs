pub mod pool;
pub mod schema;
pub mod sqlite_key_value_store;
