//! Player pools: the built-in database and file loaders

pub mod loader;
pub mod player_db;

pub use loader::{load_pool, load_pool_csv, load_pool_json, parse_pool_csv, parse_pool_json};
pub use player_db::{builtin_profiles, find_builtin, player_pool};
