mod database;
mod env;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::env::{env_bool, env_or, env_parse_or, require_env};
