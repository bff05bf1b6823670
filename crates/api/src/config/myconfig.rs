use anyhow::{Context, Result, anyhow};
use shared::config::{env_or, env_parse_or, require_env};
use std::path::PathBuf;

pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub upload_dir: PathBuf,
    pub max_upload_size: usize,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = require_env("DATABASE_URL")?;
        let run_migrations_str = require_env("RUN_MIGRATIONS")?;
        let port_str = require_env("PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_min_conn = env_parse_or("DB_MIN_CONN", 1u32)?;
        let db_max_conn = env_parse_or("DB_MAX_CONN", 5u32)?;

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({db_min_conn}) must not exceed DB_MAX_CONN ({db_max_conn})"
            ));
        }

        let upload_dir = PathBuf::from(env_or("UPLOAD_DIR", "uploads"));
        let max_upload_size = env_parse_or("MAX_UPLOAD_SIZE", DEFAULT_MAX_UPLOAD_SIZE)?;

        Ok(Self {
            database_url,
            run_migrations,
            port,
            db_min_conn,
            db_max_conn,
            upload_dir,
            max_upload_size,
        })
    }
}
