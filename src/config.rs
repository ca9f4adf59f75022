use std::env;

#[derive(Clone)]
pub struct Config {
    /// Connection string for the backing store. Optional here: a missing
    /// value fails the first persistence operation, not process start.
    pub database_url: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").ok(),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
        }
    }
}
