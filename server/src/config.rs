use std::{env, fmt::Display, str::FromStr};

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub client_host: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            database_url: require("DATABASE_URL"),
            bind_address: try_load("BIND_ADDRESS", "0.0.0.0:8080"),
            client_host: var("CLIENT_HOST").ok(),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        debug!("{} is not set", key);
    })
}

fn require(key: &str) -> String {
    var(key).unwrap_or_else(|_| panic!("{} is required to start the polls server", key))
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{} defaulting to {}", key, default);
            default.to_string()
        })
        .parse()
        .unwrap_or_else(|e| panic!("{} could not be parsed: {}", key, e))
}
