use dotenvy::dotenv;
use std::env;

pub struct Config {
    /// Where user-facing confirmations are delivered.
    pub notify_destination: String,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let notify_destination = match env::var("BARKY_NOTIFY_DESTINATION") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => "bookmarks".to_string(),
        };

        let http_port = match env::var("BARKY_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        Self {
            notify_destination,
            http_port,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notify_destination: "bookmarks".to_string(),
            http_port: 8080,
        }
    }
}
