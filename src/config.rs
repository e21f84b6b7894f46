// src/config.rs

use std::{env, net::SocketAddr};

use dotenvy::dotenv;

/// A stream must match strictly above this fraction to be recommended.
pub const MIN_STREAM_MATCH: f64 = 0.4;

/// At most this many streams are recommended per evaluation.
pub const MAX_RECOMMENDED_STREAMS: usize = 2;

/// Upper bound on the points a single question may carry.
pub const MAX_QUESTION_POINTS: u32 = 1000;

/// Upper bound on the number of questions in one quiz.
pub const MAX_QUIZ_QUESTIONS: usize = 500;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: String,
    pub cors_origins: Vec<String>,
    /// Used for college suggestions when a request names no district.
    pub default_district: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                ]
            });

        let default_district =
            env::var("DEFAULT_DISTRICT").unwrap_or_else(|_| "Bangalore".to_string());

        Self {
            bind_addr,
            rust_log,
            log_dir,
            cors_origins,
            default_district,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins(" http://a.test, ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
