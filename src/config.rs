// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::db;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub listen_addr: SocketAddr,
    pub log_format: LogFormat,
    /// `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl Config {
    /// Read `FINANCEHUB_*` variables. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = match lookup("FINANCEHUB_DB_PATH").filter(|s| !s.trim().is_empty()) {
            Some(p) => PathBuf::from(p),
            None => db::default_db_path()?,
        };
        let addr = lookup("FINANCEHUB_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());
        let listen_addr = addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid FINANCEHUB_LISTEN_ADDR '{}'", addr))?;
        let log_format = match lookup("FINANCEHUB_LOG_FORMAT") {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let cors_origin = lookup("FINANCEHUB_CORS_ORIGIN")
            .filter(|s| !s.trim().is_empty() && s.as_str() != "*");
        Ok(Config {
            db_path,
            listen_addr,
            log_format,
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reads_overrides() {
        let vars = env(&[
            ("FINANCEHUB_DB_PATH", "/tmp/fh.sqlite"),
            ("FINANCEHUB_LISTEN_ADDR", "0.0.0.0:8080"),
            ("FINANCEHUB_LOG_FORMAT", "JSON"),
            ("FINANCEHUB_CORS_ORIGIN", "http://localhost:5173"),
        ]);
        let cfg = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/fh.sqlite"));
        assert_eq!(cfg.listen_addr.port(), 8080);
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.cors_origin.as_deref(), Some("http://localhost:5173"));
    }

    #[test]
    fn rejects_bad_listen_addr() {
        let vars = env(&[
            ("FINANCEHUB_DB_PATH", "/tmp/fh.sqlite"),
            ("FINANCEHUB_LISTEN_ADDR", "localhost"),
        ]);
        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("FINANCEHUB_LISTEN_ADDR"));
    }
}
