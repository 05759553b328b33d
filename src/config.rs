//! Configuration for Tender.
//!
//! Loads configuration from environment variables. The config is built once
//! in the binary and passed down explicitly; nothing in the library reads
//! the environment on its own.

use std::env;
use std::path::PathBuf;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional JSON dataset snapshot; the built-in seed is used when unset.
    pub data_path: Option<PathBuf>,
    /// Session file location; a platform default is used when unset.
    pub session_path: Option<PathBuf>,
    /// Maximum number of recommended projects per query.
    pub recommendation_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_path: env::var("TENDER_DATA_PATH").ok().map(PathBuf::from),
            session_path: env::var("TENDER_SESSION_PATH").ok().map(PathBuf::from),
            recommendation_limit: env::var("TENDER_RECOMMEND_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RECOMMENDATION_LIMIT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            session_path: None,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

/// Default cap on recommendations shown to a freelancer.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;
