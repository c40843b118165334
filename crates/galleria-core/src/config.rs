//! Configuration module
//!
//! Environment-driven configuration for the API server and the store
//! selection. The store mode is the only environment flag that changes
//! behavior: it picks the `ImageStore` implementation once at composition
//! time, so no mode checks leak into business logic.

use std::env;
use std::str::FromStr;

use crate::upload::{UploadPolicy, DEFAULT_ALLOWED_CONTENT_TYPES, DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_SIZE};

const DEFAULT_PORT: u16 = 8080;

/// Which `ImageStore` implementation the application composes at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// Seeded in-memory fixture collection, no durability.
    Memory,
    /// Delegate to a remote gallery API over HTTP.
    Remote,
}

impl FromStr for StoreMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mock" => Ok(StoreMode::Memory),
            "remote" | "live" => Ok(StoreMode::Remote),
            _ => Err(anyhow::anyhow!("Invalid store mode: {}", s)),
        }
    }
}

/// Application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    server_port: u16,
    cors_origins: Vec<String>,
    store_mode: StoreMode,
    remote_url: Option<String>,
    max_file_size_bytes: usize,
    max_upload_files: usize,
    allowed_content_types: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let server_port = env::var("GALLERIA_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = env::var("GALLERIA_CORS_ORIGINS")
            .map(|v| split_csv(&v))
            .unwrap_or_default();

        let store_mode = match env::var("GALLERIA_STORE_MODE") {
            Ok(value) => value.parse()?,
            Err(_) => StoreMode::Memory,
        };

        let remote_url = env::var("GALLERIA_REMOTE_URL").ok();
        if store_mode == StoreMode::Remote && remote_url.is_none() {
            anyhow::bail!("GALLERIA_REMOTE_URL is required when GALLERIA_STORE_MODE=remote");
        }

        let max_file_size_bytes = env::var("GALLERIA_MAX_FILE_SIZE_MB")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .map(|mb| mb * 1024 * 1024)
            .unwrap_or(DEFAULT_MAX_FILE_SIZE);

        let max_upload_files = env::var("GALLERIA_MAX_UPLOAD_FILES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_FILES);

        let allowed_content_types = env::var("GALLERIA_ALLOWED_CONTENT_TYPES")
            .map(|v| split_csv(&v))
            .unwrap_or_else(|_| {
                DEFAULT_ALLOWED_CONTENT_TYPES
                    .iter()
                    .map(|ct| ct.to_string())
                    .collect()
            });

        Ok(Self {
            server_port,
            cors_origins,
            store_mode,
            remote_url,
            max_file_size_bytes,
            max_upload_files,
            allowed_content_types,
        })
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn store_mode(&self) -> StoreMode {
        self.store_mode
    }

    pub fn remote_url(&self) -> Option<&str> {
        self.remote_url.as_deref()
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_bytes
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_files: self.max_upload_files,
            max_file_size: self.max_file_size_bytes,
            allowed_content_types: self.allowed_content_types.clone(),
        }
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
