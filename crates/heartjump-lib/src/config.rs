//! Store configuration resolved once at process start.
//!
//! Everything the store writer needs from the environment is gathered here,
//! so the persistence logic itself stays free of ambient discovery.

use std::env;

/// DynamoDB table written when no override is configured.
pub const DEFAULT_TABLE: &str = "heartjump-db";

/// Environment variable overriding the target table name.
pub const TABLE_ENV: &str = "HEARTJUMP_TABLE";

/// Environment variable overriding the AWS region.
pub const REGION_ENV: &str = "AWS_REGION";

/// Environment variable pointing writes at an alternate DynamoDB endpoint
/// (DynamoDB Local, integration tests).
pub const ENDPOINT_ENV: &str = "HEARTJUMP_DYNAMODB_ENDPOINT";

/// Connection settings for the record store.
///
/// Credentials are deliberately absent: the SDK's default provider chain
/// resolves them (execution role in Lambda, profile or environment locally).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Table receiving the records.
    pub table_name: String,

    /// Region override. The default provider chain applies when `None`.
    pub region: Option<String>,

    /// Endpoint override for local or test deployments.
    pub endpoint_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE.to_string(),
            region: None,
            endpoint_url: None,
        }
    }
}

impl StoreConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            table_name: env::var(TABLE_ENV).unwrap_or_else(|_| DEFAULT_TABLE.to_string()),
            region: env::var(REGION_ENV).ok(),
            endpoint_url: env::var(ENDPOINT_ENV).ok(),
        }
    }
}
