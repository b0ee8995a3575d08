//! DynamoDB-backed record persistence.
//!
//! The store writer performs a single `PutItem` per record. There is no
//! batching, no retry, and no read path.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::record::StoredRecord;

/// Insert-only persistence seam for stamped records.
///
/// The Lambda handler is generic over this trait so tests can substitute an
/// in-memory implementation without touching shared state.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Write one record as a single atomic insert.
    async fn put_record(&self, record: StoredRecord) -> Result<()>;
}

/// Store writer backed by a shared DynamoDB client.
///
/// Built once at cold start and reused across invocations. The client issues
/// independent requests per call and is safe to share immutably.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Wrap an existing client targeting `table_name`.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Resolve AWS configuration and build the store from `config`.
    ///
    /// Region and endpoint overrides are applied when present; credentials
    /// always come from the SDK's default provider chain.
    pub async fn connect(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }
        if let Some(endpoint) = config.endpoint_url.as_deref() {
            loader = loader.endpoint_url(endpoint);
        }
        let shared = loader.load().await;

        Self::new(Client::new(&shared), config.table_name.clone())
    }

    /// Table this store writes to.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl RecordStore for DynamoStore {
    async fn put_record(&self, record: StoredRecord) -> Result<()> {
        debug!(
            table = %self.table_name,
            timestamp = record.timestamp,
            "issuing put_item"
        );

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(&record)))
            .send()
            .await
            .map_err(|e| Error::StorePut {
                table: self.table_name.clone(),
                message: DisplayErrorContext(e).to_string(),
            })?;

        Ok(())
    }
}

/// Map a stamped record onto DynamoDB attribute values.
///
/// Numbers travel as `N` attributes, the answer as `S`. The mapping is total
/// over `StoredRecord`, so there is no serialization failure path.
fn to_item(record: &StoredRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "timestamp".to_string(),
            AttributeValue::N(record.timestamp.to_string()),
        ),
        ("age".to_string(), AttributeValue::N(record.age.to_string())),
        ("answer".to_string(), AttributeValue::S(record.answer.clone())),
        (
            "result".to_string(),
            AttributeValue::N(record.result.to_string()),
        ),
    ])
}
