//! Core library for heartjump record intake.
//!
//! This crate exposes the record types, the field validator, and the
//! DynamoDB-backed store writer. The Lambda front end should only depend on
//! the items exported here instead of reaching into the modules directly.

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod record;
pub mod store;
pub mod validate;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use record::{now_nanos, IncomingRecord, StoredRecord};
pub use store::{DynamoStore, RecordStore};
pub use validate::check_record;
