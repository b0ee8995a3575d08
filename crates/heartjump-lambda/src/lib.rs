//! AWS Lambda function for posting heartjump records.
//!
//! Accepts an API Gateway proxy POST carrying a JSON record, validates the
//! field constraints, stamps the record with a nanosecond timestamp, and
//! writes it to DynamoDB. Every code path yields a well-formed response; no
//! error escapes to the runtime.

#![deny(warnings)]

mod response;
mod tracing_init;

pub use response::{bad_request, internal_error, ok};
pub use tracing_init::init_tracing;

use lambda_http::{service_fn, Body, Error, Request, RequestExt, Response};
use tracing::{error, info};

use heartjump_lib::{
    check_record, now_nanos, DynamoStore, IncomingRecord, RecordStore, StoreConfig, StoredRecord,
};

/// Entry point used by the Lambda runtime.
///
/// Resolves the store configuration, builds the DynamoDB client once, and
/// serves requests against it for the lifetime of the process.
pub async fn run() -> Result<(), Error> {
    init_tracing();

    let config = StoreConfig::from_env();
    info!(table = %config.table_name, "store configuration resolved");

    let store = DynamoStore::connect(&config).await;
    let store_ref = &store;

    lambda_http::run(service_fn(move |event: Request| async move {
        Ok::<Response<Body>, Error>(handle_request(store_ref, event).await)
    }))
    .await
}

/// Handle one intake request: decode, validate, persist, respond.
///
/// Terminal outcomes only; there are no retries and no partial writes. The
/// store is injected so tests can observe exactly which writes were issued.
pub async fn handle_request<S: RecordStore>(store: &S, event: Request) -> Response<Body> {
    let request_id = event.lambda_context().request_id;

    let record: IncomingRecord = match serde_json::from_slice(event.body().as_ref()) {
        Ok(record) => record,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to decode request body");
            return response::bad_request(format!("Bad JSON body: {e}"));
        }
    };

    if !check_record(&record) {
        error!(request_id = %request_id, "record failed validation");
        return response::bad_request("Bad Item");
    }

    let stored = StoredRecord::stamp(&record, now_nanos());
    let timestamp = stored.timestamp;

    if let Err(e) = store.put_record(stored).await {
        error!(request_id = %request_id, error = %e, "failed to persist record");
        return response::internal_error(e);
    }

    info!(request_id = %request_id, timestamp, "record posted");
    response::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use heartjump_lib::{Error as LibError, Result as LibResult};
    use lambda_http::http;

    /// In-memory store capturing every write.
    #[derive(Default)]
    struct MemoryStore {
        records: Mutex<Vec<StoredRecord>>,
    }

    impl MemoryStore {
        fn records(&self) -> Vec<StoredRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecordStore for MemoryStore {
        async fn put_record(&self, record: StoredRecord) -> LibResult<()> {
            self.records.lock().unwrap().push(record);
            Ok(())
        }
    }

    /// Store that refuses every write, for the internal-error path.
    struct FailingStore;

    #[async_trait]
    impl RecordStore for FailingStore {
        async fn put_record(&self, _record: StoredRecord) -> LibResult<()> {
            Err(LibError::StorePut {
                table: "heartjump-db".to_string(),
                message: "table missing".to_string(),
            })
        }
    }

    fn post(body: &str) -> Request {
        http::Request::builder()
            .method("POST")
            .uri("/record")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("request builds")
            .with_lambda_context(lambda_http::Context::default())
    }

    fn body_text(response: &Response<Body>) -> &str {
        match response.body() {
            Body::Text(text) => text,
            other => panic!("expected text body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn valid_record_is_persisted_and_acknowledged() {
        let store = MemoryStore::default();
        let before = now_nanos();

        let response =
            handle_request(&store, post(r#"{"age":3,"answer":"1234567","result":2}"#)).await;

        assert_eq!(response.status(), 200);
        assert_eq!(body_text(&response), "Record Posted");

        let written = store.records();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].age, 3);
        assert_eq!(written[0].answer, "1234567");
        assert_eq!(written[0].result, 2);
        assert!(written[0].timestamp > before);
    }

    #[tokio::test]
    async fn out_of_range_age_is_rejected_without_a_write() {
        let store = MemoryStore::default();

        let response =
            handle_request(&store, post(r#"{"age":6,"answer":"1234567","result":2}"#)).await;

        assert_eq!(response.status(), 400);
        assert_eq!(body_text(&response), "BadRequest: Bad Item");
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn non_numeric_answer_is_rejected_without_a_write() {
        let store = MemoryStore::default();

        let response =
            handle_request(&store, post(r#"{"age":3,"answer":"12a4567","result":2}"#)).await;

        assert_eq!(response.status(), 400);
        assert_eq!(body_text(&response), "BadRequest: Bad Item");
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_reports_the_parser_error() {
        let store = MemoryStore::default();

        let response = handle_request(&store, post("not-json")).await;

        assert_eq!(response.status(), 400);
        assert!(body_text(&response).starts_with("BadRequest: Bad JSON body:"));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn missing_field_reports_the_parser_error() {
        let store = MemoryStore::default();

        let response = handle_request(&store, post(r#"{"age":3,"result":2}"#)).await;

        assert_eq!(response.status(), 400);
        assert!(body_text(&response).starts_with("BadRequest: Bad JSON body:"));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn empty_body_reports_the_parser_error() {
        let store = MemoryStore::default();

        let request = http::Request::builder()
            .method("POST")
            .uri("/record")
            .body(Body::Empty)
            .expect("request builds")
            .with_lambda_context(lambda_http::Context::default());
        let response = handle_request(&store, request).await;

        assert_eq!(response.status(), 400);
        assert!(body_text(&response).starts_with("BadRequest: Bad JSON body:"));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_internal_error() {
        let response = handle_request(
            &FailingStore,
            post(r#"{"age":3,"answer":"1234567","result":2}"#),
        )
        .await;

        assert_eq!(response.status(), 500);
        let body = body_text(&response);
        assert!(body.starts_with("InternalError:"));
        assert!(body.contains("table missing"));
    }

    #[tokio::test]
    async fn every_outcome_carries_the_cors_headers() {
        let store = MemoryStore::default();

        let responses = vec![
            handle_request(&store, post(r#"{"age":3,"answer":"1234567","result":2}"#)).await,
            handle_request(&store, post(r#"{"age":6,"answer":"1234567","result":2}"#)).await,
            handle_request(&store, post("not-json")).await,
            handle_request(
                &FailingStore,
                post(r#"{"age":3,"answer":"1234567","result":2}"#),
            )
            .await,
        ];

        for response in &responses {
            let headers = response.headers();
            assert_eq!(
                headers.get("access-control-allow-origin").unwrap(),
                response::ALLOWED_ORIGIN
            );
            assert_eq!(
                headers.get("access-control-allow-methods").unwrap(),
                response::ALLOWED_METHODS
            );
            assert_eq!(
                headers.get("access-control-allow-headers").unwrap(),
                response::ALLOWED_HEADERS
            );
        }
    }
}
