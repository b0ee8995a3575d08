//! AWS Lambda entry point for the heartjump record intake function.

use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    heartjump_lambda::run().await
}
