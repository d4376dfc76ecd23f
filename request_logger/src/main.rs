// Logs every request hitting the Function URL to S3 and reports any
// credentials the caller leaked through `x-e-*` headers.
mod config;
mod event;
mod handler;
mod leaks;
mod models;
mod report;

use config::Config;
use handler::RequestLogger;
use shared::setup_logging;
use shared::storage::S3ObjectStore;

use std::sync::Arc;
use std::time::Instant;

use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use log::{debug, info};
use serde_json::Value;

#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    setup_logging();

    let start = Instant::now();
    let config = Config::from_env()?;
    let store = S3ObjectStore::from_env().await;
    info!("Logging requests to bucket: {}", config.bucket_name);

    let logger = Arc::new(RequestLogger::new(store, config.bucket_name));
    debug!("Cold start took {:.2?}", start.elapsed());

    let func = service_fn(move |event: LambdaEvent<Value>| {
        let logger = Arc::clone(&logger);
        async move { logger.handle(event).await }
    });
    run(func).await?;

    Ok(())
}
