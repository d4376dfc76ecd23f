//! Object storage collaborator used by the Lambdas.
//!
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::types::ByteStream;
use log::debug;

use std::time::Instant;

/// Write-only view of an object store. Implementations must be shareable across
/// concurrent invocations.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
}

#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }

    pub async fn from_env() -> Self {
        let start = Instant::now();
        let config = aws_config::load_from_env().await;
        let client = aws_sdk_s3::Client::new(&config);
        debug!("Created an S3 client in {:.2?}", start.elapsed());
        Self::new(client)
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .with_context(|| format!("failed to upload s3://{}/{}", bucket, key))?;

        Ok(())
    }
}
