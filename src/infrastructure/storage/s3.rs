use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, timeout::TimeoutConfig};
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    Client,
    config::{Region, StalledStreamProtectionConfig},
    primitives::ByteStream,
};
use bytes::Bytes;
use http::Uri;
use std::str::FromStr;

use crate::{config::config_model::S3, domain::repositories::image_storage::ImageStorage};

/// S3-compatible object storage for machinery images.
pub struct S3ImageStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3ImageStore {
    pub async fn new(config: &S3) -> Result<Self> {
        let client = build_s3_client(config).await?;

        Ok(Self {
            client,
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn object_key(file_name: &str) -> String {
        // Object keys are namespaced by upload date to keep listings browsable.
        let date = chrono::Utc::now().format("%Y-%m-%d");
        let sanitized: String = file_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        format!("uploads/{}/{}-{}", date, uuid::Uuid::new_v4(), sanitized)
    }
}

#[async_trait]
impl ImageStorage for S3ImageStore {
    async fn store_image(
        &self,
        file_name: String,
        content_type: String,
        body: Bytes,
    ) -> Result<String> {
        let key = Self::object_key(&file_name);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .context("failed to upload image to object storage")?;

        Ok(format!("{}/{}/{}", self.public_base_url, self.bucket, key))
    }
}

async fn build_s3_client(config: &S3) -> Result<Client> {
    let endpoint = format!("{}/", config.endpoint.trim_end_matches('/'));
    Uri::from_str(&endpoint).context("invalid s3 endpoint URL")?;

    let credentials = Credentials::new(
        config.access_key.clone(),
        config.secret_key.clone(),
        None,
        None,
        "s3-compatible",
    );

    let region = Region::new(config.region.clone());
    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region.clone())
        .credentials_provider(credentials)
        .timeout_config(
            TimeoutConfig::builder()
                .connect_timeout(Duration::from_secs(10))
                .read_timeout(Duration::from_secs(60))
                .build(),
        )
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
        .endpoint_url(endpoint)
        .force_path_style(true)
        .region(region)
        .stalled_stream_protection(StalledStreamProtectionConfig::disabled())
        .build();

    Ok(Client::from_conf(s3_config))
}
