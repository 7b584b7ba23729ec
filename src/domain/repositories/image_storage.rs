use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use mockall::automock;

#[automock]
#[async_trait]
pub trait ImageStorage {
    /// Stores the image bytes and returns the public URL of the object.
    async fn store_image(
        &self,
        file_name: String,
        content_type: String,
        body: Bytes,
    ) -> Result<String>;
}
