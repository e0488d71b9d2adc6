use reqwest::StatusCode;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("storage responded with HTTP {status}: {body}")]
    Response { status: StatusCode, body: String },
}

/// Minimal client for the Supabase Storage object API. Uploads use the
/// service-role key; reads go through public object URLs, so the bucket is
/// expected to be public.
#[derive(Clone)]
pub struct StorageClient {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

impl StorageClient {
    pub fn new(supabase_url: &str, service_key: &str, bucket: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: supabase_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path)
    }

    /// Upload an object to the bucket at `path`.
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let response = self
            .client
            .post(self.object_url(path))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        check_status(response).await
    }

    /// Public URL for an object in the bucket.
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    /// Remove an object from the bucket.
    pub async fn remove(&self, path: &str) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(self.object_url(path))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .send()
            .await?;

        check_status(response).await
    }
}

async fn check_status(response: reqwest::Response) -> Result<(), StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(StorageError::Response { status, body })
}

/// Storage object name for an uploaded image: a fresh UUID keeping the
/// original file's extension.
pub fn unique_object_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{}.{ext}", Uuid::new_v4())
        }
        _ => Uuid::new_v4().to_string(),
    }
}

/// Reconstruct the bucket path of a stored image from its public URL: the
/// parent portfolio id plus the trailing file segment. This is how the
/// replace flow finds old objects to remove; a URL with no usable trailing
/// segment is skipped rather than guessed at.
pub fn object_path_from_url(portfolio_id: Uuid, image_url: &str) -> Option<String> {
    let file = image_url.trim_end_matches('/').rsplit('/').next()?;
    if file.is_empty() || file.contains(':') {
        return None;
    }
    Some(format!("{portfolio_id}/{file}"))
}

/// Best-effort content type from the file extension, for uploads that do
/// not declare one.
pub fn content_type_for(file_name: &str) -> &'static str {
    match file_name.rsplit_once('.').map(|(_, ext)| ext) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
            "image/jpeg"
        }
        Some(ext) if ext.eq_ignore_ascii_case("gif") => "image/gif",
        Some(ext) if ext.eq_ignore_ascii_case("webp") => "image/webp",
        Some(ext) if ext.eq_ignore_ascii_case("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
