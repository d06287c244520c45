use crate::adapter::UploadFormat;

/// Options that control how uploads are read.
#[derive(Debug, Clone)]
pub struct InferOptions {
    /// Force a format instead of detecting it from the extension.
    pub format: Option<UploadFormat>,
    /// Uploads larger than this are rejected before decoding.
    pub max_upload_bytes: u64,
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            format: None,
            max_upload_bytes: 100 * 1024 * 1024,
        }
    }
}
