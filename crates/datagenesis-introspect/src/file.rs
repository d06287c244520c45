use std::path::Path;

use tracing::info;

use datagenesis_core::{Error, Result, Row, Schema};

use crate::adapter::{UploadFormat, adapter_for};
use crate::infer::infer_schema;
use crate::options::InferOptions;

/// Rows decoded from an upload plus the schema inferred from them.
#[derive(Debug, Clone)]
pub struct InferredUpload {
    pub format: UploadFormat,
    pub schema: Schema,
    pub rows: Vec<Row>,
}

/// Read an upload from disk and infer its schema.
pub async fn introspect_file(path: &Path, opts: &InferOptions) -> Result<InferredUpload> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|err| Error::Parse(format!("cannot read {}: {err}", path.display())))?;
    if metadata.len() > opts.max_upload_bytes {
        return Err(Error::Parse(format!(
            "{} is {} bytes, larger than the {} byte limit",
            path.display(),
            metadata.len(),
            opts.max_upload_bytes
        )));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| Error::Parse(format!("cannot read {}: {err}", path.display())))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| Error::Parse(format!("{} is not valid UTF-8 text", path.display())))?;

    let format = opts.format.unwrap_or_else(|| UploadFormat::from_path(path));
    let upload = introspect_text(&text, format)?;

    info!(
        path = %path.display(),
        format = adapter_for(format).format(),
        fields = upload.schema.len(),
        rows = upload.rows.len(),
        "upload introspected"
    );

    Ok(upload)
}

/// Decode upload text in the given format and infer its schema.
pub fn introspect_text(text: &str, format: UploadFormat) -> Result<InferredUpload> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(Error::Parse("upload is empty".to_string()));
    }

    let decoded = adapter_for(format).decode(text)?;
    let schema = infer_schema(&decoded.columns, &decoded.rows);

    Ok(InferredUpload {
        format,
        schema,
        rows: decoded.rows,
    })
}
