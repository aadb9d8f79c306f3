use anyhow::Context;
use inkview_core::media::{ImageFile, upload_mime_type};
use std::path::Path;

/// Reads an image from disk into the wizard's upload shape.
pub async fn read_image_file(path: impl AsRef<Path>) -> anyhow::Result<ImageFile> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read image: {}", path.display()))?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "imagem".to_string());
    let mime_type = upload_mime_type(&filename);

    Ok(ImageFile::new(filename, mime_type, bytes))
}
