use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};

/// Content type by filename extension, matched case-insensitively.
///
/// `.jpg` deliberately maps to the nonstandard `image/jpg`, and the TypeScript
/// extensions are served as scripts so an in-browser transpiler can load them.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") => "image/jpg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("tsx") | Some("ts") => "text/javascript",
        _ => "application/octet-stream",
    }
}

/// Maps a request path to a path relative to the asset root.
///
/// `None` means the path tries to escape the root and must not touch disk.
pub fn relative_asset_path(request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    let candidate = if trimmed.is_empty() {
        "index.html"
    } else {
        trimmed
    };

    let mut out = PathBuf::new();
    for component in Path::new(candidate).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if out.as_os_str().is_empty() {
        return None;
    }
    Some(out)
}

/// Serves one request path from the asset root.
///
/// Unknown paths fall back to `index.html` so client-side routes resolve; the
/// fallback is a 404 only when the index itself is missing.
pub async fn respond(root: &Path, request_path: &str) -> Response {
    info!(path = %request_path, "asset request");

    let Some(relative) = relative_asset_path(request_path) else {
        info!(path = %request_path, "path escapes root, serving index");
        return fallback_index(root).await;
    };

    let full = root.join(&relative);
    match tokio::fs::read(&full).await {
        Ok(bytes) => asset_response(StatusCode::OK, content_type_for(&relative), bytes),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            info!(path = %request_path, "not on disk, serving index");
            fallback_index(root).await
        }
        Err(error) => {
            warn!(path = %full.display(), %error, "asset read failed");
            plain_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Erro do servidor: {error}"),
            )
        }
    }
}

async fn fallback_index(root: &Path) -> Response {
    match tokio::fs::read(root.join("index.html")).await {
        Ok(bytes) => asset_response(StatusCode::OK, "text/html", bytes),
        Err(_) => plain_response(
            StatusCode::NOT_FOUND,
            "Arquivo não encontrado".to_string(),
        ),
    }
}

fn asset_response(status: StatusCode, content_type: &'static str, bytes: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, content_type)], bytes).into_response()
}

fn plain_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn content_types_follow_the_extension_table() {
        assert_eq!(content_type_for(Path::new("index.html")), "text/html");
        assert_eq!(content_type_for(Path::new("app.js")), "text/javascript");
        assert_eq!(content_type_for(Path::new("main.css")), "text/css");
        assert_eq!(content_type_for(Path::new("data.json")), "application/json");
        assert_eq!(content_type_for(Path::new("logo.png")), "image/png");
        assert_eq!(content_type_for(Path::new("foto.JPG")), "image/jpg");
        assert_eq!(content_type_for(Path::new("anim.gif")), "image/gif");
        assert_eq!(content_type_for(Path::new("icon.svg")), "image/svg+xml");
        assert_eq!(content_type_for(Path::new("App.tsx")), "text/javascript");
        assert_eq!(content_type_for(Path::new("index.ts")), "text/javascript");
        assert_eq!(
            content_type_for(Path::new("arquivo.bin")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("sem-extensao")),
            "application/octet-stream"
        );
    }

    #[test]
    fn root_maps_to_the_index() {
        assert_eq!(
            relative_asset_path("/"),
            Some(PathBuf::from("index.html"))
        );
    }

    #[test]
    fn nested_paths_stay_relative() {
        assert_eq!(
            relative_asset_path("/components/App.tsx"),
            Some(PathBuf::from("components/App.tsx"))
        );
    }

    #[test]
    fn parent_segments_are_rejected() {
        assert_eq!(relative_asset_path("/../secret.txt"), None);
        assert_eq!(relative_asset_path("/sub/../../secret.txt"), None);
    }

    #[tokio::test]
    async fn request_and_miss_logs_show_at_the_default_filter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), b"<html></html>").unwrap();

        let sink = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_writer(CapturedLog(sink.clone()))
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        respond(dir.path(), "/galeria").await;

        let printed = String::from_utf8(sink.lock().unwrap().clone()).unwrap();
        assert!(printed.contains("/galeria"), "request log missing: {printed}");
        assert!(printed.contains("serving index"), "miss log missing: {printed}");
    }
}
