use axum::Router;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Response;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod assets;
mod config;

use config::{Settings, load_settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let settings = Arc::new(load_settings());
    let app = build_router(settings.clone());

    let addr: SocketAddr = settings.bind.parse()?;
    info!(%addr, root = %settings.asset_root.display(), "asset server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(settings: Arc<Settings>) -> Router {
    // Every path and method goes through the same asset handler; unknown
    // routes get the SPA index from there.
    Router::new().fallback(serve_asset).with_state(settings)
}

async fn serve_asset(State(settings): State<Arc<Settings>>, uri: Uri) -> Response {
    assets::respond(&settings.asset_root, uri.path()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app_for(root: &std::path::Path) -> Router {
        build_router(Arc::new(Settings {
            bind: "127.0.0.1:0".into(),
            asset_root: root.to_path_buf(),
        }))
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body")
            .to_vec()
    }

    #[tokio::test]
    async fn serves_a_known_file_with_its_content_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.js"), b"console.log(1);").unwrap();

        let request = Request::get("/app.js").body(Body::empty()).unwrap();
        let response = app_for(dir.path()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "text/javascript"
        );
        assert_eq!(body_bytes(response).await, b"console.log(1);");
    }

    #[tokio::test]
    async fn unknown_route_serves_the_index_shell() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), b"<html>shell</html>").unwrap();

        let request = Request::get("/rota/que/nao/existe")
            .body(Body::empty())
            .unwrap();
        let response = app_for(dir.path()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "text/html"
        );
        assert_eq!(body_bytes(response).await, b"<html>shell</html>");
    }

    #[tokio::test]
    async fn missing_index_turns_into_a_404() {
        let dir = tempfile::tempdir().unwrap();

        let request = Request::get("/nada").body(Body::empty()).unwrap();
        let response = app_for(dir.path()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            String::from_utf8(body_bytes(response).await).unwrap(),
            "Arquivo não encontrado"
        );
    }

    #[tokio::test]
    async fn traversal_never_leaves_the_asset_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("public");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("index.html"), b"<html>shell</html>").unwrap();
        std::fs::write(dir.path().join("secret.txt"), b"fora da raiz").unwrap();

        let request = Request::get("/../secret.txt").body(Body::empty()).unwrap();
        let response = app_for(&root).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"<html>shell</html>");
    }

    #[tokio::test]
    async fn root_path_serves_the_index_directly() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), b"<html>home</html>").unwrap();

        let request = Request::get("/").body(Body::empty()).unwrap();
        let response = app_for(dir.path()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "text/html"
        );
        assert_eq!(body_bytes(response).await, b"<html>home</html>");
    }
}
