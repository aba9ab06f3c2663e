//! Static single-page front-end.
//!
//! Files are served from the configured static directory; any path that
//! does not match a file falls back to index.html so client-side routing
//! keeps working on refresh.

use std::path::{Component, Path as FsPath, PathBuf};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::app::AppState;

/// Serve a static asset, falling back to the SPA shell.
///
/// GET /*
pub async fn serve_spa(State(state): State<AppState>, uri: Uri) -> Response {
    let static_dir = PathBuf::from(&state.config.frontend.static_dir);

    if let Some(path) = resolve_asset(&static_dir, uri.path()) {
        if let Ok(body) = tokio::fs::read(&path).await {
            let mime = mime_guess::from_path(&path)
                .first_or_octet_stream()
                .to_string();
            return ([(header::CONTENT_TYPE, mime)], body).into_response();
        }
    }

    match tokio::fs::read(static_dir.join("index.html")).await {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8".to_string())],
            body,
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, dir = %static_dir.display(), "Front-end assets missing");
            (StatusCode::NOT_FOUND, "Front-end not installed").into_response()
        }
    }
}

/// Maps a request path onto a file inside the static directory.
///
/// Returns None for the root path and for anything that tries to climb out
/// of the directory.
fn resolve_asset(static_dir: &FsPath, request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let relative = FsPath::new(trimmed);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    Some(static_dir.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_asset_plain_file() {
        let resolved = resolve_asset(FsPath::new("static"), "/app.js").unwrap();
        assert_eq!(resolved, PathBuf::from("static/app.js"));
    }

    #[test]
    fn test_resolve_asset_rejects_traversal() {
        assert!(resolve_asset(FsPath::new("static"), "/../etc/passwd").is_none());
        assert!(resolve_asset(FsPath::new("static"), "/a/../../secret").is_none());
    }

    #[test]
    fn test_resolve_asset_root_falls_back() {
        assert!(resolve_asset(FsPath::new("static"), "/").is_none());
    }
}
