use crate::prelude::{eprint, *};
use bookshelf_core::book::{parse_catalog, Book, CatalogResponse};
use bookshelf_core::loading::{self, LOAD_ERROR_MESSAGE};
use bookshelf_core::surface::Surface;

use crate::config::Config;
use crate::terminal::TerminalSurface;

/// Fetch and parse the catalog endpoint
///
/// Transport failures and non-success statuses are `Network` errors; bodies
/// that do not carry a `results` array are `MalformedResponse` errors.
pub async fn fetch_catalog(
    client: &reqwest::Client,
    url: &str,
) -> std::result::Result<CatalogResponse, Error> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to fetch {url}: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "Failed to fetch {url}: HTTP {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::Network(format!("Failed to read response from {url}: {e}")))?;

    Ok(parse_catalog(&body)?)
}

/// Fetch the catalog and keep the first page of results
async fn fetch_books(client: &reqwest::Client, url: &str) -> std::result::Result<Vec<Book>, Error> {
    debug!("Fetching catalog from {url}");

    let result = fetch_catalog(client, url).await.map(|response| {
        if let Some(count) = response.count {
            info!(
                "Catalog reports {count} books, using the {} on the first page",
                response.results.len()
            );
        }
        if let Some(next) = &response.next {
            debug!("Ignoring further catalog pages starting at {next}");
        }
        response.results
    });

    if let Err(e) = &result {
        error!("{e}");
    }

    result
}

/// Load the catalog while driving the loading and error indicators
///
/// Returns `None` when the load failed (the surface then shows the error
/// message) or when the surface was torn down before the fetch finished.
pub async fn load_catalog(
    client: &reqwest::Client,
    url: &str,
    surface: &mut dyn Surface,
) -> Option<Vec<Book>> {
    loading::begin(surface);
    let result = fetch_books(client, url).await;
    loading::complete(surface, result)
}

/// Load the configured catalog, printing the indicator frames to stderr
///
/// On failure the error frame is printed before the underlying error is
/// returned.
pub async fn require_catalog(config: &Config, surface: &mut TerminalSurface) -> Result<Vec<Book>> {
    let client = reqwest::Client::new();

    loading::begin(surface);
    eprint!("{}", surface.render(1));

    let result = fetch_books(&client, &config.api_url).await;
    let detail = result.as_ref().err().map(ToString::to_string);

    match loading::complete(surface, result) {
        Some(books) => Ok(books),
        None => {
            eprint!("{}", surface.render(1));
            Err(eyre!(detail.unwrap_or_else(|| LOAD_ERROR_MESSAGE.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use bookshelf_core::surface::{MemorySurface, Region};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/books")
    }

    fn catalog_body() -> serde_json::Value {
        serde_json::json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"id": 1, "title": "Alpha", "authors": [{"name": "A1"}], "subjects": ["Fiction"], "formats": {}},
                {"id": 2, "title": "Beta", "authors": [], "subjects": [], "formats": {}}
            ]
        })
    }

    fn catalog_router() -> Router {
        Router::new().route("/books", get(|| async { Json(catalog_body()) }))
    }

    fn assert_failed(surface: &MemorySurface) {
        assert!(surface.is_visible(Region::Error));
        assert_eq!(surface.text(Region::Error), LOAD_ERROR_MESSAGE);
        assert!(!surface.is_visible(Region::Loading));
    }

    #[tokio::test]
    async fn test_load_catalog_success() {
        let url = serve(catalog_router()).await;
        let client = reqwest::Client::new();
        let mut surface = MemorySurface::new();

        let catalog = load_catalog(&client, &url, &mut surface).await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].title, "Alpha");
        assert!(!surface.is_visible(Region::Loading));
        assert!(!surface.is_visible(Region::Error));
    }

    #[tokio::test]
    async fn test_load_catalog_http_error() {
        let url = serve(Router::new().route(
            "/books",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
        ))
        .await;
        let client = reqwest::Client::new();
        let mut surface = MemorySurface::new();

        let catalog = load_catalog(&client, &url, &mut surface).await;

        assert!(catalog.is_none());
        assert_failed(&surface);
    }

    #[tokio::test]
    async fn test_fetch_catalog_http_error_is_network() {
        let url =
            serve(Router::new().route("/books", get(|| async { StatusCode::NOT_FOUND }))).await;
        let client = reqwest::Client::new();

        let result = fetch_catalog(&client, &url).await;

        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn test_load_catalog_malformed_body() {
        let url = serve(Router::new().route("/books", get(|| async { "<html>oops</html>" }))).await;
        let client = reqwest::Client::new();
        let mut surface = MemorySurface::new();

        let catalog = load_catalog(&client, &url, &mut surface).await;

        assert!(catalog.is_none());
        assert_failed(&surface);
    }

    #[tokio::test]
    async fn test_fetch_catalog_missing_results() {
        let url = serve(Router::new().route(
            "/books",
            get(|| async { Json(serde_json::json!({"count": 0})) }),
        ))
        .await;
        let client = reqwest::Client::new();

        let result = fetch_catalog(&client, &url).await;

        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_load_catalog_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = reqwest::Client::new();
        let mut surface = MemorySurface::new();

        let catalog = load_catalog(&client, &format!("http://{addr}/books"), &mut surface).await;

        assert!(catalog.is_none());
        assert_failed(&surface);
    }

    #[tokio::test]
    async fn test_load_catalog_detached_surface() {
        let url = serve(catalog_router()).await;
        let client = reqwest::Client::new();
        let mut surface = MemorySurface::new();
        surface.detach();

        let catalog = load_catalog(&client, &url, &mut surface).await;

        assert!(catalog.is_none());
        assert!(!surface.is_visible(Region::Error));
    }

    #[tokio::test]
    async fn test_require_catalog_clears_loading_frame() {
        let url = serve(catalog_router()).await;
        let config = Config {
            api_url: url,
            ..Default::default()
        };
        let mut surface = TerminalSurface::new();

        let catalog = require_catalog(&config, &mut surface).await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(!surface.state().is_visible(Region::Loading));
        assert!(!surface.render(1).contains("Loading books..."));
    }

    #[tokio::test]
    async fn test_require_catalog_renders_error_frame() {
        let url = serve(Router::new().route(
            "/books",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;
        let config = Config {
            api_url: url,
            ..Default::default()
        };
        let mut surface = TerminalSurface::new();

        let result = require_catalog(&config, &mut surface).await;

        let report = result.unwrap_err().to_string();
        assert!(report.contains("HTTP 500"));
        assert_failed(surface.state());
        let frame = surface.render(1);
        assert!(frame.contains(LOAD_ERROR_MESSAGE));
        assert!(!frame.contains("Loading books..."));
    }
}
