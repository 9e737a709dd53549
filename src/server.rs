//! Axum routes served next to the Leptos app
//!
//! - `GET /robots.txt` and `GET /sitemap.xml` from the configured site URL
//! - `/pkg/*` static bundle with precompressed variants and a standalone 404

use axum::Router;
use axum::extract::State;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use leptos::prelude::*;
use tower_http::services::ServeDir;

use crate::core::config::SiteConfig;
use crate::core::seo::{robots_txt, sitemap_xml};
use crate::ui::StaticNotFoundPage;

/// Create the crawler router
///
/// Routes:
/// - `GET /robots.txt`
/// - `GET /sitemap.xml`
pub fn seo_router(config: SiteConfig) -> Router {
    Router::new()
        .route("/robots.txt", get(robots))
        .route("/sitemap.xml", get(sitemap))
        .with_state(config)
}

/// Serve the compiled bundle under `/pkg`
///
/// Brotli and gzip variants are picked up automatically. Missing files get the
/// standalone not found document instead of an empty body.
pub fn pkg_router(site_root: &str) -> Router {
    let pkg_service = ServeDir::new(format!("{}/pkg", site_root))
        .precompressed_br()
        .precompressed_gzip()
        .not_found_service(not_found.into_service());

    Router::new().nest_service("/pkg", pkg_service)
}

async fn robots(State(config): State<SiteConfig>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&config.site_url),
    )
}

async fn sitemap(State(config): State<SiteConfig>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap_xml(&config.site_url),
    )
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "Static asset not found");
    (StatusCode::NOT_FOUND, Html(render_static_not_found()))
}

/// Render the standalone not found document outside of any request context
pub fn render_static_not_found() -> String {
    Owner::new().with(|| view! { <StaticNotFoundPage /> }.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower::ServiceExt;

    use crate::app::{App, shell};
    use crate::core::routes::{AppRoute, HomeSection};

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// The Leptos app wired the same way `main` wires it
    fn leptos_app() -> Router {
        let site_root = std::env::temp_dir().join("learnbridge-router-site");
        let leptos_options = LeptosOptions::builder()
            .output_name("learnbridge")
            .site_root(site_root.to_string_lossy().to_string())
            .build();
        let routes = generate_route_list(App);

        Router::new()
            .leptos_routes(&leptos_options, routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .fallback(leptos_axum::file_and_error_handler(shell))
            .with_state(leptos_options)
    }

    fn test_config() -> SiteConfig {
        SiteConfig {
            site_url: "https://learnbridge.app".to_string(),
            ..SiteConfig::default()
        }
    }

    #[tokio::test]
    async fn test_robots_txt() {
        let (status, body) = get_body(seo_router(test_config()), "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sitemap: https://learnbridge.app/sitemap.xml"));
    }

    #[tokio::test]
    async fn test_sitemap_xml() {
        let (status, body) = get_body(seo_router(test_config()), "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<loc>https://learnbridge.app/</loc>"));
    }

    #[tokio::test]
    async fn test_missing_pkg_file_renders_static_not_found() {
        let site_root = std::env::temp_dir().join("learnbridge-missing-site");
        let app = pkg_router(&site_root.to_string_lossy());

        let (status, body) = get_body(app, "/pkg/does-not-exist.wasm").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
        assert!(body.contains(r#"href="/""#));
    }

    #[tokio::test]
    async fn test_undefined_paths_render_not_found_page() {
        for path in ["/nope", "/pricing", "/tutors/42"] {
            assert_eq!(AppRoute::resolve(path), AppRoute::NotFound);

            let (status, body) = get_body(leptos_app(), path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert!(body.contains("Page Not Found"), "{path}");
            assert!(body.contains(r#"href="/""#), "{path}");
        }
    }

    #[tokio::test]
    async fn test_home_route_renders_every_section() {
        assert_eq!(AppRoute::resolve("/"), AppRoute::Home);

        let (status, body) = get_body(leptos_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        for section in HomeSection::ORDER {
            assert!(
                body.contains(&format!(r#"id="{}""#, section.id())),
                "missing section {}",
                section.id()
            );
        }
    }

    #[test]
    fn test_static_not_found_is_a_full_document() {
        let html = render_static_not_found();
        assert!(html.to_lowercase().contains("<!doctype html>"));
        assert!(html.contains("404"));
        assert!(html.contains("noindex"));
    }
}
