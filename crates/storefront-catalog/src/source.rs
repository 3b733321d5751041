//! # Product Sources
//!
//! Asynchronous retrieval of the product list.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        fetch_products()                                 │
//! │                                                                         │
//! │   HttpProductSource ──── GET api_url ─────┐                            │
//! │                                           │                             │
//! │   FixtureProductSource ─ embedded / file ─┤                             │
//! │                                           ▼                             │
//! │                                   serde_json::Value                     │
//! │                                           │                             │
//! │                     [ ... ]  or  { "products": [ ... ] }                │
//! │                                           │                             │
//! │                                           ▼                             │
//! │                          storefront_core::validate_products             │
//! │                                           │                             │
//! │                                           ▼                             │
//! │                                     Vec<Product>                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A fetch either resolves to a non-empty product list or fails with a
//! [`CatalogError`] whose message is fit for display. There is no retry and
//! no cancellation; the HTTP source is bounded by its request timeout.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;
use storefront_core::validation::validate_products;
use storefront_core::Product;
use tracing::{debug, info};
use url::Url;

use crate::config::{SourceKind, SourceSettings};
use crate::error::{CatalogError, CatalogResult};

/// Fixture compiled into the binary, used when no fixture path is configured.
pub const EMBEDDED_FIXTURE: &str = include_str!("../fixtures/products.json");

/// Anything that can produce the product list.
pub trait ProductSource: Send + Sync {
    /// Retrieves the ordered product list.
    fn fetch_products(&self) -> impl Future<Output = CatalogResult<Vec<Product>>> + Send;
}

/// Turns a decoded payload into products.
///
/// Accepts a bare array or an object carrying a `products` array.
pub fn decode_products(payload: &Value) -> CatalogResult<Vec<Product>> {
    let records = match payload {
        Value::Array(_) => payload,
        Value::Object(map) => match map.get("products") {
            Some(products @ Value::Array(_)) => products,
            _ => {
                return Err(CatalogError::UnexpectedShape(
                    "expected a product list or an object with a `products` list".into(),
                ))
            }
        },
        other => {
            return Err(CatalogError::UnexpectedShape(format!(
                "expected a product list, got {}",
                json_kind(other)
            )))
        }
    };

    let products = validate_products(records);
    if products.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(products)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// HTTP Source
// =============================================================================

/// Fetches products from a remote product API.
///
/// ## Usage
/// ```rust,no_run
/// use std::time::Duration;
/// use storefront_catalog::{HttpProductSource, ProductSource};
///
/// # async fn demo() -> storefront_catalog::CatalogResult<()> {
/// let source = HttpProductSource::new("https://dummyjson.com/products", Duration::from_secs(10))?;
/// let products = source.fetch_products().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl HttpProductSource {
    pub fn new(api_url: &str, timeout: Duration) -> CatalogResult<Self> {
        let url = Url::parse(api_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(HttpProductSource {
            client,
            url,
            timeout,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn map_error(&self, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout(self.timeout.as_secs())
        } else {
            err.into()
        }
    }
}

impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        info!(url = %self.url, "Fetching products");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.map_error(e))?;
        let payload: Value = serde_json::from_str(&body)?;
        let products = decode_products(&payload)?;

        info!(count = products.len(), "Products fetched");
        Ok(products)
    }
}

// =============================================================================
// Fixture Source
// =============================================================================

/// Serves products from a static JSON fixture.
#[derive(Debug, Clone)]
pub enum FixtureProductSource {
    /// The fixture compiled into the crate.
    Embedded,

    /// A JSON file read on every fetch.
    File(PathBuf),
}

impl FixtureProductSource {
    async fn read(&self) -> CatalogResult<String> {
        match self {
            FixtureProductSource::Embedded => Ok(EMBEDDED_FIXTURE.to_string()),
            FixtureProductSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
        }
    }
}

impl ProductSource for FixtureProductSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        debug!(fixture = ?self, "Loading product fixture");

        let contents = self.read().await?;
        let payload: Value = serde_json::from_str(&contents)?;
        let products = decode_products(&payload)?;

        info!(count = products.len(), "Products loaded from fixture");
        Ok(products)
    }
}

// =============================================================================
// Configured Source
// =============================================================================

/// The source selected by configuration.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Http(HttpProductSource),
    Fixture(FixtureProductSource),
}

impl CatalogSource {
    pub fn from_settings(settings: &SourceSettings) -> CatalogResult<Self> {
        match settings.kind {
            SourceKind::Http => Ok(CatalogSource::Http(HttpProductSource::new(
                &settings.api_url,
                Duration::from_secs(settings.timeout_secs),
            )?)),
            SourceKind::Fixture => Ok(CatalogSource::Fixture(match &settings.fixture_path {
                Some(path) => FixtureProductSource::File(path.clone()),
                None => FixtureProductSource::Embedded,
            })),
        }
    }

    /// Short description for logs and the shell banner.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Http(source) => source.url().to_string(),
            CatalogSource::Fixture(FixtureProductSource::Embedded) => {
                "embedded fixture".to_string()
            }
            CatalogSource::Fixture(FixtureProductSource::File(path)) => path.display().to_string(),
        }
    }
}

impl ProductSource for CatalogSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        match self {
            CatalogSource::Http(source) => source.fetch_products().await,
            CatalogSource::Fixture(source) => source.fetch_products().await,
        }
    }
}

/// Builds the configured source and fetches the product list once.
pub async fn fetch_products(settings: &SourceSettings) -> CatalogResult<Vec<Product>> {
    CatalogSource::from_settings(settings)?.fetch_products().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use storefront_core::ProductId;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/products", addr)
    }

    fn http_source(url: &str, timeout_secs: u64) -> HttpProductSource {
        HttpProductSource::new(url, Duration::from_secs(timeout_secs)).unwrap()
    }

    fn sample() -> Value {
        json!([{
            "id": 1,
            "title": "Product 1",
            "price": 10,
            "description": "A great product",
            "thumbnail": "image.jpg",
            "rating": 4.5,
            "category": "Electronics",
            "discountPercentage": 10
        }])
    }

    #[test]
    fn test_decode_shapes() {
        assert_eq!(decode_products(&sample()).unwrap().len(), 1);
        assert_eq!(
            decode_products(&json!({ "products": sample(), "total": 1 }))
                .unwrap()
                .len(),
            1
        );

        assert!(matches!(
            decode_products(&json!({ "items": [] })),
            Err(CatalogError::UnexpectedShape(_))
        ));
        assert!(matches!(
            decode_products(&json!("nope")),
            Err(CatalogError::UnexpectedShape(_))
        ));
        assert!(matches!(decode_products(&json!([])), Err(CatalogError::Empty)));
    }

    #[tokio::test]
    async fn test_embedded_fixture() {
        let products = FixtureProductSource::Embedded.fetch_products().await.unwrap();

        assert!(!products.is_empty());
        for product in &products {
            assert!(product.id.as_number().is_some());
            assert!(!product.title.is_empty());
            assert!(product.description.is_some());
            assert!(product.thumbnail.is_some());
        }
        assert_eq!(products[0].id, ProductId::from(1));
        assert_eq!(products[0].price, 9.99);
        assert_eq!(products[0].category.as_deref(), Some("beauty"));
    }

    #[tokio::test]
    async fn test_file_fixture() {
        let path = std::env::temp_dir().join(format!(
            "storefront-fixture-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, sample().to_string()).unwrap();

        let products = FixtureProductSource::File(path.clone())
            .fetch_products()
            .await
            .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::from(1));
        assert_eq!(products[0].title, "Product 1");
        assert_eq!(products[0].price, 10.0);
        assert_eq!(products[0].description.as_deref(), Some("A great product"));
        assert_eq!(products[0].thumbnail.as_deref(), Some("image.jpg"));
        assert_eq!(products[0].rating, 4.5);
        assert_eq!(products[0].category.as_deref(), Some("Electronics"));
        assert_eq!(products[0].discount_percentage, 10.0);
    }

    #[tokio::test]
    async fn test_missing_fixture_file() {
        let err = FixtureProductSource::File(PathBuf::from("/nonexistent/products.json"))
            .fetch_products()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[tokio::test]
    async fn test_http_array() {
        let url = serve(Router::new().route("/products", get(|| async { Json(sample()) }))).await;

        let products = http_source(&url, 5).fetch_products().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Product 1");
    }

    #[tokio::test]
    async fn test_http_envelope() {
        let url = serve(Router::new().route(
            "/products",
            get(|| async { Json(json!({ "products": sample(), "total": 1, "skip": 0 })) }),
        ))
        .await;

        let products = http_source(&url, 5).fetch_products().await.unwrap();
        assert_eq!(products[0].rating, 4.5);
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let url = serve(Router::new().route(
            "/products",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let err = http_source(&url, 5).fetch_products().await.unwrap_err();

        assert!(matches!(err, CatalogError::HttpStatus { status: 500 }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_http_invalid_json() {
        let url = serve(Router::new().route("/products", get(|| async { "not json" }))).await;

        let err = http_source(&url, 5).fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[tokio::test]
    async fn test_http_timeout() {
        let url = serve(Router::new().route(
            "/products",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(sample())
            }),
        ))
        .await;

        let err = http_source(&url, 1).fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Timeout(1)));
    }

    #[tokio::test]
    async fn test_http_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = http_source(&format!("http://{}/products", addr), 5)
            .fetch_products()
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Network(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_from_settings() {
        let products = fetch_products(&SourceSettings::default()).await.unwrap();
        assert!(!products.is_empty());

        let settings = SourceSettings {
            kind: SourceKind::Http,
            api_url: "not a url".into(),
            ..SourceSettings::default()
        };
        assert!(matches!(
            fetch_products(&settings).await,
            Err(CatalogError::InvalidUrl(_))
        ));
    }
}
