use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarsProperty {
    pub id: String,
    pub img_src: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
}

pub type Catalog = Arc<Vec<MarsProperty>>;

/// Listings served by `app()`, in response order.
pub fn seed() -> Vec<MarsProperty> {
    const IMAGES: &str = "http://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam";
    [
        ("424905", "1000MR0044631300503690E01_DXXX.jpg", "buy", 450_000.0),
        ("424906", "1000ML0044631300305227E03_DXXX.jpg", "rent", 8_000_000.0),
        ("424907", "1000MR0044631290503689E01_DXXX.jpg", "rent", 11_000_000.0),
        ("424908", "1000ML0044631290305226E03_DXXX.jpg", "buy", 8_000_000.0),
    ]
    .into_iter()
    .map(|(id, image, kind, price)| MarsProperty {
        id: id.to_string(),
        img_src: format!("{IMAGES}/{image}"),
        kind: kind.to_string(),
        price,
    })
    .collect()
}

pub fn app() -> Router {
    app_with(seed())
}

/// Serve an arbitrary catalog at `/realestate`.
pub fn app_with(properties: Vec<MarsProperty>) -> Router {
    let catalog: Catalog = Arc::new(properties);
    Router::new()
        .route("/realestate", get(list_properties))
        .with_state(catalog)
}

/// Serve a fixed status and raw body at `/realestate`, for exercising
/// clients against broken or hostile responses.
pub fn canned(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/realestate",
        get(move || async move {
            (status, [(axum::http::header::CONTENT_TYPE, "application/json")], body)
        }),
    )
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_properties(State(catalog): State<Catalog>) -> Json<Vec<MarsProperty>> {
    tracing::debug!(count = catalog.len(), "serving properties");
    Json(catalog.to_vec())
}
