use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Body returned by `/malformed`: valid status, unparsable JSON.
pub const MALFORMED_BODY: &str = r#"{"invalid json"#;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub brand: String,
    pub category: String,
}

/// A created product as the server reports it: the submitted fields plus
/// the identifier it assigned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredProduct {
    pub id: Uuid,
    #[serde(flatten)]
    pub product: Product,
}

pub type Db = Arc<RwLock<HashMap<Uuid, StoredProduct>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/products", get(list_products))
        .route("/products/add", post(add_product))
        .route("/echo/{status}", post(echo))
        .route("/malformed", post(malformed))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_products(State(db): State<Db>) -> Json<Vec<StoredProduct>> {
    let products = db.read().await;
    Json(products.values().cloned().collect())
}

async fn add_product(
    State(db): State<Db>,
    Json(product): Json<Product>,
) -> (StatusCode, Json<StoredProduct>) {
    let stored = StoredProduct {
        id: Uuid::new_v4(),
        product,
    };
    tracing::info!(id = %stored.id, title = %stored.product.title, "product added");
    db.write().await.insert(stored.id, stored.clone());
    (StatusCode::CREATED, Json(stored))
}

/// Reply with the requested status and the request body unchanged.
async fn echo(Path(status): Path<u16>, body: Bytes) -> impl IntoResponse {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST);
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

async fn malformed() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        MALFORMED_BODY,
    )
}
