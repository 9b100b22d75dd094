//! HTTP API for the grid.

use crate::node::SharedGrid;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use hexgrid_topology::{Error as GridError, Hex};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the API router.
pub fn build_router(state: SharedGrid) -> Router {
    // CORS layer for browser access
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/grid", get(list_grid))
        .route("/hex", post(create_hex))
        .route("/hex/:name", get(get_hex).delete(delete_hex))
        .route("/path", get(path_exists))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// A rejected request, rendered as `{ "error": "..." }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// HTTP status of this rejection.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<GridError> for ApiError {
    fn from(e: GridError) -> Self {
        let status = match &e {
            GridError::NotFound(_) => StatusCode::NOT_FOUND,
            GridError::DuplicateName(_) | GridError::DuplicateCoordinates { .. } => {
                StatusCode::CONFLICT
            }
            GridError::UnknownAnchor(_) | GridError::InvalidBorder(_) => StatusCode::BAD_REQUEST,
            GridError::UnsafeRemoval(_) => StatusCode::METHOD_NOT_ALLOWED,
            GridError::Inconsistent(_) | GridError::Storage(_) => {
                tracing::error!("grid failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

// --- Health endpoint ---

async fn health() -> &'static str {
    "OK"
}

// --- Grid endpoints ---

async fn list_grid(State(grid): State<SharedGrid>) -> Result<Json<Vec<Hex>>, ApiError> {
    let grid = grid.read().await;
    Ok(Json(grid.hexes()?))
}

async fn get_hex(
    State(grid): State<SharedGrid>,
    Path(name): Path<String>,
) -> Result<Json<Hex>, ApiError> {
    let grid = grid.read().await;
    Ok(Json(grid.get_hex(&name)?))
}

#[derive(Debug, Deserialize)]
struct CreateHexRequest {
    name: String,
    /// Anchor hex to attach to
    neighbor: Option<String>,
    /// Border of the anchor to attach at
    border: Option<i64>,
}

async fn create_hex(
    State(grid): State<SharedGrid>,
    Json(req): Json<CreateHexRequest>,
) -> Result<(StatusCode, Json<Hex>), ApiError> {
    // Held across the whole insert so nothing else mutates in between.
    let mut grid = grid.write().await;

    let anchor = match (req.neighbor.as_deref(), req.border) {
        (Some(neighbor), Some(border)) => Some((neighbor, border)),
        (Some(_), None) if !grid.is_empty()? => {
            return Err(ApiError::bad_request("border is required when neighbor is given"));
        }
        _ => None,
    };

    let hex = grid.add_hex(&req.name, anchor)?;
    Ok((StatusCode::CREATED, Json(hex)))
}

async fn delete_hex(
    State(grid): State<SharedGrid>,
    Path(name): Path<String>,
) -> Result<Json<Hex>, ApiError> {
    let mut grid = grid.write().await;
    Ok(Json(grid.remove_hex(&name)?))
}

// --- Path query endpoint ---

#[derive(Debug, Deserialize)]
struct PathQuery {
    from: String,
    to: String,
    excluding: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct PathResponse {
    exists: bool,
}

async fn path_exists(
    State(grid): State<SharedGrid>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, ApiError> {
    let grid = grid.read().await;
    let exists = grid.exists_path(&query.from, &query.to, &query.excluding)?;
    Ok(Json(PathResponse { exists }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::DynStore;
    use hexgrid_topology::{Border, Grid, GridIndex, HexCoord};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn empty_grid() -> SharedGrid {
        let store: DynStore = Box::new(GridIndex::new());
        Arc::new(RwLock::new(Grid::with_store(store)))
    }

    async fn add(
        grid: &SharedGrid,
        name: &str,
        neighbor: Option<&str>,
        border: Option<i64>,
    ) -> Result<Hex, ApiError> {
        let req = CreateHexRequest {
            name: name.to_string(),
            neighbor: neighbor.map(str::to_string),
            border,
        };
        let (status, Json(hex)) = create_hex(State(grid.clone()), Json(req)).await?;
        assert_eq!(status, StatusCode::CREATED);
        Ok(hex)
    }

    /// a (0,0); b (0,1); c (1,1)
    async fn small_chain() -> SharedGrid {
        let grid = empty_grid();
        add(&grid, "a", None, None).await.unwrap();
        add(&grid, "b", Some("a"), Some(3)).await.unwrap();
        add(&grid, "c", Some("b"), Some(2)).await.unwrap();
        grid
    }

    #[tokio::test]
    async fn create_and_fetch() {
        let grid = small_chain().await;

        let Json(b) = get_hex(State(grid.clone()), Path("b".to_string())).await.unwrap();
        assert_eq!(b.coord, HexCoord::new(0, 1));
        assert_eq!(b.borders.get(Border::new(0).unwrap()), Some("a"));
        assert_eq!(b.borders.get(Border::new(2).unwrap()), Some("c"));

        let Json(all) = list_grid(State(grid.clone())).await.unwrap();
        let names: Vec<_> = all.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn missing_hex_is_404() {
        let grid = small_chain().await;
        let err = get_hex(State(grid), Path("zz".to_string())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_rejections() {
        let grid = small_chain().await;

        let err = add(&grid, "b", Some("a"), Some(1)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::CONFLICT);

        let err = add(&grid, "d", Some("a"), Some(3)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::CONFLICT);

        let err = add(&grid, "d", Some("zz"), Some(1)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = add(&grid, "d", Some("a"), Some(7)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = add(&grid, "d", Some("a"), None).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unsafe_delete_is_rejected() {
        let grid = small_chain().await;

        let err = delete_hex(State(grid.clone()), Path("b".to_string())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);

        let Json(removed) = delete_hex(State(grid.clone()), Path("a".to_string())).await.unwrap();
        assert_eq!(removed.name, "a");

        let Json(b) = get_hex(State(grid.clone()), Path("b".to_string())).await.unwrap();
        assert_eq!(b.borders.get(Border::new(0).unwrap()), None);
    }

    #[tokio::test]
    async fn path_query() {
        let grid = small_chain().await;
        let query = |excluding: &str| PathQuery {
            from: "a".into(),
            to: "c".into(),
            excluding: excluding.into(),
        };

        let Json(resp) = path_exists(State(grid.clone()), Query(query("b"))).await.unwrap();
        assert_eq!(resp, PathResponse { exists: false });

        add(&grid, "d", Some("a"), Some(2)).await.unwrap();
        let Json(resp) = path_exists(State(grid.clone()), Query(query("b"))).await.unwrap();
        assert_eq!(resp, PathResponse { exists: true });
    }

    #[test]
    fn hex_json_shape() {
        let mut hex = Hex::new("b", HexCoord::new(0, 1));
        hex.borders.set(Border::new(0).unwrap(), "a");
        let json = serde_json::to_value(&hex).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "b",
                "coordinates": { "q": 0, "r": 1 },
                "borders": ["a", null, null, null, null, null],
            })
        );
    }
}
