//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::domain::{Path, Priority};
use crate::graph::{Network, dot};
use crate::network::NetworkError;
use crate::pata::interleave;
use crate::planner::{Planner, RouteRequest};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &std::path::Path) -> Router {
    Router::new()
        .route("/", get(navi_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/route", get(plan_route))
        .route("/gv", get(graphviz))
        .route("/pata", get(pata_page))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Route planner page.
async fn navi_page(State(state): State<AppState>, Query(query): Query<RouteQuery>) -> Response {
    match render_navi(&state, query).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => err.into_html(),
    }
}

async fn render_navi(state: &AppState, query: RouteQuery) -> Result<String, AppError> {
    let priority = parse_priority(query.priority.as_deref())?;
    let world = non_empty(query.world).unwrap_or_default();
    let from = non_empty(query.from).unwrap_or_default();
    let to = non_empty(query.to).unwrap_or_default();

    let mut page = NaviTemplate {
        world: world.clone(),
        from: from.clone(),
        to: to.clone(),
        stations: Vec::new(),
        priorities: PriorityOption::all(priority),
        result: None,
    };

    if !world.is_empty() {
        let network = state.networks.load(&world).await?;
        page.stations = network.stations().map(str::to_string).collect();

        if !from.is_empty() && !to.is_empty() {
            let path = plan(&network, &from, &to, priority)?;
            page.result = Some(RouteView::new(&network, priority, path.as_ref()));
        }
    }

    page.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// List a world's stations and lines.
async fn list_stations(
    State(state): State<AppState>,
    Query(query): Query<WorldQuery>,
) -> Result<Json<StationsResponse>, AppError> {
    let network = state.networks.load(&query.world).await?;
    Ok(Json(StationsResponse::from_network(&network)))
}

/// Plan a route and return it as JSON.
async fn plan_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let priority = parse_priority(query.priority.as_deref())?;
    let world = required(query.world, "world")?;
    let from = required(query.from, "from")?;
    let to = required(query.to, "to")?;

    let network = state.networks.load(&world).await?;
    let path = plan(&network, &from, &to, priority)?;

    Ok(Json(RouteResponse::new(
        &network,
        &from,
        &to,
        priority,
        path.as_ref(),
    )))
}

/// GraphViz export of a world's graph.
async fn graphviz(
    State(state): State<AppState>,
    Query(query): Query<GraphQuery>,
) -> Result<Response, AppError> {
    let network = state.networks.load(&query.world).await?;
    let kind = dot::GraphKind::from_query(query.adj.as_deref());
    let body = dot::render(&network, kind);

    Ok((
        [(header::CONTENT_TYPE, "text/vnd.graphviz; charset=utf-8")],
        body,
    )
        .into_response())
}

/// Interleave demo page.
async fn pata_page(Query(query): Query<PataQuery>) -> Result<Html<String>, AppError> {
    let result = interleave(&query.a, &query.b);
    let page = PataTemplate {
        a: query.a,
        b: query.b,
        result,
    };
    let html = page.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// Check both endpoints exist, then plan.
fn plan(
    network: &Network,
    from: &str,
    to: &str,
    priority: Priority,
) -> Result<Option<Path>, AppError> {
    for station in [from, to] {
        if !network.has_station(station) {
            return Err(AppError::NotFound {
                message: format!("Unknown station in {}: {}", network.world(), station),
            });
        }
    }

    let request = RouteRequest::new(from, to, priority);
    let path = Planner::new(network).route(&request);
    info!(
        world = %network.world(),
        from,
        to,
        %priority,
        found = path.is_some(),
        "route request"
    );
    Ok(path)
}

fn parse_priority(value: Option<&str>) -> Result<Priority, AppError> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => v.parse().map_err(|e: crate::domain::InvalidPriority| AppError::BadRequest {
            message: e.to_string(),
        }),
        None => Ok(Priority::default()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    non_empty(value).ok_or_else(|| AppError::BadRequest {
        message: format!("Missing parameter: {name}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Upstream { message }
            | AppError::Internal { message } => message,
        }
    }

    /// Render as an HTML error page instead of JSON.
    fn into_html(self) -> Response {
        let status = self.status();
        warn!(%status, message = self.message(), "request failed");

        let page = ErrorTemplate {
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: self.message().to_string(),
        };
        let html = page
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e));
        (status, Html(html)).into_response()
    }
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::UnknownWorld(_) => AppError::NotFound {
                message: e.to_string(),
            },
            NetworkError::InvalidWorld(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            NetworkError::Io { .. } => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, message = self.message(), "request failed");

        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Line;
    use std::sync::Arc;

    fn network() -> Arc<Network> {
        Arc::new(Network::build(
            "demo",
            vec![
                Line::new("A", ["S1", "S2", "S3"]),
                Line::new("B", ["S3", "S4"]),
                Line::new("Stub", ["S9"]),
            ],
        ))
    }

    #[test]
    fn priority_defaults_to_stations() {
        assert_eq!(parse_priority(None).unwrap(), Priority::FewerStations);
        assert_eq!(parse_priority(Some("")).unwrap(), Priority::FewerStations);
        assert_eq!(
            parse_priority(Some("transfers")).unwrap(),
            Priority::FewerTransfers
        );
    }

    #[test]
    fn bad_priority_is_bad_request() {
        let err = parse_priority(Some("fastest")).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn plan_rejects_unknown_stations() {
        let net = network();

        let err = plan(&net, "S1", "Nowhere", Priority::FewerStations).unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.message().contains("Nowhere"));

        // Served only by a one-stop line, so not a known station
        let err = plan(&net, "S9", "S1", Priority::FewerStations).unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn plan_known_stations() {
        let net = network();
        let path = plan(&net, "S1", "S4", Priority::FewerTransfers).unwrap().unwrap();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn required_params() {
        assert_eq!(required(Some(" S1 ".into()), "from").unwrap(), "S1");
        let err = required(Some("  ".into()), "from").unwrap_err();
        assert_eq!(err.message(), "Missing parameter: from");
        assert!(required(None, "to").is_err());
    }

    #[test]
    fn network_errors_map_to_status() {
        let err: AppError = NetworkError::UnknownWorld("x".into()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err: AppError = NetworkError::InvalidWorld("../x".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: AppError = NetworkError::Api {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn error_responses_carry_status() {
        let response = AppError::NotFound {
            message: "gone".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::BadRequest {
            message: "bad".into(),
        }
        .into_html();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
