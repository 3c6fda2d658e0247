use crate::error::ScrapeError;
use crate::fetchers::Fetcher;
use crate::service::{ScrapeOutcome, ScrapeService};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Body of `POST /scraper/scrape`; unknown fields are ignored
#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilesResponse {
    pub message: String,
    pub files: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub time_stamp: String,
}

/// Error body in the `{statusCode, message, error}` shape clients expect
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

/// Maps a failure to its HTTP status and client-facing message
pub struct ApiError(StatusCode, String);

impl From<ScrapeError> for ApiError {
    fn from(error: ScrapeError) -> Self {
        match &error {
            ScrapeError::InvalidUrl(_) => {
                ApiError(StatusCode::BAD_REQUEST, "url must be a URL address".to_string())
            }
            ScrapeError::Unreachable { .. } | ScrapeError::HttpStatus { .. } => {
                ApiError(StatusCode::BAD_REQUEST, error.to_string())
            }
            _ => ApiError(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Unexpected error during scraping: {}", error),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(status, message) = self;
        let body = ErrorResponse {
            status_code: status.as_u16(),
            message,
            error: status.canonical_reason().unwrap_or("Error").to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Routes under `/scraper`
pub fn router<F>(service: Arc<ScrapeService<F>>) -> Router
where
    F: Fetcher + Send + Sync + 'static,
{
    let scraper_routes = Router::new()
        .route("/scrape", post(scrape_webpage::<F>))
        .route("/files", get(scraped_files::<F>))
        .route("/hello", get(health_check));

    Router::new()
        .nest("/scraper", scraper_routes)
        .with_state(service)
}

/// Bind `addr` and serve until the process stops
pub async fn serve<F>(service: Arc<ScrapeService<F>>, addr: &str) -> Result<(), ScrapeError>
where
    F: Fetcher + Send + Sync + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    ::log::info!("Scraper service listening on {}", listener.local_addr()?);
    axum::serve(listener, router(service)).await?;
    Ok(())
}

async fn scrape_webpage<F>(
    State(service): State<Arc<ScrapeService<F>>>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<ScrapeOutcome>, ApiError>
where
    F: Fetcher + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        ::log::debug!("Rejected scrape request body: {}", rejection);
        ApiError(StatusCode::BAD_REQUEST, "url must be a URL address".to_string())
    })?;

    let outcome = service.scrape_and_save(&request.url).await?;
    Ok(Json(outcome))
}

async fn scraped_files<F>(State(service): State<Arc<ScrapeService<F>>>) -> Json<FilesResponse>
where
    F: Fetcher + Send + Sync + 'static,
{
    let files = service.scraped_files().await;
    Json(FilesResponse {
        message: "scraped files retrieved successfully".to_string(),
        count: files.len(),
        files,
    })
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "scraper service is running".to_string(),
        time_stamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
