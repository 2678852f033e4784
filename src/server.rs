//! HTTP API for the vocabulary notebook
//!
//! Routes:
//! - `GET/POST /api/words`, `GET/PATCH/DELETE /api/words/{id}`
//! - `GET /api/words/review/due`, `POST /api/words/review`
//! - `GET /api/words/export`, `GET /api/stats`
//!
//! Review outcomes are validated here, before the scheduler sees them.
//! Unknown ids map to 404.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::vocabulary::export::ExportError;
use crate::vocabulary::{
    NewWord, ReviewOutcome, StoreError, Vocabulary, VocabularyStats, Word, WordId, WordUpdate,
};

/// Error returned by API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "message": "Word not found" }),
            ),
            ApiError::BadRequest(error) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "message": "Invalid request", "error": error }),
            ),
            ApiError::Internal(error) => {
                log::error!("Request failed: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "message": "Storage failure", "error": error }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

/// Review submission; `difficulty` is the outcome name
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub word_id: u64,
    pub difficulty: String,
}

/// Build the API router
pub fn router(vocabulary: Vocabulary) -> Router {
    Router::new()
        .route("/api/words", get(list_words).post(create_word))
        .route("/api/words/review", post(submit_review))
        .route("/api/words/review/due", get(due_words))
        .route("/api/words/export", get(export_words))
        .route(
            "/api/words/{id}",
            get(get_word).patch(update_word).delete(delete_word),
        )
        .route("/api/stats", get(stats))
        .layer(CorsLayer::permissive())
        .with_state(vocabulary)
}

/// Serve the API until Ctrl-C
pub async fn serve(
    vocabulary: Vocabulary,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    log::info!("Lexicon API listening on http://{}", addr);

    axum::serve(listener, router(vocabulary))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("Lexicon API shutting down");
        })
        .await?;
    Ok(())
}

/// Run a mutating store call on the blocking pool
///
/// The JSON backend writes and renames its document while holding the
/// store lock, which must not stall a runtime worker.
async fn blocking<T, F>(vocabulary: Vocabulary, f: F) -> ApiResult<T>
where
    F: FnOnce(&Vocabulary) -> ApiResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&vocabulary))
        .await
        .map_err(|e| ApiError::Internal(format!("Store task failed: {}", e)))?
}

fn require_content(field: &str, value: Option<&str>) -> ApiResult<()> {
    match value {
        Some(v) if v.trim().is_empty() => {
            log::warn!("Rejected word with empty {}", field);
            Err(ApiError::BadRequest(format!("{} must not be empty", field)))
        }
        _ => Ok(()),
    }
}

async fn create_word(
    State(vocabulary): State<Vocabulary>,
    Json(new_word): Json<NewWord>,
) -> ApiResult<Json<Word>> {
    require_content("text", Some(new_word.text.as_str()))?;
    require_content("meaning", Some(new_word.meaning.as_str()))?;
    blocking(vocabulary, move |v| Ok(Json(v.add_word(new_word)?))).await
}

async fn list_words(
    State(vocabulary): State<Vocabulary>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Word>>> {
    let words = match query.q.as_deref() {
        Some(q) => vocabulary.search_words(q)?,
        None => vocabulary.list_words()?,
    };
    Ok(Json(words))
}

async fn get_word(
    State(vocabulary): State<Vocabulary>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Word>> {
    vocabulary
        .get_word(WordId(id))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn update_word(
    State(vocabulary): State<Vocabulary>,
    Path(id): Path<u64>,
    Json(update): Json<WordUpdate>,
) -> ApiResult<Json<Word>> {
    require_content("text", update.text.as_deref())?;
    require_content("meaning", update.meaning.as_deref())?;
    blocking(vocabulary, move |v| {
        v.update_word(WordId(id), update)?
            .map(Json)
            .ok_or(ApiError::NotFound)
    })
    .await
}

async fn delete_word(
    State(vocabulary): State<Vocabulary>,
    Path(id): Path<u64>,
) -> ApiResult<Json<serde_json::Value>> {
    blocking(vocabulary, move |v| {
        if v.delete_word(WordId(id))? {
            Ok(Json(serde_json::json!({ "message": "Word deleted successfully" })))
        } else {
            Err(ApiError::NotFound)
        }
    })
    .await
}

async fn due_words(State(vocabulary): State<Vocabulary>) -> ApiResult<Json<Vec<Word>>> {
    Ok(Json(vocabulary.due_words()?))
}

async fn submit_review(
    State(vocabulary): State<Vocabulary>,
    Json(request): Json<ReviewRequest>,
) -> ApiResult<Json<Word>> {
    let outcome: ReviewOutcome = request.difficulty.parse().map_err(|e| {
        log::warn!("Rejected review for word {}: {}", request.word_id, e);
        ApiError::BadRequest(format!("{}", e))
    })?;

    blocking(vocabulary, move |v| {
        v.review(WordId(request.word_id), outcome)?
            .map(Json)
            .ok_or(ApiError::NotFound)
    })
    .await
}

async fn export_words(State(vocabulary): State<Vocabulary>) -> ApiResult<Response> {
    let mut buf = Vec::new();
    vocabulary.export_csv(&mut buf)?;
    let file_name = format!(
        "attachment; filename=\"vocabulary_{}.csv\"",
        vocabulary.now().format("%Y-%m-%d")
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, file_name),
        ],
        buf,
    )
        .into_response())
}

async fn stats(State(vocabulary): State<Vocabulary>) -> ApiResult<Json<VocabularyStats>> {
    Ok(Json(vocabulary.stats()?))
}
