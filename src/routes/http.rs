//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, instrument};

use crate::books::recommended_books;
use crate::error::ApiError;
use crate::logic::*;
use crate::protocol::*;
use crate::seeds::{find_system_info, SYSTEMS_INFO};
use crate::state::{AnswerOutcome, AppState};
use crate::ui_mode::UiModeSnapshot;
use crate::validate::validate_client_id;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

/// Comparison table, optionally narrowed by CEFR label.
#[instrument(level = "info", skip(state))]
pub async fn http_list_levels(
  State(state): State<Arc<AppState>>,
  Query(q): Query<CefrQuery>,
) -> impl IntoResponse {
  let filter = q.cefr.unwrap_or_default();
  let levels: Vec<_> = state.table.find_levels_by_cefr(&filter).into_iter().cloned().collect();
  info!(target: "lookup", %filter, count = levels.len(), "HTTP comparison table served");
  Json(LevelsOut { levels })
}

#[instrument(level = "info", skip(state))]
pub async fn http_levels_by_lexile(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LexileQuery>,
) -> Result<Json<LevelResultOut>, ApiError> {
  Ok(Json(search_by_lexile(&state.table, &q.value)?))
}

#[instrument(level = "info", skip(state))]
pub async fn http_levels_by_grade(
  State(state): State<Arc<AppState>>,
  Query(q): Query<GradeQuery>,
) -> Result<Json<GradeSearchOut>, ApiError> {
  Ok(Json(search_by_grade(&state.table, &q.grade)?))
}

#[instrument(level = "info", skip(state))]
pub async fn http_levels_by_cefr(
  State(state): State<Arc<AppState>>,
  Query(q): Query<CefrQuery>,
) -> impl IntoResponse {
  let cefr = q.cefr.unwrap_or_default();
  let levels = state.table.find_levels_by_cefr(&cefr).into_iter().cloned().collect();
  Json(LevelsOut { levels })
}

#[instrument(level = "info", skip(state))]
pub async fn http_levels_by_cambridge(
  State(state): State<Arc<AppState>>,
  Query(q): Query<CambridgeQuery>,
) -> impl IntoResponse {
  let levels = state.table.find_levels_by_cambridge(&q.exam).into_iter().cloned().collect();
  Json(LevelsOut { levels })
}

#[instrument(level = "info", skip(state))]
pub async fn http_level_by_oxford(
  State(state): State<Arc<AppState>>,
  Query(q): Query<OxfordQuery>,
) -> Result<Json<LevelResultOut>, ApiError> {
  let level = state
    .table
    .find_level_by_oxford(&q.level)
    .ok_or_else(|| ApiError::not_found(format!("Unknown Oxford level: {}", q.level)))?;
  Ok(Json(level_result(Some(level))))
}

#[instrument(level = "info")]
pub async fn http_books(Query(q): Query<BooksQuery>) -> impl IntoResponse {
  let books: Vec<_> = recommended_books(&q.oxford, &q.raz, &q.heinemann).into_iter().cloned().collect();
  info!(target: "lookup", count = books.len(), "HTTP books served");
  Json(BooksOut { books })
}

#[instrument(level = "info")]
pub async fn http_systems() -> impl IntoResponse { Json(SYSTEMS_INFO) }

#[instrument(level = "info")]
pub async fn http_system(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
  find_system_info(&id)
    .map(Json)
    .ok_or_else(|| ApiError::not_found(format!("Unknown grading system: {}", id)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_start_assessment(
  State(state): State<Arc<AppState>>,
) -> Result<Json<AssessmentStartOut>, ApiError> {
  let (session_id, question) = state.open_assessment().await?;
  Ok(Json(AssessmentStartOut { session_id, question }))
}

#[instrument(level = "info", skip(state, body), fields(option = body.option))]
pub async fn http_answer_assessment(
  State(state): State<Arc<AppState>>,
  Path(session_id): Path<String>,
  Json(body): Json<AssessmentAnswerIn>,
) -> Result<Json<AssessmentAnswerOut>, ApiError> {
  let outcome = state
    .answer_assessment(&session_id, body.option)
    .await
    .ok_or_else(|| ApiError::not_found(format!("Unknown assessment session: {}", session_id)))??;
  let out = match outcome {
    AnswerOutcome::Next(question) => AssessmentAnswerOut::Next { question },
    AnswerOutcome::Completed(lexile) => {
      info!(target: "assessment", %session_id, lexile, "HTTP assessment completed");
      AssessmentAnswerOut::Completed { lexile, result: assessment_result(&state.table, lexile) }
    }
  };
  Ok(Json(out))
}

#[instrument(level = "info", skip(state))]
pub async fn http_cancel_assessment(
  State(state): State<Arc<AppState>>,
  Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
  if state.cancel_assessment(&session_id).await {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::not_found(format!("Unknown assessment session: {}", session_id)))
  }
}

// UI mode is per client: the id in the path picks the controller and its preference slot.

#[instrument(level = "info", skip(state))]
pub async fn http_get_ui_mode(
  State(state): State<Arc<AppState>>,
  Path(client_id): Path<String>,
) -> Result<Json<UiModeSnapshot>, ApiError> {
  validate_client_id(&client_id)?;
  Ok(Json(state.with_ui_mode(&client_id, |ui| ui.snapshot()).await))
}

#[instrument(level = "info", skip(state))]
pub async fn http_put_ui_mode(
  State(state): State<Arc<AppState>>,
  Path(client_id): Path<String>,
  Json(body): Json<UiModeIn>,
) -> Result<Json<UiModeSnapshot>, ApiError> {
  validate_client_id(&client_id)?;
  let snapshot = state
    .with_ui_mode(&client_id, |ui| {
      ui.apply_preference(body.mode);
      ui.snapshot()
    })
    .await;
  Ok(Json(snapshot))
}

#[instrument(level = "info", skip(state))]
pub async fn http_toggle_ui_mode(
  State(state): State<Arc<AppState>>,
  Path(client_id): Path<String>,
) -> Result<Json<UiModeSnapshot>, ApiError> {
  validate_client_id(&client_id)?;
  let snapshot = state
    .with_ui_mode(&client_id, |ui| {
      ui.toggle_mode();
      ui.snapshot()
    })
    .await;
  Ok(Json(snapshot))
}

#[instrument(level = "info", skip(state, body), fields(width = body.width))]
pub async fn http_viewport(
  State(state): State<Arc<AppState>>,
  Path(client_id): Path<String>,
  Json(body): Json<ViewportIn>,
) -> Result<Json<UiModeSnapshot>, ApiError> {
  validate_client_id(&client_id)?;
  let snapshot = state
    .with_ui_mode(&client_id, |ui| {
      ui.on_resize(body.width);
      ui.snapshot()
    })
    .await;
  Ok(Json(snapshot))
}
