//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.
//!
//! A connection is one UI instance: it owns its assessment session and its
//! UI mode controller, and its `viewport` messages are that controller's
//! resize notifications.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    Query, State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug, warn};
use uuid::Uuid;

use crate::assessment::AssessmentSession;
use crate::logic::*;
use crate::protocol::{question_out, ClientWsMessage, ServerWsMessage, WsConnectQuery};
use crate::state::{outcome, AnswerOutcome, AppState};
use crate::ui_mode::UiModeController;
use crate::validate::validate_client_id;

/// Per-connection state.
pub(crate) struct WsClient {
  client_id: String,
  session: Option<AssessmentSession>,
  ui: UiModeController,
}

impl WsClient {
  pub(crate) async fn open(state: &AppState, client_id: String) -> Self {
    let ui = state.open_ui_controller(&client_id).await;
    Self { client_id, session: None, ui }
  }
}

#[instrument(level = "info", skip(ws, state))]
pub async fn ws_upgrade(
  ws: WebSocketUpgrade,
  State(state): State<Arc<AppState>>,
  Query(q): Query<WsConnectQuery>,
) -> impl IntoResponse {
  info!(target: "reading_levels", "WebSocket upgrade requested");
  let client_id = match q.client {
    Some(id) if validate_client_id(&id).is_ok() => id,
    Some(id) => {
      warn!(target: "reading_levels", client = %id, "Rejected client id; using an anonymous one");
      Uuid::new_v4().to_string()
    }
    None => Uuid::new_v4().to_string(),
  };
  ws.on_upgrade(move |socket| handle_ws(socket, state, client_id))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>, client_id: String) {
  info!(target: "reading_levels", "WebSocket connected");
  let mut client = WsClient::open(&state, client_id).await;

  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let out = reply_to_text(&txt, &state, &mut client).await;
        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "reading_levels", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => {
        if let Err(e) = socket.send(Message::Pong(payload)).await {
          debug!(target: "reading_levels", error = %e, "WS pong send error");
          break;
        }
      }
      Message::Close(_) => break,
      _ => {}
    }
  }
  // Dropping `client` here discards any unfinished assessment.
  info!(target: "reading_levels", abandoned_assessment = client.session.is_some(), "WebSocket disconnected");
}

/// Parse, dispatch, serialize.
pub(crate) async fn reply_to_text(txt: &str, state: &AppState, client: &mut WsClient) -> String {
  let reply_msg = match serde_json::from_str::<ClientWsMessage>(txt) {
    Ok(incoming) => {
      debug!(target: "reading_levels", "WS received: {:?}", &incoming);
      handle_client_ws(incoming, state, client).await
    }
    Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
  };

  serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  })
}

#[instrument(level = "info", skip(state, client), fields(client_id = %client.client_id))]
pub(crate) async fn handle_client_ws(
  msg: ClientWsMessage,
  state: &AppState,
  client: &mut WsClient,
) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::LexileSearch { value } => match search_by_lexile(&state.table, &value) {
      Ok(result) => ServerWsMessage::LevelResult { result },
      Err(e) => ServerWsMessage::Error { message: e.to_string() },
    },

    ClientWsMessage::GradeSearch { grade } => match search_by_grade(&state.table, &grade) {
      Ok(result) => ServerWsMessage::GradeResult { result },
      Err(e) => ServerWsMessage::Error { message: e.to_string() },
    },

    ClientWsMessage::StartAssessment => match state.new_session() {
      Ok(fresh) => {
        let question = question_out(0, fresh.total_questions(), fresh.current_question());
        client.session = Some(fresh);
        info!(target: "assessment", "WS assessment opened");
        ServerWsMessage::Question { question }
      }
      Err(e) => ServerWsMessage::Error { message: e.to_string() },
    },

    ClientWsMessage::AnswerAssessment { option } => {
      let Some(active) = client.session.as_mut() else {
        return ServerWsMessage::Error { message: "No assessment in progress.".into() };
      };
      match active.choose(option).map(|t| outcome(active, t)) {
        Ok(AnswerOutcome::Next(question)) => ServerWsMessage::Question { question },
        Ok(AnswerOutcome::Completed(lexile)) => {
          info!(target: "assessment", lexile, "WS assessment completed");
          ServerWsMessage::AssessmentComplete { lexile, result: assessment_result(&state.table, lexile) }
        }
        Err(e) => ServerWsMessage::Error { message: e.to_string() },
      }
    }

    ClientWsMessage::CancelAssessment => {
      client.session = None;
      ServerWsMessage::AssessmentCancelled
    }

    ClientWsMessage::Viewport { width } => {
      client.ui.on_resize(width);
      ServerWsMessage::UiMode { state: client.ui.snapshot() }
    }

    ClientWsMessage::SetUiMode { mode } => {
      client.ui.apply_preference(mode);
      ServerWsMessage::UiMode { state: client.ui.snapshot() }
    }

    ClientWsMessage::ToggleUiMode => {
      client.ui.toggle_mode();
      ServerWsMessage::UiMode { state: client.ui.snapshot() }
    }
  }
}
