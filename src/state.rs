//! Application state: the grading table, the question bank, open assessment
//! sessions, and one UI mode controller per client.
//!
//! HTTP clients address their assessment session by id and their UI mode by
//! client id. Both registries forget entries that sit idle past their TTL.
//! WebSocket connections keep their own session and controller locally.

use std::{sync::Arc, time::{Duration, Instant}};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::assessment::{AssessmentError, AssessmentSession, Transition};
use crate::config::{load_app_config_from_env, AppConfig};
use crate::domain::Question;
use crate::lookup::GradingTable;
use crate::protocol::{question_out, QuestionOut};
use crate::registry::IdleRegistry;
use crate::ui_mode::{FilePreferenceSlots, MemoryPreferenceStore, PreferenceSlots, UiModeController};

/// What happened after an answer was recorded.
#[derive(Debug)]
pub enum AnswerOutcome {
    Next(QuestionOut),
    Completed(i32),
}

#[derive(Clone)]
pub struct AppState {
    pub table: GradingTable<'static>,
    pub questions: Arc<Vec<Question>>,
    pub sessions: Arc<RwLock<IdleRegistry<AssessmentSession>>>,
    pub ui_modes: Arc<RwLock<IdleRegistry<UiModeController>>>,
    pub slots: Arc<dyn PreferenceSlots>,
    pub default_viewport_width: u32,
}

impl AppState {
    /// Build state from env: load config, pick the question bank, open the preference directory.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_app_config_from_env().unwrap_or_default();
        let dir = cfg.preference_dir();
        info!(target: "reading_levels", %dir, "UI mode preference directory");
        Self::from_config(&cfg, Arc::new(FilePreferenceSlots::new(dir)))
    }

    pub fn from_config(cfg: &AppConfig, slots: Arc<dyn PreferenceSlots>) -> Self {
        let table = GradingTable::builtin();
        let questions = Arc::new(cfg.question_bank());
        info!(
            target: "reading_levels",
            levels = table.levels().len(),
            questions = questions.len(),
            session_ttl_secs = cfg.assessment.session_ttl_secs,
            client_idle_secs = cfg.ui.client_idle_secs,
            "Static content loaded"
        );
        Self {
            table,
            questions,
            sessions: Arc::new(RwLock::new(IdleRegistry::new(Duration::from_secs(
                cfg.assessment.session_ttl_secs,
            )))),
            ui_modes: Arc::new(RwLock::new(IdleRegistry::new(Duration::from_secs(
                cfg.ui.client_idle_secs,
            )))),
            slots,
            default_viewport_width: cfg.ui.default_viewport_width,
        }
    }

    /// Fresh session at the first question.
    pub fn new_session(&self) -> Result<AssessmentSession, AssessmentError> {
        AssessmentSession::new(self.questions.clone())
    }

    #[instrument(level = "info", skip(self))]
    pub async fn open_assessment(&self) -> Result<(String, QuestionOut), AssessmentError> {
        let session = self.new_session()?;
        let first = question_out(0, session.total_questions(), session.current_question());
        let id = Uuid::new_v4().to_string();
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let evicted = sessions.evict_idle(now);
        if evicted > 0 {
            debug!(target: "assessment", evicted, "Expired idle assessment sessions");
        }
        sessions.insert(id.clone(), session, now);
        info!(target: "assessment", session_id = %id, open = sessions.len(), "Assessment opened");
        Ok((id, first))
    }

    /// `None` when the session id is unknown or expired.
    #[instrument(level = "info", skip(self), fields(%session_id))]
    pub async fn answer_assessment(
        &self,
        session_id: &str,
        option: usize,
    ) -> Option<Result<AnswerOutcome, AssessmentError>> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        sessions.evict_idle(now);
        let session = sessions.get_mut(session_id, now)?;
        Some(session.choose(option).map(|t| outcome(session, t)))
    }

    #[instrument(level = "info", skip(self), fields(%session_id))]
    pub async fn cancel_assessment(&self, session_id: &str) -> bool {
        let removed = self.sessions.write().await.remove(session_id).is_some();
        if !removed {
            warn!(target: "assessment", %session_id, "Cancel for unknown session");
        }
        removed
    }

    pub async fn open_session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// A controller bound to `client_id`'s preference slot, loaded off the runtime threads.
    pub async fn open_ui_controller(&self, client_id: &str) -> UiModeController {
        let store = self.slots.slot(client_id);
        let width = self.default_viewport_width;
        match tokio::task::spawn_blocking(move || UiModeController::new(store, width)).await {
            Ok(controller) => controller,
            Err(e) => {
                error!(target: "ui_mode", %client_id, error = %e, "Preference load task failed; using an unsaved preference");
                UiModeController::new(Box::new(MemoryPreferenceStore::default()), width)
            }
        }
    }

    /// Run `f` against `client_id`'s controller, creating it on first use.
    pub async fn with_ui_mode<R>(
        &self,
        client_id: &str,
        f: impl FnOnce(&mut UiModeController) -> R,
    ) -> R {
        let now = Instant::now();
        {
            let mut modes = self.ui_modes.write().await;
            modes.evict_idle(now);
            if let Some(controller) = modes.get_mut(client_id, now) {
                return f(controller);
            }
        }
        let fresh = self.open_ui_controller(client_id).await;
        let mut modes = self.ui_modes.write().await;
        f(modes.get_or_insert(client_id, fresh, Instant::now()))
    }
}

pub fn outcome(session: &AssessmentSession, transition: Transition) -> AnswerOutcome {
    match transition {
        Transition::Advanced { question_index, .. } => AnswerOutcome::Next(question_out(
            question_index,
            session.total_questions(),
            session.current_question(),
        )),
        Transition::Completed { final_score } => AnswerOutcome::Completed(final_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_mode::{MemoryPreferenceSlots, UiMode};

    fn state_with(toml: &str) -> AppState {
        let cfg = AppConfig::from_toml(toml).unwrap();
        AppState::from_config(&cfg, Arc::new(MemoryPreferenceSlots::default()))
    }

    #[tokio::test]
    async fn idle_sessions_are_dropped_when_new_ones_open() {
        let state = state_with("[assessment]\nsession_ttl_secs = 0\n");
        let (first, _) = state.open_assessment().await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        for _ in 0..10 {
            state.open_assessment().await.unwrap();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(state.open_session_count().await, 1);
        assert!(state.answer_assessment(&first, 0).await.is_none());
    }

    #[tokio::test]
    async fn live_sessions_survive_other_opens() {
        let state = state_with("");
        let (first, _) = state.open_assessment().await.unwrap();
        for _ in 0..10 {
            state.open_assessment().await.unwrap();
        }
        assert_eq!(state.open_session_count().await, 11);
        assert!(matches!(
            state.answer_assessment(&first, 1).await,
            Some(Ok(AnswerOutcome::Next(_)))
        ));
    }

    #[tokio::test]
    async fn clients_get_separate_controllers() {
        let state = state_with("");
        let phone = state.with_ui_mode("phone", |ui| ui.on_resize(390)).await;
        let laptop = state.with_ui_mode("laptop", |ui| ui.on_resize(1440)).await;
        assert_eq!(phone, UiMode::Mobile);
        assert_eq!(laptop, UiMode::Desktop);
        let phone_again = state.with_ui_mode("phone", |ui| ui.snapshot()).await;
        assert_eq!(phone_again.current_mode, UiMode::Mobile);
        assert_eq!(phone_again.screen_width, 390);
    }
}
