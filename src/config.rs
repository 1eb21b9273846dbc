//! Loading service configuration (UI defaults + optional question bank) from TOML.
//!
//! See `AppConfig` for the expected schema. The grading table and the book
//! catalog are built in and cannot be overridden here.

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::domain::{AnswerOption, Question};
use crate::seeds::default_questions;

pub const DEFAULT_PREFERENCE_DIR: &str = "./data/ui-mode";
pub const DEFAULT_IDLE_TTL_SECS: u64 = 3600;
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub ui: UiCfg,
  #[serde(default)]
  pub assessment: AssessmentCfg,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UiCfg {
  /// Width assumed until a client reports its viewport.
  #[serde(default = "default_viewport_width")]
  pub default_viewport_width: u32,
  /// Directory holding one preference file per client.
  #[serde(default)]
  pub preference_dir: Option<String>,
  /// A client's controller is dropped after this long without a request.
  #[serde(default = "default_idle_ttl_secs")]
  pub client_idle_secs: u64,
}

impl Default for UiCfg {
  fn default() -> Self {
    Self {
      default_viewport_width: default_viewport_width(),
      preference_dir: None,
      client_idle_secs: default_idle_ttl_secs(),
    }
  }
}

fn default_viewport_width() -> u32 { 1024 }
fn default_idle_ttl_secs() -> u64 { DEFAULT_IDLE_TTL_SECS }

/// Question bank override. Empty means "use the built-in five questions".
#[derive(Clone, Debug, Deserialize)]
pub struct AssessmentCfg {
  #[serde(default)]
  pub questions: Vec<QuestionCfg>,
  /// HTTP assessment sessions expire after this long without an answer.
  #[serde(default = "default_idle_ttl_secs")]
  pub session_ttl_secs: u64,
}

impl Default for AssessmentCfg {
  fn default() -> Self {
    Self { questions: Vec::new(), session_ttl_secs: default_idle_ttl_secs() }
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuestionCfg {
  pub text: String,
  #[serde(default)]
  pub options: Vec<AnswerOption>,
}

impl AppConfig {
  pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(s)
  }

  /// Configured questions, skipping unusable ones; built-in bank if none remain.
  pub fn question_bank(&self) -> Vec<Question> {
    let mut bank = Vec::new();
    for (idx, q) in self.assessment.questions.iter().enumerate() {
      if q.options.is_empty() {
        error!(target: "assessment", idx, text = %q.text, "Skipping configured question: no options.");
        continue;
      }
      bank.push(Question { text: q.text.clone(), options: q.options.clone() });
    }
    if bank.is_empty() {
      if !self.assessment.questions.is_empty() {
        warn!(target: "assessment", "No usable configured questions; using built-in bank.");
      }
      return default_questions();
    }
    info!(target: "assessment", count = bank.len(), "Using configured question bank");
    bank
  }

  /// Preference directory: env `UI_PREFERENCE_DIR`, then TOML, then default.
  pub fn preference_dir(&self) -> String {
    std::env::var("UI_PREFERENCE_DIR")
      .ok()
      .or_else(|| self.ui.preference_dir.clone())
      .unwrap_or_else(|| DEFAULT_PREFERENCE_DIR.to_string())
  }
}

pub fn static_dir_from_env() -> String {
  std::env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string())
}

/// Attempt to load `AppConfig` from LEVELS_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_app_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("LEVELS_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match AppConfig::from_toml(&s) {
      Ok(cfg) => {
        info!(target: "reading_levels", %path, "Loaded config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "reading_levels", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "reading_levels", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
