//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{BookRecommendation, GradingLevel, Question};
use crate::ui_mode::{UiModeSnapshot, UserPreference};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    LexileSearch {
        value: String,
    },
    GradeSearch {
        grade: String,
    },
    StartAssessment,
    AnswerAssessment {
        option: usize,
    },
    CancelAssessment,
    Viewport {
        width: u32,
    },
    SetUiMode {
        mode: UserPreference,
    },
    ToggleUiMode,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    LevelResult {
        result: LevelResultOut,
    },
    GradeResult {
        result: GradeSearchOut,
    },
    Question {
        question: QuestionOut,
    },
    AssessmentComplete {
        lexile: i32,
        result: LevelResultOut,
    },
    AssessmentCancelled,
    UiMode {
        state: UiModeSnapshot,
    },
    Error {
        message: String,
    },
}

/// A resolved level (if any) together with the books that fit it.
#[derive(Debug, Serialize)]
pub struct LevelResultOut {
    pub level: Option<GradingLevel>,
    pub books: Vec<BookRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct GradeSearchOut {
    pub matches: Vec<GradingLevel>,
    /// First match, as shown on the result card.
    pub result: LevelResultOut,
}

/// Question as presented to the test taker; option scores stay server-side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOut {
    pub index: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<String>,
}

pub fn question_out(index: usize, total: usize, q: &Question) -> QuestionOut {
    QuestionOut {
        index,
        total,
        text: q.text.clone(),
        options: q.options.iter().map(|o| o.text.clone()).collect(),
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct CefrQuery {
    #[serde(default)]
    pub cefr: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LexileQuery {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct GradeQuery {
    #[serde(default)]
    pub grade: String,
}

#[derive(Debug, Deserialize)]
pub struct CambridgeQuery {
    #[serde(default)]
    pub exam: String,
}

#[derive(Debug, Deserialize)]
pub struct OxfordQuery {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct BooksQuery {
    #[serde(default)]
    pub oxford: String,
    #[serde(default)]
    pub raz: String,
    #[serde(default)]
    pub heinemann: String,
}

#[derive(Debug, Serialize)]
pub struct LevelsOut {
    pub levels: Vec<GradingLevel>,
}

#[derive(Debug, Serialize)]
pub struct BooksOut {
    pub books: Vec<BookRecommendation>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentStartOut {
    pub session_id: String,
    pub question: QuestionOut,
}

#[derive(Debug, Deserialize)]
pub struct AssessmentAnswerIn {
    pub option: usize,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssessmentAnswerOut {
    Next { question: QuestionOut },
    Completed { lexile: i32, result: LevelResultOut },
}

/// `/ws?client=<id>`: reuse the UI mode saved for that client.
#[derive(Debug, Deserialize)]
pub struct WsConnectQuery {
    #[serde(default)]
    pub client: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UiModeIn {
    pub mode: UserPreference,
}

#[derive(Debug, Deserialize)]
pub struct ViewportIn {
    pub width: u32,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
