//! Placement-test scorer.
//!
//! A session walks a fixed question bank once, summing the point value of each
//! chosen option. Answering the last question clamps the total into
//! `[0, MAX_LEXILE_ESTIMATE]`, reports it, and rewinds the session to the
//! first question so the same instance can be reused.

use std::{fmt, sync::Arc};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::Question;

pub const MAX_LEXILE_ESTIMATE: i32 = 1300;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("question bank is empty")]
    EmptyBank,
    #[error("option {index} does not exist (question has {available} options)")]
    UnknownOption { index: usize, available: usize },
}

/// Result of feeding one answer into a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Advanced { question_index: usize, score: i32 },
    Completed { final_score: i32 },
}

type CompletionHook = Box<dyn FnMut(i32) + Send + Sync>;

pub struct AssessmentSession {
    questions: Arc<Vec<Question>>,
    question_index: usize,
    score: i32,
    on_complete: Option<CompletionHook>,
}

impl fmt::Debug for AssessmentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentSession")
            .field("question_index", &self.question_index)
            .field("score", &self.score)
            .field("total", &self.questions.len())
            .finish()
    }
}

impl AssessmentSession {
    pub fn new(questions: Arc<Vec<Question>>) -> Result<Self, AssessmentError> {
        if questions.is_empty() {
            return Err(AssessmentError::EmptyBank);
        }
        Ok(Self {
            questions,
            question_index: 0,
            score: 0,
            on_complete: None,
        })
    }

    /// Register a callback that receives the clamped estimate once per finished run.
    ///
    /// For embedders driving a session directly. The HTTP and WebSocket
    /// transports read `Transition::Completed` from `choose` instead, which
    /// carries the same value.
    pub fn on_complete(mut self, hook: impl FnMut(i32) + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.question_index]
    }

    /// Answer the current question with the option at `option_index`.
    pub fn choose(&mut self, option_index: usize) -> Result<Transition, AssessmentError> {
        let options = &self.current_question().options;
        let points = options
            .get(option_index)
            .map(|o| o.score)
            .ok_or(AssessmentError::UnknownOption {
                index: option_index,
                available: options.len(),
            })?;
        Ok(self.record(points))
    }

    /// Add `points` for the current question and move on.
    pub fn record(&mut self, points: i32) -> Transition {
        let score = self.score.saturating_add(points);
        if self.question_index + 1 == self.questions.len() {
            let final_score = score.clamp(0, MAX_LEXILE_ESTIMATE);
            info!(target: "assessment", raw = score, final_score, "Assessment completed");
            if let Some(hook) = self.on_complete.as_mut() {
                hook(final_score);
            }
            self.reset();
            Transition::Completed { final_score }
        } else {
            self.question_index += 1;
            self.score = score;
            debug!(target: "assessment", question_index = self.question_index, score, "Assessment advanced");
            Transition::Advanced {
                question_index: self.question_index,
                score,
            }
        }
    }

    pub fn reset(&mut self) {
        self.question_index = 0;
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnswerOption;
    use crate::seeds::default_questions;
    use std::sync::Mutex;

    fn bank_of(n: usize) -> Arc<Vec<Question>> {
        let q = Question {
            text: "q".into(),
            options: vec![
                AnswerOption { text: "low".into(), score: -500 },
                AnswerOption { text: "high".into(), score: 700 },
            ],
        };
        Arc::new(vec![q; n])
    }

    fn run(points: &[i32]) -> (Vec<i32>, AssessmentSession) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut session = AssessmentSession::new(bank_of(points.len()))
            .unwrap()
            .on_complete(move |v| sink.lock().unwrap().push(v));
        for p in points {
            session.record(*p);
        }
        let values = seen.lock().unwrap().clone();
        (values, session)
    }

    #[test]
    fn completion_fires_once_with_the_clamped_sum() {
        let cases: &[(&[i32], i32)] = &[
            (&[50, 100, 200, 300, 400], 1050),
            (&[0, 0, 0, 0, 0], 0),
            (&[400, 400, 400, 400, 400], 1300),
            (&[-100, 0, 0, 0, 0], 0),
            (&[700, -200, 0, 0, 0], 500),
        ];
        for (points, expected) in cases {
            let (values, _) = run(points);
            assert_eq!(values, vec![*expected], "points {points:?}");
        }
    }

    #[test]
    fn session_rewinds_after_completion() {
        let (_, session) = run(&[50, 100, 200, 300, 400]);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn intermediate_steps_advance_and_accumulate() {
        let mut session = AssessmentSession::new(bank_of(3)).unwrap();
        assert_eq!(
            session.record(10),
            Transition::Advanced { question_index: 1, score: 10 }
        );
        assert_eq!(
            session.record(20),
            Transition::Advanced { question_index: 2, score: 30 }
        );
        assert_eq!(session.record(5), Transition::Completed { final_score: 35 });
    }

    #[test]
    fn single_question_bank_completes_immediately() {
        let (values, session) = run(&[2000]);
        assert_eq!(values, vec![1300]);
        assert_eq!(session.question_index(), 0);
    }

    #[test]
    fn a_reused_session_reports_each_run() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut session = AssessmentSession::new(Arc::new(default_questions()))
            .unwrap()
            .on_complete(move |v| sink.lock().unwrap().push(v));
        for choice in [1, 2, 1, 2, 1] {
            session.choose(choice).unwrap();
        }
        for _ in 0..5 {
            session.choose(0).unwrap();
        }
        assert_eq!(*seen.lock().unwrap(), vec![1050, 0]);
    }

    #[test]
    fn unknown_option_leaves_state_untouched() {
        let mut session = AssessmentSession::new(Arc::new(default_questions())).unwrap();
        session.choose(1).unwrap();
        assert_eq!(
            session.choose(9),
            Err(AssessmentError::UnknownOption { index: 9, available: 4 })
        );
        assert_eq!(session.question_index(), 1);
        assert_eq!(session.score(), 50);
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(
            AssessmentSession::new(Arc::new(Vec::new())).unwrap_err(),
            AssessmentError::EmptyBank
        );
    }
}
