use rusqlite::Connection;

use crate::content::{Question, question_bank};
use crate::db::quiz_results::record_quiz_result;
use crate::error::{AppError, AppResult};
use crate::logger;
use crate::models::{QuizResult, Tier};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress(usize),
    Completed,
}

/// What the quiz screen needs to render the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub number: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Next { correct: bool },
    Finished(QuizResult),
}

/// Accepts only a non-negative integer, surrounding whitespace aside.
/// Digit strings too large for `u32` saturate.
pub fn parse_age(input: &str) -> AppResult<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidInput(
            "Please enter a valid numeric age.".to_string(),
        ));
    }
    Ok(trimmed.parse::<u32>().unwrap_or(u32::MAX))
}

#[derive(Debug)]
pub struct QuizEngine {
    state: QuizState,
    tier: Option<Tier>,
    questions: &'static [Question],
    score: u32,
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEngine {
    pub fn new() -> Self {
        Self {
            state: QuizState::NotStarted,
            tier: None,
            questions: &[],
            score: 0,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Picks the tier for `age_input` and loads its bank. Allowed from any state.
    pub fn start(&mut self, age_input: &str) -> AppResult<Tier> {
        let age = parse_age(age_input)?;
        let tier = Tier::for_age(age);

        self.tier = Some(tier);
        self.questions = question_bank(tier);
        self.score = 0;
        self.state = QuizState::InProgress(0);
        Ok(tier)
    }

    pub fn current_question(&self) -> Option<QuestionView> {
        let QuizState::InProgress(index) = self.state else {
            return None;
        };
        self.questions.get(index).map(|q| QuestionView {
            prompt: q.prompt,
            options: q.options,
            number: index + 1,
            total: self.questions.len(),
        })
    }

    /// Scores `choice` against the current question and advances.
    ///
    /// Answering the last question writes the result row for `username`
    /// before the engine reports `Completed`; if that write fails the engine
    /// stays on the last question.
    pub fn answer(&mut self, conn: &Connection, username: &str, choice: &str) -> AppResult<AnswerOutcome> {
        let QuizState::InProgress(index) = self.state else {
            return Err(AppError::QuizNotActive);
        };
        let (Some(question), Some(tier)) = (self.questions.get(index), self.tier) else {
            return Err(AppError::QuizNotActive);
        };

        let correct = choice == question.answer;
        let score = self.score + u32::from(correct);
        let next = index + 1;

        if next < self.questions.len() {
            self.score = score;
            self.state = QuizState::InProgress(next);
            return Ok(AnswerOutcome::Next { correct });
        }

        let result = QuizResult {
            username: username.to_string(),
            score,
            total: self.questions.len() as u32,
            level: tier,
            time: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };
        record_quiz_result(conn, &result)?;
        logger::log(&format!(
            "Quiz completed by {}: {}/{} ({})",
            username, result.score, result.total, result.level
        ));

        self.score = score;
        self.state = QuizState::Completed;
        Ok(AnswerOutcome::Finished(result))
    }
}
