use serde::Deserialize;
use std::collections::BTreeSet;

pub type QuestionId = u32;

/// Option indices chosen for one question, kept in ascending order.
pub type Selection = BTreeSet<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Single,
    Multiple,
    Boolean,
}

impl QuestionKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionKind::Single => "Single choice",
            QuestionKind::Multiple => "Multiple choice",
            QuestionKind::Boolean => "True / False",
        }
    }

    /// Whether a new choice replaces the previous one instead of toggling.
    pub fn is_exclusive(&self) -> bool {
        match self {
            QuestionKind::Single | QuestionKind::Boolean => true,
            QuestionKind::Multiple => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub text: String,
    pub options: Vec<String>,
    /// Answer key labels, sorted ascending.
    pub answer: Vec<char>,
    pub explanation: Option<String>,
}

impl Question {
    pub fn answer_string(&self) -> String {
        self.answer.iter().collect()
    }

    pub fn is_correct_option(&self, index: usize) -> bool {
        crate::grading::option_label(index).is_some_and(|label| self.answer.contains(&label))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Wrong,
}

/// Fill colour of a question in the overview grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    Unanswered,
    Answered,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamSummary {
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
    pub score: u32,
}

impl ExamSummary {
    pub fn accuracy(&self) -> String {
        format!("{}%", self.score)
    }
}

/// What a session mutation touched, so the event loop knows to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Navigated { from: usize, to: usize },
    CursorMoved,
    SelectionChanged { index: usize },
    Graded { index: usize, grade: Grade },
    Notice,
    ExamFinished,
    SummaryDismissed,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Summary,
}
