pub mod answers;
pub mod bank;
pub mod config;
pub mod error;
pub mod grading;
pub mod logger;
pub mod models;
pub mod navigation;
pub mod session;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use answers::AnswerState;
pub use bank::{QuestionBank, list_quiz_files, load_quiz, parse_quiz};
pub use config::Config;
pub use error::QuizError;
pub use grading::{grade, option_label};
pub use models::{
    AppState, ExamSummary, Grade, Question, QuestionId, QuestionKind, QuestionStatus, Selection,
    StateChange,
};
pub use navigation::Navigator;
pub use session::{QuizSession, handle_quiz_input, handle_quiz_mouse, handle_summary_input};
pub use ui::{QuizLayout, draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
