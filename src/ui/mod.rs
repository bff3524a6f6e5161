pub mod layout;
mod menu;
mod quiz;
mod summary;

pub use layout::{QuizLayout, calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::{draw_menu, quiz_display_name};
pub use quiz::{draw_quit_confirmation, draw_quiz, status_style};
pub use summary::draw_summary;
