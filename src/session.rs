use crate::answers::AnswerState;
use crate::bank::QuestionBank;
use crate::logger;
use crate::models::{AppState, ExamSummary, Grade, Question, QuestionStatus, Selection, StateChange};
use crate::navigation::Navigator;
use crate::ui::layout::QuizLayout;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

pub const EMPTY_CHECK_NOTICE: &str = "Select an option first";

#[derive(Debug)]
pub struct QuizSession {
    bank: QuestionBank,
    answers: AnswerState,
    nav: Navigator,
    /// Option highlighted for keyboard selection.
    cursor: usize,
    notice: Option<String>,
    summary: Option<ExamSummary>,
}

impl QuizSession {
    pub fn new(bank: QuestionBank) -> Self {
        let nav = Navigator::new(bank.len());
        Self {
            bank,
            answers: AnswerState::new(),
            nav,
            cursor: 0,
            notice: None,
            summary: None,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn summary(&self) -> Option<&ExamSummary> {
        self.summary.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.nav.current()
    }

    pub fn current_question(&self) -> &Question {
        // The bank is never empty and the navigator stays inside it.
        &self.bank.questions()[self.nav.current()]
    }

    pub fn current_selection(&self) -> Selection {
        self.answers.selection(self.current_question().id)
    }

    pub fn current_result(&self) -> Option<Grade> {
        self.answers.result(self.current_question().id)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    pub fn status(&self, index: usize) -> QuestionStatus {
        let Some(question) = self.bank.get(index) else {
            return QuestionStatus::Unanswered;
        };
        match self.answers.result(question.id) {
            Some(Grade::Correct) => QuestionStatus::Correct,
            Some(Grade::Wrong) => QuestionStatus::Wrong,
            None if self.answers.has_answer(question.id) => QuestionStatus::Answered,
            None => QuestionStatus::Unanswered,
        }
    }

    pub fn go_to(&mut self, index: usize) -> Option<StateChange> {
        match self.nav.go_to(index) {
            Some(from) => {
                self.cursor = 0;
                self.notice = None;
                Some(StateChange::Navigated { from, to: index })
            }
            None => {
                if index >= self.bank.len() {
                    logger::log(&format!("Ignored navigation to {}", index));
                }
                None
            }
        }
    }

    pub fn step(&mut self, delta: isize) -> Option<StateChange> {
        let from = self.nav.current();
        if self.nav.step(delta).is_none() {
            logger::log(&format!("Ignored step {} from {}", delta, from));
            return None;
        }
        self.cursor = 0;
        self.notice = None;
        Some(StateChange::Navigated {
            from,
            to: self.nav.current(),
        })
    }

    pub fn move_cursor(&mut self, delta: isize) -> Option<StateChange> {
        let last = self.current_question().options.len().saturating_sub(1);
        let target = self.cursor.saturating_add_signed(delta).min(last);
        if target == self.cursor {
            return None;
        }
        self.cursor = target;
        Some(StateChange::CursorMoved)
    }

    /// Records a click on option `option` of the current question. Graded
    /// questions keep their selection.
    pub fn select_option(&mut self, option: usize) -> Option<StateChange> {
        let question = self.current_question();
        if option >= question.options.len() || self.answers.result(question.id).is_some() {
            return None;
        }
        let (id, kind) = (question.id, question.kind);
        self.answers.record_selection(id, option, kind);
        self.cursor = option;
        self.notice = None;
        logger::log(&format!("Question {}: selection now {:?}", id, self.answers.selection(id)));
        Some(StateChange::SelectionChanged {
            index: self.nav.current(),
        })
    }

    pub fn check_current(&mut self) -> Option<StateChange> {
        let index = self.nav.current();
        let question = &self.bank.questions()[index];
        if self.answers.result(question.id).is_some() {
            return None;
        }
        if !self.answers.has_answer(question.id) {
            self.notice = Some(EMPTY_CHECK_NOTICE.to_string());
            return Some(StateChange::Notice);
        }
        let grade = self.answers.grade(question)?;
        self.notice = None;
        logger::log(&format!("Question {} checked: {:?}", question.id, grade));
        Some(StateChange::Graded { index, grade })
    }

    /// Grades every touched-but-unchecked question and tallies the result.
    /// A selection toggled back to empty still grades as wrong; untouched
    /// questions count towards the total only.
    pub fn finish_exam(&mut self) -> ExamSummary {
        for question in self.bank.questions() {
            if self.answers.has_entry(question.id) {
                self.answers.grade(question);
            }
        }

        let mut correct = 0;
        let mut wrong = 0;
        for question in self.bank.iter() {
            match self.answers.result(question.id) {
                Some(Grade::Correct) => correct += 1,
                Some(Grade::Wrong) => wrong += 1,
                None => {}
            }
        }

        let total = self.bank.len();
        let score = if total == 0 {
            0
        } else {
            (correct as f64 / total as f64 * 100.0).round() as u32
        };
        let summary = ExamSummary {
            total,
            correct,
            wrong,
            score,
        };
        logger::log(&format!(
            "Exam finished: score {} ({} correct, {} wrong, {} total)",
            score, correct, wrong, total
        ));
        self.notice = None;
        self.summary = Some(summary);
        summary
    }

    pub fn dismiss_summary(&mut self) -> Option<StateChange> {
        self.summary.take().map(|_| StateChange::SummaryDismissed)
    }
}

pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Option<StateChange> {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
            None
        }
        KeyCode::Left => session.step(-1),
        KeyCode::Right => session.step(1),
        KeyCode::Home => session.go_to(0),
        KeyCode::End => session.go_to(session.navigator().last()),
        KeyCode::Up => session.move_cursor(-1),
        KeyCode::Down => session.move_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => session.select_option(session.cursor()),
        KeyCode::Char(c @ '1'..='9') => {
            let option = c as usize - '1' as usize;
            session.select_option(option)
        }
        KeyCode::Char('c') => session.check_current(),
        KeyCode::Char('s') => {
            session.finish_exam();
            *app_state = AppState::Summary;
            Some(StateChange::ExamFinished)
        }
        _ => None,
    }
}

pub fn handle_summary_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Option<StateChange> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            *app_state = AppState::Quiz;
            session.dismiss_summary()
        }
        _ => None,
    }
}

/// Left clicks on the grid jump to a question, clicks on an option row
/// select that option.
pub fn handle_quiz_mouse(
    session: &mut QuizSession,
    mouse: MouseEvent,
    layout: &QuizLayout,
) -> Option<StateChange> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let count = session.bank().len();
    if let Some(index) = layout.grid_cell_at(mouse.column, mouse.row, count, session.current_index()) {
        return session.go_to(index);
    }
    let option_count = session.current_question().options.len();
    let option = layout.option_at(mouse.column, mouse.row, option_count, session.cursor())?;
    session.select_option(option)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::parse_quiz;
    use crossterm::event::KeyModifiers;

    const QUIZ: &str = r#"[
        {"id": 1, "type": "single", "question": "Pick b", "options": ["a", "b", "c"], "answer": ["B"]},
        {"id": 2, "type": "multiple", "question": "Pick x and z", "options": ["x", "y", "z"], "answer": ["A", "C"]},
        {"id": 3, "type": "boolean", "question": "True?", "options": ["True", "False"], "answer": ["A"]}
    ]"#;

    fn session() -> QuizSession {
        QuizSession::new(parse_quiz("test", QUIZ).unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_check_single_correct() {
        let mut s = session();
        s.select_option(1);
        assert_eq!(
            s.check_current(),
            Some(StateChange::Graded {
                index: 0,
                grade: Grade::Correct
            })
        );
        assert_eq!(s.status(0), QuestionStatus::Correct);
    }

    #[test]
    fn test_check_single_wrong() {
        let mut s = session();
        s.select_option(0);
        s.check_current();
        assert_eq!(s.current_result(), Some(Grade::Wrong));
        assert_eq!(s.current_question().answer_string(), "B");
    }

    #[test]
    fn test_check_without_selection_sets_notice() {
        let mut s = session();
        assert_eq!(s.check_current(), Some(StateChange::Notice));
        assert_eq!(s.notice(), Some(EMPTY_CHECK_NOTICE));
        assert_eq!(s.current_result(), None);
        assert!(s.current_selection().is_empty());

        s.select_option(2);
        assert_eq!(s.notice(), None);
    }

    #[test]
    fn test_graded_question_is_locked() {
        let mut s = session();
        s.select_option(0);
        s.check_current();
        assert_eq!(s.select_option(1), None);
        assert_eq!(s.current_selection(), Selection::from([0]));
        assert_eq!(s.check_current(), None);
        assert_eq!(s.current_result(), Some(Grade::Wrong));
    }

    #[test]
    fn test_out_of_range_option_is_ignored() {
        let mut s = session();
        assert_eq!(s.select_option(3), None);
        assert!(s.current_selection().is_empty());
    }

    #[test]
    fn test_status_progression() {
        let mut s = session();
        s.go_to(1);
        assert_eq!(s.status(1), QuestionStatus::Unanswered);
        s.select_option(0);
        s.select_option(2);
        assert_eq!(s.status(1), QuestionStatus::Answered);
        s.check_current();
        assert_eq!(s.status(1), QuestionStatus::Correct);
    }

    #[test]
    fn test_finish_grades_only_answered() {
        let mut s = session();
        s.select_option(0);

        let summary = s.finish_exam();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.correct, 0);
        assert_eq!(summary.wrong, 1);
        assert_eq!(summary.score, 0);
        assert_eq!(s.status(1), QuestionStatus::Unanswered);
        assert_eq!(s.status(2), QuestionStatus::Unanswered);
    }

    #[test]
    fn test_finish_is_idempotent() {
        let mut s = session();
        s.select_option(1);
        s.check_current();
        s.go_to(1);
        s.select_option(0);
        s.select_option(2);
        s.go_to(2);
        s.select_option(1);

        let first = s.finish_exam();
        let second = s.finish_exam();
        assert_eq!(first, second);
        assert_eq!(first.correct, 2);
        assert_eq!(first.wrong, 1);
        assert_eq!(first.score, 67);
        assert_eq!(first.accuracy(), "67%");
    }

    #[test]
    fn test_finish_grades_toggled_off_selection_as_wrong() {
        let mut s = session();
        s.go_to(1);
        s.select_option(1);
        s.select_option(1);
        assert_eq!(s.answered_count(), 1);
        assert_eq!(s.status(1), QuestionStatus::Unanswered);

        let summary = s.finish_exam();
        assert_eq!(summary.correct, 0);
        assert_eq!(summary.wrong, 1);
        assert_eq!(s.status(1), QuestionStatus::Wrong);
    }

    #[test]
    fn test_check_toggled_off_selection_sets_notice() {
        let mut s = session();
        s.go_to(1);
        s.select_option(0);
        s.select_option(0);
        assert_eq!(s.check_current(), Some(StateChange::Notice));
        assert_eq!(s.current_result(), None);
    }

    #[test]
    fn test_navigation_resets_cursor_and_notice() {
        let mut s = session();
        s.move_cursor(2);
        s.check_current();
        assert_eq!(
            s.step(1),
            Some(StateChange::Navigated { from: 0, to: 1 })
        );
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.notice(), None);
        assert_eq!(s.step(5), None);
        assert_eq!(s.go_to(10), None);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn test_cursor_is_clamped_to_options() {
        let mut s = session();
        assert_eq!(s.move_cursor(-1), None);
        s.move_cursor(10);
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn test_keyboard_flow() {
        let mut s = session();
        let mut state = AppState::Quiz;

        handle_quiz_input(&mut s, key(KeyCode::Down), &mut state);
        handle_quiz_input(&mut s, key(KeyCode::Char(' ')), &mut state);
        handle_quiz_input(&mut s, key(KeyCode::Char('c')), &mut state);
        assert_eq!(s.current_result(), Some(Grade::Correct));

        handle_quiz_input(&mut s, key(KeyCode::Right), &mut state);
        handle_quiz_input(&mut s, key(KeyCode::Char('1')), &mut state);
        handle_quiz_input(&mut s, key(KeyCode::Char('3')), &mut state);
        assert_eq!(s.current_selection(), Selection::from([0, 2]));

        handle_quiz_input(&mut s, key(KeyCode::End), &mut state);
        assert_eq!(s.current_index(), 2);
        handle_quiz_input(&mut s, key(KeyCode::Right), &mut state);
        assert_eq!(s.current_index(), 2);

        handle_quiz_input(&mut s, key(KeyCode::Char('s')), &mut state);
        assert_eq!(state, AppState::Summary);
        assert_eq!(s.summary().map(|sum| sum.correct), Some(2));

        handle_summary_input(&mut s, key(KeyCode::Enter), &mut state);
        assert_eq!(state, AppState::Quiz);
        assert!(s.summary().is_none());
        assert_eq!(s.status(1), QuestionStatus::Correct);

        handle_quiz_input(&mut s, key(KeyCode::Esc), &mut state);
        assert_eq!(state, AppState::QuizQuitConfirm);
    }

    #[test]
    fn test_mouse_clicks() {
        use ratatui::layout::Rect;

        let mut s = session();
        let layout = crate::ui::layout::calculate_quiz_chunks(Rect::new(0, 0, 100, 40));
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        let grid = layout.grid_area;
        let third_cell = click(grid.x + 1 + 2 * crate::ui::layout::GRID_CELL_WIDTH, grid.y + 1);
        assert_eq!(
            handle_quiz_mouse(&mut s, third_cell, &layout),
            Some(StateChange::Navigated { from: 0, to: 2 })
        );

        let options = layout.options_area;
        let second_option = click(options.x + 2, options.y + 2);
        handle_quiz_mouse(&mut s, second_option, &layout);
        assert_eq!(s.current_selection(), Selection::from([1]));
    }
}
