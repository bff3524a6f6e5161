#[cfg(test)]
mod ui_render_tests {
    use crate::bank::parse_quiz;
    use crate::session::{EMPTY_CHECK_NOTICE, QuizSession};
    use crate::ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;

    const QUIZ: &str = r#"[
        {"id": 1, "type": "single", "question": "Which letter is second?", "options": ["alpha", "beta", "gamma"], "answer": ["B"], "explanation": "Beta follows alpha."},
        {"id": 2, "type": "multiple", "question": "Pick the odd ones", "options": ["one", "two", "three"], "answer": ["A", "C"]},
        {"id": 3, "type": "boolean", "question": "The sky is blue", "options": ["True", "False"], "answer": ["A"]}
    ]"#;

    fn create_test_session() -> QuizSession {
        QuizSession::new(parse_quiz("demo", QUIZ).unwrap())
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_quiz(session: &QuizSession) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| {
                draw_quiz(f, session);
            })
            .unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_quiz_screen_shows_question_and_options() {
        let session = create_test_session();
        let screen = render_quiz(&session);

        assert!(screen.contains("1. Single choice"));
        assert!(screen.contains("Answered: 0 / 3"));
        assert!(screen.contains("Which letter is second?"));
        assert!(screen.contains("A. alpha"));
        assert!(screen.contains("B. beta"));
        assert!(screen.contains("C. gamma"));
        assert!(screen.contains("Press c to check your answer"));
        assert!(screen.contains("Check"));
    }

    #[test]
    fn test_wrong_answer_shows_correct_label() {
        let mut session = create_test_session();
        session.select_option(0);
        session.check_current();
        let screen = render_quiz(&session);

        assert!(screen.contains("Wrong (correct answer: B)"));
        assert!(screen.contains("Beta follows alpha."));
        assert!(!screen.contains(" Check "));
    }

    #[test]
    fn test_correct_answer_without_explanation() {
        let mut session = create_test_session();
        session.go_to(1);
        session.select_option(0);
        session.select_option(2);
        session.check_current();
        let screen = render_quiz(&session);

        assert!(screen.contains("Correct"));
        assert!(screen.contains("No explanation available"));
        assert!(screen.contains("[x] A. one"));
        assert!(screen.contains("[ ] B. two"));
    }

    #[test]
    fn test_empty_check_shows_notice() {
        let mut session = create_test_session();
        session.check_current();
        let screen = render_quiz(&session);
        assert!(screen.contains(EMPTY_CHECK_NOTICE));
    }

    #[test]
    fn test_grid_lists_every_question() {
        let session = create_test_session();
        let screen = render_quiz(&session);
        assert!(screen.contains("Questions"));
        assert!(screen.contains(" 1  "));
        assert!(screen.contains(" 2  "));
        assert!(screen.contains(" 3  "));
    }

    #[test]
    fn test_options_follow_cursor_in_short_terminal() {
        let json = r#"[{"id": 1, "type": "single", "question": "Pick one",
            "options": ["opt0", "opt1", "opt2", "opt3", "opt4", "opt5", "opt6", "opt7", "opt8", "opt9"],
            "answer": ["J"]}]"#;
        let mut session = QuizSession::new(parse_quiz("long", json).unwrap());
        session.move_cursor(9);

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|f| {
                draw_quiz(f, &session);
            })
            .unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("> ( ) J. opt9"));
        assert!(!screen.contains("opt0"));
    }

    #[test]
    fn test_summary_popup() {
        let mut session = create_test_session();
        session.select_option(1);
        let summary = session.finish_exam();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| {
                draw_quiz(f, &session);
                draw_summary(f, &summary);
            })
            .unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("Exam Result"));
        assert!(screen.contains("Score: 33"));
        assert!(screen.contains("Correct: 1"));
        assert!(screen.contains("Wrong: 0"));
        assert!(screen.contains("Unanswered: 2"));
        assert!(screen.contains("Accuracy: 33%"));
    }

    #[test]
    fn test_quit_confirmation() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw_quit_confirmation(f)).unwrap();
        let screen = screen_text(&terminal);
        assert!(screen.contains("Quit Quiz"));
        assert!(screen.contains("Yes"));
    }

    #[test]
    fn test_menu_lists_quiz_files() {
        let files = vec![PathBuf::from("quizzes/rust.json"), PathBuf::from("quizzes/go.json")];
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| draw_menu(f, &files, 1, Some("question 4: answer key is empty")))
            .unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("rust"));
        assert!(screen.contains("go"));
        assert!(screen.contains("answer key is empty"));
    }

    #[test]
    fn test_menu_without_files() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw_menu(f, &[], 0, None)).unwrap();
        assert!(screen_text(&terminal).contains("No quiz files found"));
    }
}
