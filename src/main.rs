use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use interactive_quiz::{
    AppState, Config, QuizLayout, QuizSession, draw_menu, draw_quit_confirmation, draw_quiz,
    draw_summary, handle_quiz_input, handle_quiz_mouse, handle_summary_input, list_quiz_files,
    load_quiz, logger,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;

type QuizTerminal = Terminal<CrosstermBackend<io::Stdout>>;

enum KeyOutcome {
    Quit,
    Changed,
    Unchanged,
}

struct App {
    state: AppState,
    quiz_files: Vec<PathBuf>,
    selected_file_index: usize,
    menu_error: Option<String>,
    session: Option<QuizSession>,
    /// False when the bank came from the command line or was the only one.
    has_menu: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env_and_args();
    logger::init(&config.log_file);
    logger::log(&format!("Starting with {:?}", config));

    // Banks picked without the menu are loaded before the terminal is taken
    // over, so a malformed file is reported on plain stderr.
    let mut app = match &config.quiz_file {
        Some(path) => App::with_session(QuizSession::new(load_quiz(path)?)),
        None => {
            let quiz_files = list_quiz_files(&config.quiz_dir);
            if quiz_files.len() == 1 {
                App::with_session(QuizSession::new(load_quiz(&quiz_files[0])?))
            } else {
                App {
                    state: AppState::Menu,
                    quiz_files,
                    selected_file_index: 0,
                    menu_error: None,
                    session: None,
                    has_menu: true,
                }
            }
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

impl App {
    fn with_session(session: QuizSession) -> Self {
        Self {
            state: AppState::Quiz,
            quiz_files: Vec::new(),
            selected_file_index: 0,
            menu_error: None,
            session: Some(session),
            has_menu: false,
        }
    }

    fn start_selected_quiz(&mut self) {
        let Some(path) = self.quiz_files.get(self.selected_file_index) else {
            return;
        };
        match load_quiz(path) {
            Ok(bank) => {
                logger::log(&format!("Loaded {} ({} questions)", path.display(), bank.len()));
                self.session = Some(QuizSession::new(bank));
                self.menu_error = None;
                self.state = AppState::Quiz;
            }
            Err(e) => {
                logger::log(&format!("Failed to load {}: {}", path.display(), e));
                self.menu_error = Some(e.to_string());
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }

        let change = match self.state {
            AppState::Menu => match key.code {
                KeyCode::Up if self.selected_file_index > 0 => {
                    self.selected_file_index -= 1;
                    true
                }
                KeyCode::Down
                    if self.selected_file_index < self.quiz_files.len().saturating_sub(1) =>
                {
                    self.selected_file_index += 1;
                    true
                }
                KeyCode::Enter => {
                    self.start_selected_quiz();
                    true
                }
                KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
                _ => false,
            },
            AppState::Quiz => match &mut self.session {
                Some(session) => handle_quiz_input(session, key, &mut self.state).is_some(),
                None => false,
            },
            AppState::Summary => match &mut self.session {
                Some(session) => handle_summary_input(session, key, &mut self.state).is_some(),
                None => false,
            },
            AppState::QuizQuitConfirm => match key.code {
                KeyCode::Char('y') => {
                    if !self.has_menu {
                        return KeyOutcome::Quit;
                    }
                    self.session = None;
                    self.state = AppState::Menu;
                    true
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.state = AppState::Quiz;
                    true
                }
                _ => false,
            },
        };

        if change {
            KeyOutcome::Changed
        } else {
            KeyOutcome::Unchanged
        }
    }
}

fn run(terminal: &mut QuizTerminal, app: &mut App) -> io::Result<()> {
    let mut needs_redraw = true;
    let mut last_layout: Option<QuizLayout> = None;

    loop {
        if needs_redraw {
            terminal.draw(|f| match app.state {
                AppState::Menu => draw_menu(
                    f,
                    &app.quiz_files,
                    app.selected_file_index,
                    app.menu_error.as_deref(),
                ),
                AppState::Quiz | AppState::Summary | AppState::QuizQuitConfirm => {
                    if let Some(session) = &app.session {
                        last_layout = Some(draw_quiz(f, session));
                        if app.state == AppState::QuizQuitConfirm {
                            draw_quit_confirmation(f);
                        } else if let Some(summary) = session.summary() {
                            draw_summary(f, summary);
                        }
                    }
                }
            })?;
            needs_redraw = false;
        }

        let previous_state = app.state;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match app.handle_key(key) {
                KeyOutcome::Quit => break,
                KeyOutcome::Changed => needs_redraw = true,
                KeyOutcome::Unchanged => {}
            },
            Event::Mouse(mouse) => {
                if let (AppState::Quiz, Some(session), Some(layout)) =
                    (app.state, app.session.as_mut(), last_layout.as_ref())
                {
                    if let Some(change) = handle_quiz_mouse(session, mouse, layout) {
                        logger::log(&format!("Mouse: {:?}", change));
                        needs_redraw = true;
                    }
                }
            }
            Event::Resize(_, _) => needs_redraw = true,
            _ => {}
        }

        if app.state != previous_state {
            needs_redraw = true;
        }
    }

    Ok(())
}
