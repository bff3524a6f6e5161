use crate::grading::option_label;
use crate::models::{Grade, QuestionStatus};
use crate::session::QuizSession;
use crate::ui::layout::{QuizLayout, calculate_quiz_chunks};
use crate::utils::{centered_rect, truncate_string};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn disabled_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Draws the quiz screen and returns the layout used, for mouse hit testing.
pub fn draw_quiz(f: &mut Frame, session: &QuizSession) -> QuizLayout {
    let layout = calculate_quiz_chunks(f.area());
    let index = session.current_index();
    let question = session.current_question();

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}. {}", index + 1, question.kind.display_name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(
            "   Answered: {} / {}   {}",
            session.answered_count(),
            session.bank().len(),
            session.bank().name()
        )),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let text = Paragraph::new(Text::from(question.text.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(text, layout.question_area);

    draw_options(f, session, &layout);
    draw_analysis(f, session, layout.analysis_area);
    draw_grid(f, session, &layout);

    if let Some(notice) = session.notice() {
        let notice = Paragraph::new(Span::styled(
            notice,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(notice, layout.notice_area);
    }

    draw_help(f, session, layout.help_area);
    layout
}

fn draw_options(f: &mut Frame, session: &QuizSession, layout: &QuizLayout) {
    let area = layout.options_area;
    let question = session.current_question();
    let selection = session.current_selection();
    let graded = session.current_result().is_some();
    let text_width = area.width.saturating_sub(2) as usize;
    let first_row = layout.options_first_row(session.cursor());

    let mut lines = Vec::with_capacity(question.options.len());
    for (i, option) in question.options.iter().enumerate().skip(first_row) {
        let selected = selection.contains(&i);
        let marker = match (question.kind.is_exclusive(), selected) {
            (true, true) => "(•)",
            (true, false) => "( )",
            (false, true) => "[x]",
            (false, false) => "[ ]",
        };
        let pointer = if !graded && i == session.cursor() { ">" } else { " " };
        let label = option_label(i).unwrap_or('?');

        let style = if graded {
            if question.is_correct_option(i) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            }
        } else if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let row = format!("{} {} {}. {}", pointer, marker, label, option);
        lines.push(Line::from(Span::styled(truncate_string(&row, text_width), style)));
    }

    let options = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, area);
}

fn draw_analysis(f: &mut Frame, session: &QuizSession, area: Rect) {
    let question = session.current_question();
    let mut text = Text::default();

    let border_color = match session.current_result() {
        Some(Grade::Correct) => {
            text.push_line(Line::from(Span::styled(
                "Correct",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            Color::Green
        }
        Some(Grade::Wrong) => {
            text.push_line(Line::from(Span::styled(
                format!("Wrong (correct answer: {})", question.answer_string()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            Color::Red
        }
        None => {
            text.push_line(Line::from(Span::styled(
                "Press c to check your answer",
                disabled_style().add_modifier(Modifier::ITALIC),
            )));
            Color::DarkGray
        }
    };

    if session.current_result().is_some() {
        text.push_line(Line::from(
            question
                .explanation
                .as_deref()
                .unwrap_or("No explanation available"),
        ));
    }

    let analysis = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title("Analysis"),
    );
    f.render_widget(analysis, area);
}

pub fn status_style(status: QuestionStatus) -> Style {
    match status {
        QuestionStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        QuestionStatus::Wrong => Style::default().fg(Color::White).bg(Color::Red),
        QuestionStatus::Answered => Style::default().fg(Color::Black).bg(Color::Blue),
        QuestionStatus::Unanswered => Style::default(),
    }
}

fn draw_grid(f: &mut Frame, session: &QuizSession, layout: &QuizLayout) {
    let active = session.current_index();
    let columns = layout.grid_columns();
    let first_row = layout.grid_first_row(active);
    let count = session.bank().len();

    let lines: Vec<Line> = (0..count)
        .collect::<Vec<_>>()
        .chunks(columns)
        .skip(first_row)
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for &i in row {
                let mut style = status_style(session.status(i));
                if i == active {
                    style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                }
                spans.push(Span::styled(format!("{:^4}", i + 1), style));
                spans.push(Span::from(" "));
            }
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Questions"));
    f.render_widget(grid, layout.grid_area);
}

fn draw_help(f: &mut Frame, session: &QuizSession, area: Rect) {
    let nav = session.navigator();
    let graded = session.current_result().is_some();

    let mut spans = vec![
        Span::styled(
            "←",
            if nav.can_go_previous() {
                key_style()
            } else {
                disabled_style()
            },
        ),
        Span::styled(
            " Prev  ",
            if nav.can_go_previous() {
                Style::default()
            } else {
                disabled_style()
            },
        ),
        Span::styled(
            "→",
            if nav.can_go_next() {
                key_style()
            } else {
                disabled_style()
            },
        ),
        Span::styled(
            " Next  ",
            if nav.can_go_next() {
                Style::default()
            } else {
                disabled_style()
            },
        ),
    ];
    if !graded {
        spans.extend([
            Span::styled("↑/↓", key_style()),
            Span::from(" Move  "),
            Span::styled("Space/1-9", key_style()),
            Span::from(" Select  "),
            Span::styled("c", key_style()),
            Span::from(" Check  "),
        ]);
    }
    spans.extend([
        Span::styled("s", key_style()),
        Span::from(" Submit Exam  "),
        Span::styled("Esc", key_style()),
        Span::from(" Quit"),
    ]);

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Quit Quiz")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave this quiz? Answers are not saved.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        Span::styled("Ctrl+C", key_style()),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
